pub mod builder;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod ingredients;
pub mod likes;
pub mod list;
pub mod model;
pub mod recipe;
pub mod search;
pub mod source;
pub mod storage;
pub mod views;

pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use command::Command;
pub use config::BrowserConfig;
pub use controller::{AppState, Controller, Ticket};
pub use error::BrowserError;
pub use model::{Ingredient, LikedRecipe, RecipeDetail, RecipeSummary, ShoppingItem};
pub use recipe::{Recipe, ServingsChange};
pub use search::{Pagination, Search};
pub use source::{ForkifyClient, RecipeSource};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SharedStore};
pub use views::{Region, Screen};
