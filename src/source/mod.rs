mod forkify;

pub use forkify::ForkifyClient;

use crate::error::BrowserError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Remote source of recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search recipes by keyword
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, BrowserError>;

    /// Fetch the full recipe for `id`
    async fn fetch_by_id(&self, id: &str) -> Result<RecipeDetail, BrowserError>;
}
