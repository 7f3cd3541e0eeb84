//! Application state and the controllers that drive it.
//!
//! Every user action arrives as a [`Command`], mutates [`AppState`] and
//! re-renders the affected [`Region`]s of a [`Screen`]. Failures stop here:
//! they are logged and turned into an alert.

use crate::command::{Command, HELP};
use crate::config::BrowserConfig;
use crate::error::BrowserError;
use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::recipe::{Recipe, ServingsChange};
use crate::search::Search;
use crate::source::RecipeSource;
use crate::storage::SharedStore;
use crate::views::{likes_view, list_view, recipe_view, search_view, Region, Screen};
use log::{debug, error, info};
use std::ops::ControlFlow;
use std::sync::Arc;

pub const SEARCH_ALERT: &str = "Something wrong in the search...";
pub const RECIPE_ALERT: &str = "Error processing recipe!";
pub const NO_SEARCH_ALERT: &str = "Search for recipes first";
pub const NO_RECIPE_ALERT: &str = "Open a recipe first";

/// Everything the browser knows at one point in time
pub struct AppState {
    pub search: Option<Search>,
    pub search_page: usize,
    pub recipe: Option<Recipe>,
    /// Recipe id most recently requested, highlighted in the results
    pub selected: Option<String>,
    pub list: ShoppingList,
    pub likes: Likes,
}

/// Issued when a fetch starts; a result is applied only if its ticket is still current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct Controller {
    state: AppState,
    source: Arc<dyn RecipeSource>,
    config: BrowserConfig,
    search_generation: u64,
    recipe_generation: u64,
}

impl Controller {
    pub fn new(source: Arc<dyn RecipeSource>, store: SharedStore, config: BrowserConfig) -> Self {
        Self {
            state: AppState {
                search: None,
                search_page: 1,
                recipe: None,
                selected: None,
                list: ShoppingList::new(store.clone()),
                likes: Likes::new(store),
            },
            source,
            config,
            search_generation: 0,
            recipe_generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn source(&self) -> Arc<dyn RecipeSource> {
        self.source.clone()
    }

    /// Seed the shopping list and likes from storage and draw them
    pub fn restore(&mut self, screen: &mut dyn Screen) {
        self.state.likes.read_storage();
        self.state.list.read_storage();
        info!(
            "Restored {} likes and {} shopping list items",
            self.state.likes.num_likes(),
            self.state.list.items().len()
        );

        self.render_likes_menu(screen);
        if !self.state.list.items().is_empty() {
            screen.render(
                Region::ShoppingList,
                list_view::render_list(self.state.list.items()),
            );
        }
    }

    pub async fn dispatch(&mut self, command: Command, screen: &mut dyn Screen) -> ControlFlow<()> {
        debug!("Dispatching {:?}", command);
        match command {
            Command::Search(query) => self.control_search(&query, screen).await,
            Command::GoToPage(page) => self.control_page(page, screen),
            Command::OpenRecipe(id) => self.control_recipe(&id, screen).await,
            Command::Servings(change) => self.control_servings(change, screen),
            Command::AddRecipeToList => self.control_list(screen),
            Command::ToggleLike => self.control_like(screen),
            Command::AddItem {
                count,
                unit,
                ingredient,
            } => {
                let item = self.state.list.add_item(count, &unit, &ingredient);
                debug!("Added {}", list_view::render_item(&item));
                self.render_list(screen);
            }
            Command::UpdateCount { id, count } => {
                if self.state.list.update_count(&id, count) {
                    self.render_list(screen);
                } else {
                    screen.alert(&format!("No shopping list item '{}'", id));
                }
            }
            Command::DeleteItem(id) => {
                if self.state.list.delete_item(&id) {
                    self.render_list(screen);
                } else {
                    screen.alert(&format!("No shopping list item '{}'", id));
                }
            }
            Command::ShowList => self.render_list(screen),
            Command::ShowLikes => match likes_view::render_likes_menu(self.state.likes.likes()) {
                Some(menu) => screen.render(Region::LikesMenu, menu),
                None => screen.alert("No liked recipes yet"),
            },
            Command::Help => screen.render(Region::Help, HELP.to_string()),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    async fn control_search(&mut self, query: &str, screen: &mut dyn Screen) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let ticket = self.begin_search(screen);
        let mut search = Search::new(query);
        let result = search.get_results(self.source.as_ref()).await.map(|_| search);
        self.finish_search(ticket, result, screen);
    }

    /// Drop the current search and show a loader; the returned ticket identifies this search
    pub fn begin_search(&mut self, screen: &mut dyn Screen) -> Ticket {
        self.search_generation += 1;
        self.state.search = None;
        self.state.search_page = 1;
        screen.clear(Region::SearchResults);
        screen.show_loader(Region::SearchResults);
        Ticket(self.search_generation)
    }

    /// Apply a finished search unless a newer one has started since
    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        result: Result<Search, BrowserError>,
        screen: &mut dyn Screen,
    ) {
        if ticket.0 != self.search_generation {
            debug!("Discarding stale search response {:?}", ticket);
            return;
        }

        screen.clear(Region::SearchResults);
        match result {
            Ok(search) => {
                self.state.search = Some(search);
                self.render_results(screen);
            }
            Err(e) => {
                error!("Search failed: {}", e);
                screen.alert(SEARCH_ALERT);
            }
        }
    }

    fn control_page(&mut self, page: usize, screen: &mut dyn Screen) {
        if self.state.search.is_none() {
            screen.alert(NO_SEARCH_ALERT);
            return;
        }
        self.state.search_page = page;
        screen.clear(Region::SearchResults);
        self.render_results(screen);
    }

    fn render_results(&self, screen: &mut dyn Screen) {
        if let Some(search) = &self.state.search {
            screen.render(
                Region::SearchResults,
                search_view::render_results(
                    &search.results,
                    self.state.search_page,
                    self.config.results_per_page,
                    self.state.selected.as_deref(),
                ),
            );
        }
    }

    async fn control_recipe(&mut self, id: &str, screen: &mut dyn Screen) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }

        let ticket = self.begin_recipe(id, screen);
        let mut recipe = Recipe::new(id);
        let result = recipe.get_recipe(self.source.as_ref()).await.map(|_| recipe);
        self.finish_recipe(ticket, result, screen);
    }

    /// Drop the open recipe, show a loader and highlight `id` among the results
    pub fn begin_recipe(&mut self, id: &str, screen: &mut dyn Screen) -> Ticket {
        self.recipe_generation += 1;
        self.state.recipe = None;
        screen.clear(Region::Recipe);
        screen.show_loader(Region::Recipe);

        self.state.selected = Some(id.to_string());
        if self.state.search.is_some() {
            self.render_results(screen);
        }
        Ticket(self.recipe_generation)
    }

    /// Derive presentation fields of a fetched recipe and show it
    pub fn finish_recipe(
        &mut self,
        ticket: Ticket,
        result: Result<Recipe, BrowserError>,
        screen: &mut dyn Screen,
    ) {
        if ticket.0 != self.recipe_generation {
            debug!("Discarding stale recipe response {:?}", ticket);
            return;
        }

        screen.clear(Region::Recipe);
        match result {
            Ok(mut recipe) => {
                recipe.parse_ingredients();
                recipe.calc_time();
                recipe.calc_servings(self.config.default_servings);

                let liked = self.state.likes.is_liked(&recipe.id);
                screen.render(Region::Recipe, recipe_view::render_recipe(&recipe, liked));
                screen.render(Region::LikeButton, likes_view::like_button(liked));
                self.state.recipe = Some(recipe);
            }
            Err(e) => {
                error!("Loading recipe failed: {}", e);
                screen.alert(RECIPE_ALERT);
            }
        }
    }

    fn control_servings(&mut self, change: ServingsChange, screen: &mut dyn Screen) {
        let Some(recipe) = self.state.recipe.as_mut() else {
            screen.alert(NO_RECIPE_ALERT);
            return;
        };

        if recipe.update_servings(change) {
            screen.render(
                Region::Servings,
                recipe_view::update_servings_ingredients(recipe),
            );
        }
    }

    fn control_list(&mut self, screen: &mut dyn Screen) {
        let Some(recipe) = self.state.recipe.as_ref() else {
            screen.alert(NO_RECIPE_ALERT);
            return;
        };

        for ingredient in &recipe.ingredients {
            self.state
                .list
                .add_item(ingredient.count, &ingredient.unit, &ingredient.ingredient);
        }
        self.render_list(screen);
    }

    fn control_like(&mut self, screen: &mut dyn Screen) {
        let Some(recipe) = self.state.recipe.as_ref() else {
            screen.alert(NO_RECIPE_ALERT);
            return;
        };

        let liked = if self.state.likes.is_liked(&recipe.id) {
            self.state.likes.delete_like(&recipe.id);
            false
        } else {
            self.state.likes.add_like(recipe.to_like());
            true
        };

        screen.render(Region::LikeButton, likes_view::like_button(liked));
        self.render_likes_menu(screen);
    }

    fn render_list(&self, screen: &mut dyn Screen) {
        screen.render(
            Region::ShoppingList,
            list_view::render_list(self.state.list.items()),
        );
    }

    fn render_likes_menu(&self, screen: &mut dyn Screen) {
        match likes_view::render_likes_menu(self.state.likes.likes()) {
            Some(menu) => screen.render(Region::LikesMenu, menu),
            None => screen.clear(Region::LikesMenu),
        }
    }
}
