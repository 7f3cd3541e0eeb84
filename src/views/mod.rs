//! Text renderers, one per concern, and the screen they draw on.
//!
//! Renderers are pure: they turn records into text and never touch state.

pub mod likes_view;
pub mod list_view;
pub mod recipe_view;
pub mod search_view;

/// Area of the screen a rendered block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    SearchResults,
    Recipe,
    /// Only the servings line and ingredient quantities of the open recipe
    Servings,
    /// Only the like button of the open recipe
    LikeButton,
    ShoppingList,
    LikesMenu,
    Help,
}

/// Where rendered output ends up
pub trait Screen {
    /// Replace the content of `region`
    fn render(&mut self, region: Region, content: String);

    fn clear(&mut self, region: Region);

    /// Show a spinner in `region` until it is next rendered or cleared
    fn show_loader(&mut self, region: Region) {
        self.render(region, "Loading...".to_string());
    }

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);
}
