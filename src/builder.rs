use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::controller::Controller;
use crate::error::BrowserError;
use crate::source::{ForkifyClient, RecipeSource};
use crate::storage::{JsonFileStore, SharedStore};

/// Builder for configuring a [`Controller`]
#[derive(Default)]
pub struct RecipeBrowserBuilder {
    config: Option<BrowserConfig>,
    api_base_url: Option<String>,
    storage_path: Option<String>,
    source: Option<Arc<dyn RecipeSource>>,
    store: Option<SharedStore>,
}

/// Entry point for building a recipe browser
pub struct RecipeBrowser;

impl RecipeBrowser {
    /// Create a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .api_base_url("http://localhost:8080/api");
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }
}

impl RecipeBrowserBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the recipe API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Override the file the shopping list and likes are kept in
    pub fn storage_path(mut self, path: impl Into<String>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Use a custom recipe source instead of the HTTP client
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a custom store instead of the JSON file
    pub fn store(mut self, store: SharedStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Assemble the controller
    ///
    /// # Errors
    /// Returns `BrowserError::Builder` if the configuration is unusable,
    /// or the HTTP client error if the client cannot be created.
    pub fn build(self) -> Result<Controller, BrowserError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        if let Some(path) = self.storage_path {
            config.storage_path = path;
        }

        if config.results_per_page == 0 {
            return Err(BrowserError::Builder(
                "results_per_page must be at least 1".to_string(),
            ));
        }
        if config.default_servings == 0 {
            return Err(BrowserError::Builder(
                "default_servings must be at least 1".to_string(),
            ));
        }

        let source = match self.source {
            Some(source) => source,
            None => {
                if config.api_base_url.trim().is_empty() {
                    return Err(BrowserError::Builder(
                        "No recipe API configured. Set api_base_url or use .source()".to_string(),
                    ));
                }
                Arc::new(ForkifyClient::new(
                    config.api_base_url.clone(),
                    config.timeout_duration(),
                )?)
            }
        };

        let store = match self.store {
            Some(store) => store,
            None => Arc::new(JsonFileStore::new(config.storage_path.clone())),
        };

        Ok(Controller::new(source, store, config))
    }
}
