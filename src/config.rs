use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Runtime settings for the recipe browser
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Number of search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Serving count a freshly loaded recipe starts with
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// JSON file holding the shopping list and likes
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    /// Request timeout in seconds; unset means requests never time out
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            results_per_page: default_results_per_page(),
            default_servings: default_servings(),
            storage_path: default_storage_path(),
            timeout: None,
        }
    }
}

fn default_api_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_results_per_page() -> usize {
    10
}

fn default_servings() -> u32 {
    4
}

fn default_storage_path() -> String {
    "recipe-browser.json".to_string()
}

impl BrowserConfig {
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from the named file (extension optional) and the environment
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_BROWSER__ prefix
/// 2. The config file (missing file is fine)
/// 3. Default values
///
/// Environment variable format: RECIPE_BROWSER__RESULTS_PER_PAGE
pub fn load_config(file_name: &str) -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(file_name).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
