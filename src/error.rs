use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The HTTP request to the recipe API failed
    #[error("Failed to fetch from recipe API: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API response could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered, but with an error status or error body
    #[error("Recipe API error: {0}")]
    Api(String),

    /// Reading or writing the persisted store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// A line of user input did not decode into a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
