use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("Source unavailable: {0}")]
    SourceUnavailable(#[from] reqwest::Error),

    #[error("Source returned HTTP {status}: {url}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Malformed summary markup: {0}")]
    MalformedSummary(String),

    // Output errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeederError {
    /// True for failures that only cost one source its entries
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            FeederError::SourceUnavailable(_)
                | FeederError::HttpStatus { .. }
                | FeederError::FeedParse(_)
        )
    }
}

impl From<feed_rs::parser::ParseFeedError> for FeederError {
    fn from(err: feed_rs::parser::ParseFeedError) -> Self {
        FeederError::FeedParse(err.to_string())
    }
}

pub type FeederResult<T> = Result<T, FeederError>;
