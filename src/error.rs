use std::time::Duration;
use thiserror::Error;

/// Errors raised while fetching, rendering or extracting scraped content.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure, timeout or non-success status from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// WebDriver session could not be created or a browser command failed
    #[error("browser error: {0}")]
    Browser(String),

    #[error("no element matching `{selector}` appeared within {timeout:?}")]
    RenderTimeout { selector: String, timeout: Duration },

    /// A required element was absent from a container
    #[error("missing `{field}` element (selector `{selector}`)")]
    MissingField {
        field: &'static str,
        selector: &'static str,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<fantoccini::error::CmdError> for ScrapeError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        ScrapeError::Browser(err.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for ScrapeError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        ScrapeError::Browser(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
