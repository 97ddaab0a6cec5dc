use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchEngineError>;

#[derive(Debug, Error)]
pub enum SearchEngineError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// The envelope came back with `success: false`.
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Envelope has no {0} payload")]
    MissingData(&'static str),
}

impl From<reqwest::Error> for SearchEngineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchEngineError::Timeout(err.to_string())
        } else if err.is_decode() {
            SearchEngineError::Parse(err.to_string())
        } else {
            SearchEngineError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchEngineError {
    fn from(err: serde_json::Error) -> Self {
        SearchEngineError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for SearchEngineError {
    fn from(err: url::ParseError) -> Self {
        SearchEngineError::InvalidUrl(err.to_string())
    }
}
