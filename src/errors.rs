use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to access remote store: {0}")]
    RemoteStoreError(String),

    #[error("Local mirror unavailable: {0}")]
    LocalStoreError(String),

    #[error("Failed to access generation API: {0}")]
    GenerationError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for GreetingError {
    fn from(error: reqwest::Error) -> Self {
        GreetingError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for GreetingError {
    fn from(error: serde_json::Error) -> Self {
        GreetingError::ParseError(error.to_string())
    }
}

impl From<std::io::Error> for GreetingError {
    fn from(error: std::io::Error) -> Self {
        GreetingError::LocalStoreError(error.to_string())
    }
}

impl From<anyhow::Error> for GreetingError {
    fn from(error: anyhow::Error) -> Self {
        GreetingError::RemoteStoreError(error.to_string())
    }
}
