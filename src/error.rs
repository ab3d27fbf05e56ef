use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    #[error("remote API error: {0}")]
    Remote(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Error::Remote(value.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Remote(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Remote(value.to_string())
    }
}
