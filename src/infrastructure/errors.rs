use crate::domain::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl From<arboard::Error> for InfraError {
    fn from(err: arboard::Error) -> Self {
        InfraError::Clipboard(err.to_string())
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
