use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Login in Before")]
    Unauthenticated,

    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
