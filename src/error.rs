use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("failed to fetch repository data: {0}")]
    FetchFailed(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid repository target: {0}")]
    InvalidTarget(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MirrorError>;
