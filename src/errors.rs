use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Unknown harm block threshold: {0}")]
    UnknownThreshold(String),
}

pub type Result<T> = std::result::Result<T, EnvError>;
