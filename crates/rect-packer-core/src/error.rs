use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackerError {
    #[error("Invalid bin dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Unknown placement heuristic: {0:?}")]
    UnknownHeuristic(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackerError>;
