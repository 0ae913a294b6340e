use fast12_core::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastError {
    #[error("Invalid image dimensions: {width}x{height} (must be > 0)")]
    InvalidImageSize { width: usize, height: usize },
    #[error("Image data length mismatch: expected {expected_len}, got {actual_len}")]
    InvalidImageData { expected_len: usize, actual_len: usize },
    #[error("Invalid threshold: {0} (must be >= 0)")]
    InvalidThreshold(i32),
    #[error("Grid is {width}x{height}, detector expects {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[cfg(feature = "serde")]
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type FastResult<T> = Result<T, FastError>;
