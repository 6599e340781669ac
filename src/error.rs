//! Error types for shipquote

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// shipquote errors
///
/// Pricing itself never fails; these cover manifest loading and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Manifest parse error: {0}")]
    ManifestParse(String),

    #[error("Invalid parcel #{index}: {reason}")]
    InvalidParcel { index: usize, reason: String },

    #[error("Unknown shipping speed: {0}")]
    UnknownSpeed(String),

    #[error("Unknown parcel tier: {0}")]
    UnknownTier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
