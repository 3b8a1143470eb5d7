use crate::zone::Zone;

/// Errors from staging store operations.
#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    /// The requested artifact does not exist in the zone.
    #[error("artifact not found in {zone} zone: {key}")]
    NotFound { zone: Zone, key: String },

    /// The key contains path separators or other rejected components.
    #[error("invalid artifact key: {0}")]
    InvalidKey(String),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for staging operations.
pub type StagingResult<T> = Result<T, StagingError>;
