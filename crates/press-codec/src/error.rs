/// Errors from codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The requested algorithm name is not one of the known variants.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The input is not valid output of the claimed algorithm.
    #[error("{algorithm} decompression failed: {source}")]
    Malformed {
        algorithm: &'static str,
        source: std::io::Error,
    },

    /// The encoder itself failed. Rare; buffer-backed encoders only fail
    /// on internal codec errors, never on destination I/O.
    #[error("{algorithm} compression failed: {source}")]
    EncodeFailed {
        algorithm: &'static str,
        source: std::io::Error,
    },
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
