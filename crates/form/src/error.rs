//! Errors raised by collaborators.
//!
//! Validation failures are never Rust errors: they are plain messages
//! collected per field. The types here describe the other tier, where an
//! encoding, decoding or parsing step could not produce a result. The engine
//! turns them into diagnostics and carries on.

/// Failure of the blob encoding or image decoding step.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    /// The input is not shaped like `data:<mime>[;base64],<payload>`.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(&'static str),

    /// The data URL carries a percent-encoded payload.
    #[error("data URL payload is not base64 encoded")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to read image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to turn a human size descriptor into a byte count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeParseError {
    #[error("size descriptor is empty")]
    Empty,

    #[error("'{0}' does not start with a number")]
    InvalidNumber(String),

    #[error("unknown size unit '{0}'")]
    UnknownUnit(String),
}
