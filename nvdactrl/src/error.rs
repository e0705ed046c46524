//! Error types for controller operations.

use crate::status::ErrorStatus;

/// Errors from the safe client surface.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("NVDA is not running")]
    NotRunning,
    #[error("controller call failed with status {status}")]
    CallFailed { status: ErrorStatus },
    #[error("failed to load controller library: {0}")]
    LibraryLoad(String),
    #[error("controller library is missing symbol: {0}")]
    MissingSymbol(String),
    #[error("text contains an interior NUL and cannot cross the ABI")]
    NulInText,
}

pub type Result<T> = std::result::Result<T, ControllerError>;
