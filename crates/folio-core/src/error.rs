use thiserror::Error;

use crate::ViewId;

/// Why a visibility subscription could not be established.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObserveError {
    #[error("visibility observation is not available in this host")]
    Unavailable,
    #[error("view {0} is not mounted in the host tree")]
    UnknownTarget(ViewId),
    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f32),
    #[error("host rejected the observer: {0}")]
    Host(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write output")]
    Fmt(#[from] std::fmt::Error),
    #[error("view {id} ({kind}) cannot be rendered: {reason}")]
    Unsupported {
        id: ViewId,
        kind: &'static str,
        reason: String,
    },
}
