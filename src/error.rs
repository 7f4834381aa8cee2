//! Error types for the instance construction protocol.

use thiserror::Error;

/// Errors raised by `construct`.
///
/// All variants are fail-fast and synchronous; either validation passes and
/// the constructor runs to completion, or an error is returned before any
/// instance is handed out. Constructor-internal failures are carried
/// transparently and never classified by the protocol.
#[derive(Debug, Error)]
pub enum ConstructError {
    /// The value returned by a factory body matches neither legal descriptor
    /// shape.
    #[error("invalid descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// Construction arguments were supplied but the descriptor declares no
    /// constructor to receive them.
    #[error("missing constructor: {supplied} argument(s) supplied but the descriptor declares no ctor")]
    MissingConstructor { supplied: usize },

    /// A user constructor body failed; propagated unchanged.
    #[error(transparent)]
    Constructor(#[from] anyhow::Error),

    /// Registry lookup miss.
    #[error("unknown factory: {0}")]
    UnknownFactory(String),
}

impl ConstructError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ConstructError::InvalidDescriptor {
            reason: reason.into(),
        }
    }
}
