//! Error types for the core library.

use thiserror::Error;

use crate::fullname::FullNameType;
use crate::inbox::InboxMessageType;

/// Internal-consistency violations detected while classifying a message.
///
/// These never describe bad user input. They mean the data Reddit handed us
/// no longer has the shape the classifier was written against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    /// The parent kind and the subject line disagree.
    #[error(
        "data inconsistency: {parent_kind} parent expects subject {expected:?}, found {actual:?}"
    )]
    DataInconsistency {
        /// Kind decoded from the parent fullname.
        parent_kind: FullNameType,
        /// Subject Reddit sends for this parent kind.
        expected: &'static str,
        /// Subject actually present on the message.
        actual: String,
        /// Classification the parent kind designates.
        classified_as: InboxMessageType,
    },

    /// A combination the classifier treats as impossible was reached.
    #[error("unreachable state: non-private message has message parent {parent_id}")]
    UnreachableState {
        /// Parent fullname that triggered the violation.
        parent_id: String,
    },
}

impl ConsistencyError {
    /// Best-effort classification to use when the violation is tolerated.
    #[must_use]
    pub const fn fallback(&self) -> InboxMessageType {
        match self {
            Self::DataInconsistency { classified_as, .. } => *classified_as,
            Self::UnreachableState { .. } => InboxMessageType::Unknown,
        }
    }
}

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON was valid but not the listing shape we expected.
    #[error("Unexpected listing: {0}")]
    UnexpectedListing(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Consistency check failed under a strict policy.
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
