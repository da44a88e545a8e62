//! Error types shared by every container in the crate.
//!
//! All error conditions here are local and recoverable: the caller decides
//! whether to retry, substitute a default, or abort. Nothing in this crate
//! truncates silently or aborts the process.
//!
//! The only places an error is absorbed internally are the documented
//! fallback paths: [`NormMap::get_or`](crate::NormMap::get_or) and the
//! on-missing policy.

use std::fmt;

/// Error type for container operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CofferError {
    /// Index is outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// Key is absent, after normalization and any on-missing fallback.
    KeyNotFound { key: String },
    /// A pop was attempted on an empty deque.
    EmptyContainer,
    /// Malformed construction or an invalid layer-stack operation.
    PreconditionViolated { reason: String },
}

impl CofferError {
    /// Shorthand for a precondition failure with a formatted reason.
    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        CofferError::PreconditionViolated {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CofferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CofferError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            CofferError::KeyNotFound { key } => {
                write!(f, "key not found: '{}'", key)
            }
            CofferError::EmptyContainer => {
                write!(f, "container is empty")
            }
            CofferError::PreconditionViolated { reason } => {
                write!(f, "precondition violated: {}", reason)
            }
        }
    }
}

impl std::error::Error for CofferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = CofferError::IndexOutOfRange { index: 52, len: 52 };
        assert_eq!(err.to_string(), "index 52 out of range for length 52");

        let err = CofferError::KeyNotFound {
            key: "3".to_string(),
        };
        assert_eq!(err.to_string(), "key not found: '3'");
    }
}
