//! Error infrastructure for the world core.
//!
//! Two failure kinds exist in the transition contract and both are explicit
//! typed results, never panics:
//!
//! - lookup by an absent identity aborts the whole operation with
//!   [`WorldError::NotFound`], leaving the world untouched;
//! - applying a combat operation to a thing without the target capability
//!   fails with [`WorldError::InvalidTarget`].
//!
//! Rejected movement is *not* an error: the operation succeeds and returns
//! the unmoved thing.

use crate::state::Identity;

/// Severity classification for [`WorldError`], used by callers to pick a
/// handling strategy (logging level, whether retrying with changed input can
/// help).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; an alternative input may succeed.
    Recoverable,

    /// Invalid input; retrying unchanged cannot succeed.
    Validation,

    /// The operation was aborted wholesale; the world is guaranteed
    /// unchanged.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Errors surfaced by world transition operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldError {
    /// An identity-keyed operation found no thing with the given identity.
    #[error("thing {0} not found")]
    NotFound(Identity),

    /// The operand lacks the capability the operation requires (for combat:
    /// only a living player can take damage).
    #[error("thing {id} is not a valid target")]
    InvalidTarget { id: Identity },
}

impl WorldError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Fatal,
            Self::InvalidTarget { .. } => ErrorSeverity::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failure_is_fatal() {
        let error = WorldError::NotFound(Identity::new("ghost"));
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(error.to_string(), "thing #ghost not found");
    }

    #[test]
    fn capability_mismatch_is_validation() {
        let error = WorldError::InvalidTarget {
            id: Identity::new("rock"),
        };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }
}
