//! Error types for seqdiff.
//!
//! Diff computation itself never fails: every strategy is total over its
//! inputs. Errors only surface when replaying a script that was built or
//! edited by hand and no longer describes the old sequence.

use thiserror::Error;

use crate::script::SpanKind;

/// Errors that can occur while applying an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Insert span carries no literal items
    #[error("insert span at new index {new_start} has no items")]
    MissingInsertItems {
        /// Start of the span in the new sequence
        new_start: usize,
    },

    /// Insert span item list disagrees with its length
    #[error("insert span at new index {new_start} declares {expected} items, carries {found}")]
    ItemCountMismatch {
        /// Start of the span in the new sequence
        new_start: usize,
        /// Declared span length
        expected: usize,
        /// Number of items attached
        found: usize,
    },

    /// Span reaches past the end of the old sequence
    #[error("{kind:?} span {start}+{len} exceeds old sequence of length {old_len}")]
    OutOfBounds {
        /// Kind of the offending span
        kind: SpanKind,
        /// Start in the old sequence
        start: usize,
        /// Span length
        len: usize,
        /// Length of the old sequence
        old_len: usize,
    },

    /// Span does not continue where the previous one ended
    #[error("span starts at old index {found}, expected {expected}")]
    Discontiguous {
        /// Old index the script had reached
        expected: usize,
        /// Old index the span claims
        found: usize,
    },

    /// Script ends before or after the old sequence does
    #[error("script consumed {consumed} of {old_len} old elements")]
    Truncated {
        /// Old elements consumed by Stable/Remove/Match/Delete
        consumed: usize,
        /// Length of the old sequence
        old_len: usize,
    },
}

/// Result type alias for script application.
pub type DiffResult<T> = Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::MissingInsertItems { new_start: 4 };
        assert_eq!(err.to_string(), "insert span at new index 4 has no items");

        let err = DiffError::Truncated { consumed: 2, old_len: 5 };
        assert_eq!(err.to_string(), "script consumed 2 of 5 old elements");

        let err = DiffError::OutOfBounds {
            kind: SpanKind::Match,
            start: 3,
            len: 4,
            old_len: 5,
        };
        assert_eq!(err.to_string(), "Match span 3+4 exceeds old sequence of length 5");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiffError>();
    }
}
