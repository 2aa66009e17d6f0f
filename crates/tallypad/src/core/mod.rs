//! Core arithmetic entry machine.
//!
//! Everything in this module is a plain value with pure transition
//! functions. No UI toolkit types appear anywhere, so every state change
//! the button pad can trigger is directly unit-testable.

mod engine;
mod entry;
mod operations;

pub use engine::{Action, DisplayState, EngineState, Pending};
pub use entry::Entry;
pub use operations::Operator;

use thiserror::Error;

/// Result type for entry-engine operations
pub type EntryResult<T> = Result<T, EntryError>;

/// Largest fractional scale the decimal representation can carry.
pub const MAX_SCALE: u32 = 28;

/// Errors that can occur while driving the entry engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Result exceeds the representable decimal range
    #[error("overflow: result exceeds the representable decimal range")]
    Overflow,
    /// A digit outside 0..=9 was fed to the engine
    #[error("invalid digit: {0}")]
    InvalidDigit(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EntryError tests =====

    #[test]
    fn test_error_display_division_by_zero() {
        let err = EntryError::DivisionByZero;
        assert_eq!(format!("{err}"), "division by zero");
    }

    #[test]
    fn test_error_display_overflow() {
        let err = EntryError::Overflow;
        assert!(format!("{err}").contains("overflow"));
    }

    #[test]
    fn test_error_display_invalid_digit() {
        let err = EntryError::InvalidDigit(12);
        assert_eq!(format!("{err}"), "invalid digit: 12");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(EntryError::DivisionByZero);
        assert!(err.to_string().contains("division"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = EntryError::InvalidDigit(10);
        assert_eq!(err.clone(), err);
    }
}
