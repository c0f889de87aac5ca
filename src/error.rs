//! Grader Error Types
//!
//! This module defines the [`GradingError`] enum, which encapsulates all error types that can occur
//! while grading an attempt, applying a manual grade, or requesting an advisory AI suggestion.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! # Usage
//!
//! Use [`GradingError`] as the error type in functions that may fail due to configuration or
//! validation issues. Each variant is tailored to a specific error scenario encountered in the
//! grading pipeline.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GradingError;
//!
//! fn apply_points(points: i64, max_points: u32) -> Result<(), GradingError> {
//!     if points < 0 || points > max_points as i64 {
//!         return Err(GradingError::InvalidManualGrade(format!(
//!             "points must be between 0 and {max_points}, got {points}"
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

/// Represents all error types that can occur in the grading system.
#[derive(Debug)]
pub enum GradingError {
    /// A question's type has no registered grader. Fatal for the whole attempt's grading call.
    UnsupportedQuestionType(String),
    /// Manual grade points fall outside `[0, max_points]`.
    InvalidManualGrade(String),
    /// The advisory AI suggestion could not be produced (transport, auth, or response shape).
    SuggestionFailed(String),
}
