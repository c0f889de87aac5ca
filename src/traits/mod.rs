//!
//! Traits Module
//!
//! This module contains core traits used throughout the grading system for extensibility and abstraction.
//!
//! - [`grader`]: Defines the strategy trait for grading a single answer against its question.
//! - [`suggestor`]: Defines the trait for advisory, non-authoritative AI grade suggestions.
//!
//! Implement these traits to extend or customize the grader's behavior for new question types or
//! suggestion providers.

pub mod grader;
pub mod suggestor;
