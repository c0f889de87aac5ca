//!
//! # Suggestor Trait
//!
//! This module defines the [`GradeSuggestor`] trait and the [`GradeSuggestion`] struct, which are
//! used to implement pluggable, advisory AI grading suggestions.
//!
//! A suggestion is never authoritative: it is surfaced to a human grader, who decides what to feed
//! into the manual grading path. Nothing in the grading core invokes a suggestor.

use crate::error::GradingError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything a suggestion provider needs to know about one answer under review.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionContext {
    /// The question text as shown to the student.
    pub question_text: String,
    /// A model answer, when the question has one.
    pub expected_answer: Option<String>,
    /// The student's free-form answer.
    pub student_answer: String,
    /// The maximum number of points the question is worth.
    pub max_points: u32,
}

/// An advisory grade suggestion for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSuggestion {
    /// Suggested points, already clamped to `[0, max_points]`.
    pub points: u32,
    /// A short justification for the suggested points.
    pub comment: String,
    /// Provider confidence in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// A trait for pluggable AI grade suggestion providers.
///
/// Implement this trait to define how a suggestion is produced for a free-text answer
/// awaiting manual review.
///
/// # Arguments
/// - `context`: The question, expected answer, student answer, and point ceiling.
///
/// # Returns
/// - `Ok(GradeSuggestion)`: An advisory suggestion for the human grader.
/// - `Err(GradingError::SuggestionFailed)`: If the provider is unavailable or responds unusably.
#[async_trait]
pub trait GradeSuggestor: Send + Sync {
    async fn suggest_grade(
        &self,
        context: &SuggestionContext,
    ) -> Result<GradeSuggestion, GradingError>;
}
