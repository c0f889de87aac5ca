//! # Scorer Module
//!
//! This module provides the score-aggregation algorithm for an attempt.
//! The primary function, `calculate_score`, folds individual grading results and the
//! full question set into a single [`ScoreSummary`].

use crate::types::{GradingResult, QuestionData};
use serde::{Deserialize, Serialize};

/// The aggregate outcome of one grading pass over an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Sum of `max_points` over every question in the attempt.
    pub total_points: u32,
    /// Sum of `points_awarded` over every grading result.
    pub earned_points: u32,
    /// `earned_points / total_points` as an integer percentage (0-100).
    pub score: u32,
}

/// Computes the aggregate score for an attempt from its grading results and questions.
///
/// `total_points` is taken from the question set, not the results, so every question counts
/// toward the denominator even when a result is missing or worth zero.
///
/// # Arguments
///
/// * `results` - The grading results accumulated for the attempt, in any order.
/// * `questions` - The full question set of the attempt.
///
/// # Returns
///
/// A [`ScoreSummary`] whose `score` is the percentage of earned over total points, rounded
/// half-to-even to the nearest integer. If `total_points` is 0 the score is 0; this is a
/// deliberate floor to avoid division by zero, not an error.
///
/// # Example
///
/// ```
/// use grader::scorer::calculate_score;
/// use grader::types::{GradingResult, QuestionData, QuestionType};
///
/// let questions = vec![
///     QuestionData {
///         id: "q1".to_string(),
///         question_type: QuestionType::SingleChoice,
///         max_points: 5,
///         correct_options: vec![],
///     },
///     QuestionData {
///         id: "q2".to_string(),
///         question_type: QuestionType::SingleChoice,
///         max_points: 15,
///         correct_options: vec![],
///     },
/// ];
/// let results = vec![GradingResult::correct(5), GradingResult::incorrect()];
///
/// let summary = calculate_score(&results, &questions);
/// assert_eq!(summary.total_points, 20);
/// assert_eq!(summary.earned_points, 5);
/// assert_eq!(summary.score, 25);
/// ```
pub fn calculate_score<'a, R>(results: R, questions: &[QuestionData]) -> ScoreSummary
where
    R: IntoIterator<Item = &'a GradingResult>,
{
    let total_points: u32 = questions.iter().map(|q| q.max_points).sum();
    let earned_points: u32 = results.into_iter().map(|r| r.points_awarded).sum();

    let score = if total_points > 0 {
        // Half-to-even rounding, matching the banker's rounding of the source runtime.
        (earned_points as f64 / total_points as f64 * 100.0).round_ties_even() as u32
    } else {
        0
    };

    ScoreSummary {
        total_points,
        earned_points,
        score,
    }
}
