//! A grader for short-text questions, where the answer is matched against a set of acceptable
//! phrasings and marks are awarded on an all-or-nothing basis.
//!
//! The `ShortTextGrader` trims surrounding whitespace and compares case-insensitively, so
//! `" PARIS "` matches an acceptable phrasing of `"Paris"`. Multiple acceptable phrasings are
//! supported; a match against any one of them earns full marks.

use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerPayload, GradingResult, QuestionData};

/// A grader that awards full marks if the trimmed answer text case-insensitively equals the
/// trimmed text of **any** correct option.
///
/// A blank or missing answer is a wrong answer, and a question with no correct options
/// configured is automatically wrong. Comparison is a full-string match after normalization;
/// no substring or fuzzy matching.
pub struct ShortTextGrader;

impl QuestionGrader for ShortTextGrader {
    /// Grades a short-text answer by normalized equality against the acceptable phrasings.
    ///
    /// # Arguments
    ///
    /// * `answer` - The student's answer; only `text` is read.
    /// * `question` - The question, supplying `correct_options` and `max_points`.
    ///
    /// # Returns
    ///
    /// Returns `GradingResult::correct(max_points)` when the normalized answer equals any
    /// normalized correct option text, otherwise `GradingResult::incorrect()`.
    fn grade(&self, answer: &AnswerPayload, question: &QuestionData) -> GradingResult {
        let Some(text) = answer.text.as_deref() else {
            return GradingResult::incorrect();
        };

        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() || question.correct_options.is_empty() {
            return GradingResult::incorrect();
        }

        let is_match = question
            .correct_options
            .iter()
            .filter_map(|option| option.text.as_deref())
            .any(|accepted| accepted.trim().to_lowercase() == normalized);

        if is_match {
            GradingResult::correct(question.max_points)
        } else {
            GradingResult::incorrect()
        }
    }
}
