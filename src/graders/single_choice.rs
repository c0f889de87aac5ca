//! A grader for single-choice questions, where marks are awarded on an all-or-nothing basis.
//!
//! The `SingleChoiceGrader` checks whether the student's selected option id is a member of the
//! question's correct option ids. True/false questions are structurally a two-option single
//! choice and are graded by this same strategy.

use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerPayload, GradingResult, QuestionData};

/// A grader that awards full marks if the selected option is one of the correct options.
///
/// A missing selection is treated as a wrong answer, never as an error. A question with no
/// correct options configured is treated as automatically wrong rather than a failure, so a
/// misconfigured question can never award points.
pub struct SingleChoiceGrader;

impl QuestionGrader for SingleChoiceGrader {
    /// Grades a single-choice (or true/false) answer by membership of the selected option id.
    ///
    /// # Arguments
    ///
    /// * `answer` - The student's answer; only `option_id` is read.
    /// * `question` - The question, supplying `correct_options` and `max_points`.
    ///
    /// # Returns
    ///
    /// Returns `GradingResult::correct(max_points)` when the selected id matches a correct
    /// option id, otherwise `GradingResult::incorrect()`. No partial credit.
    fn grade(&self, answer: &AnswerPayload, question: &QuestionData) -> GradingResult {
        let Some(selected) = answer.option_id.as_deref() else {
            return GradingResult::incorrect();
        };

        if question.correct_options.is_empty() {
            return GradingResult::incorrect();
        }

        let is_match = question
            .correct_options
            .iter()
            .filter_map(|option| option.id.as_deref())
            .any(|id| id == selected);

        if is_match {
            GradingResult::correct(question.max_points)
        } else {
            GradingResult::incorrect()
        }
    }
}
