//! A grader for multi-choice questions, where **selection order is irrelevant** and marks are
//! awarded on an all-or-nothing basis.
//!
//! The `MultiChoiceGrader` compares the set of selected option ids against the set of correct
//! option ids. An extra or missing selection zeroes the score: there is no subset or superset
//! partial credit.

use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerPayload, GradingResult, QuestionData};
use std::collections::HashSet;

/// A grader that awards full marks only when the selected ids exactly equal the correct ids.
///
/// Duplicated selections collapse into the set, so selecting `[A, A, B]` against correct
/// `{A, B}` still earns full marks. An empty or missing selection is a wrong answer, and a
/// question with no correct options configured is automatically wrong.
pub struct MultiChoiceGrader;

impl QuestionGrader for MultiChoiceGrader {
    /// Grades a multi-choice answer by exact set equality of option ids.
    ///
    /// # Arguments
    ///
    /// * `answer` - The student's answer; only `option_ids` is read.
    /// * `question` - The question, supplying `correct_options` and `max_points`.
    ///
    /// # Returns
    ///
    /// Returns `GradingResult::correct(max_points)` when the selected set equals the correct
    /// set, otherwise `GradingResult::incorrect()`. No partial credit.
    fn grade(&self, answer: &AnswerPayload, question: &QuestionData) -> GradingResult {
        let Some(selected_ids) = answer.option_ids.as_deref() else {
            return GradingResult::incorrect();
        };
        if selected_ids.is_empty() {
            return GradingResult::incorrect();
        }

        let correct: HashSet<&str> = question
            .correct_options
            .iter()
            .filter_map(|option| option.id.as_deref())
            .collect();
        if correct.is_empty() {
            return GradingResult::incorrect();
        }

        let selected: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();

        if selected == correct {
            GradingResult::correct(question.max_points)
        } else {
            GradingResult::incorrect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CorrectOption, QuestionType};

    fn mock_question(correct_ids: &[&str], max_points: u32) -> QuestionData {
        QuestionData {
            id: "q1".to_string(),
            question_type: QuestionType::MultiChoice,
            max_points,
            correct_options: correct_ids
                .iter()
                .map(|id| CorrectOption {
                    id: Some(id.to_string()),
                    text: None,
                })
                .collect(),
        }
    }

    fn answer_with(ids: &[&str]) -> AnswerPayload {
        AnswerPayload {
            option_ids: Some(ids.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_set_match_awards_full_points() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        let result = grader.grade(&answer_with(&["B", "A"]), &question);
        assert!(result.is_correct);
        assert_eq!(result.points_awarded, 4);
    }

    #[test]
    fn test_subset_selection_awards_zero() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        let result = grader.grade(&answer_with(&["A"]), &question);
        assert!(!result.is_correct);
        assert_eq!(result.points_awarded, 0);
    }

    #[test]
    fn test_superset_selection_awards_zero() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        let result = grader.grade(&answer_with(&["A", "B", "C"]), &question);
        assert!(!result.is_correct);
        assert_eq!(result.points_awarded, 0);
    }

    #[test]
    fn test_missing_selection_is_wrong() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        assert_eq!(
            grader
                .grade(&AnswerPayload::default(), &question)
                .points_awarded,
            0
        );
    }

    #[test]
    fn test_empty_selection_is_wrong() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        assert_eq!(grader.grade(&answer_with(&[]), &question).points_awarded, 0);
    }

    #[test]
    fn test_no_correct_options_is_wrong() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&[], 4);
        assert_eq!(
            grader.grade(&answer_with(&["A"]), &question).points_awarded,
            0
        );
    }

    #[test]
    fn test_duplicate_selections_collapse() {
        let grader = MultiChoiceGrader;
        let question = mock_question(&["A", "B"], 4);
        let result = grader.grade(&answer_with(&["A", "A", "B"]), &question);
        assert!(result.is_correct);
        assert_eq!(result.points_awarded, 4);
    }
}
