//! # Grader Library
//!
//! This crate provides the core logic for grading student attempts in an online assessment
//! platform. It supports polymorphic per-question-type grading strategies, score aggregation
//! across an attempt, and the manual-grading reconciliation flow used when a human reviewer
//! overrides or supplies a grade.
//!
//! ## Key Concepts
//! - **GradingOrchestrator**: The main entry point, grading every answer of an attempt and
//!   recomputing aggregates after a manual grade.
//! - **Graders**: Pluggable strategies for deciding correctness per question type
//!   (single choice, multi choice, true/false, short text, long text).
//! - **GradingService**: Dispatches a single answer to the grader registered for its
//!   question type and constructs validated manual grades.
//! - **Suggestions**: Advisory, non-authoritative AI grade suggestions a human grader can
//!   consult before assigning a manual grade.
//!
//! The grading core is pure and synchronous: it performs no I/O and holds no shared mutable
//! state, so concurrent grading of different attempts needs no coordination. Transport
//! adapters (an HTTP handler or a queue consumer) deserialize into the request records of
//! [`report`] and call the same orchestrator.

pub mod error;
pub mod graders;
pub mod report;
pub mod scorer;
pub mod service;
pub mod suggestion;
pub mod traits;
pub mod types;

use crate::error::GradingError;
use crate::report::{
    GradeAttemptRequest, GradeAttemptResponse, GradedAnswer, ManualGradeRequest,
    ManualGradeResponse,
};
use crate::service::GradingService;
use crate::types::GradingResult;

use chrono::Utc;
use std::collections::HashSet;
use tracing::warn;

/// Grades whole attempts and reconciles manual grades into attempt aggregates.
///
/// The orchestrator owns a [`GradingService`] whose grader registry is built once at
/// construction. Each call operates only on its request and produces a response with no
/// side effects on shared state.
pub struct GradingOrchestrator {
    service: GradingService,
}

impl GradingOrchestrator {
    /// Create an orchestrator around an existing service, e.g. one shared with other
    /// components via injection.
    pub fn new(service: GradingService) -> Self {
        Self { service }
    }

    /// Grades every answer of an attempt and aggregates the final score.
    ///
    /// # Steps
    /// 1. Each answer is matched to its question by id and graded through the service.
    ///    An answer referencing an unknown question id is skipped with a warning; stale or
    ///    partial question sets are tolerated rather than failing the attempt.
    /// 2. Every question that received no answer is scored as incorrect, so `total_points`
    ///    always reflects the full question set.
    /// 3. The aggregate score is computed over all accumulated results.
    ///
    /// Result order is stable for identical input: answered questions first in request
    /// order, then unanswered questions in question order.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::UnsupportedQuestionType`] if any question's type has no
    /// registered grader. The batch fails atomically; there is no partial success.
    pub fn grade_attempt(
        &self,
        request: &GradeAttemptRequest,
    ) -> Result<GradeAttemptResponse, GradingError> {
        let mut results: Vec<GradedAnswer> = Vec::with_capacity(request.questions.len());
        let mut answered: HashSet<&str> = HashSet::with_capacity(request.answers.len());

        for submission in &request.answers {
            let Some(question) = request
                .questions
                .iter()
                .find(|q| q.id == submission.question_id)
            else {
                warn!(
                    attempt_id = %request.attempt_id,
                    question_id = %submission.question_id,
                    "answer references a question missing from the attempt, skipping"
                );
                continue;
            };

            let result = self.service.grade_answer(&submission.answer, question)?;
            answered.insert(question.id.as_str());
            results.push(GradedAnswer {
                question_id: question.id.clone(),
                result,
            });
        }

        for question in &request.questions {
            if !answered.contains(question.id.as_str()) {
                results.push(GradedAnswer {
                    question_id: question.id.clone(),
                    result: GradingResult::incorrect(),
                });
            }
        }

        let summary = scorer::calculate_score(results.iter().map(|g| &g.result), &request.questions);

        Ok(GradeAttemptResponse {
            attempt_id: request.attempt_id.clone(),
            results,
            total_points: summary.total_points,
            earned_points: summary.earned_points,
            score: summary.score,
            graded_at: Utc::now().to_rfc3339(),
        })
    }

    /// Applies one manual grade and recomputes the attempt's aggregate score.
    ///
    /// Every other answer's previously computed `points_awarded` is preserved as a manual
    /// result; automatic grading is not re-run. Because the aggregate is always recomputed
    /// from the full answer set, applying the same manual grade twice yields the same output.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::InvalidManualGrade`] if `points` falls outside
    /// `[0, max_points]`.
    pub fn grade_answer_manually(
        &self,
        request: &ManualGradeRequest,
    ) -> Result<ManualGradeResponse, GradingError> {
        let manual =
            self.service
                .grade_manually(request.points, request.max_points, request.comment.clone())?;

        let mut results: Vec<GradingResult> = Vec::with_capacity(request.all_answers.len() + 1);
        let mut replaced = false;
        for prior in &request.all_answers {
            if prior.question_id == request.question_id {
                results.push(manual.clone());
                replaced = true;
            } else {
                results.push(GradingResult::manual(prior.points_awarded, None));
            }
        }
        // A previously ungraded question (e.g. a pending essay) has no prior entry.
        if !replaced {
            results.push(manual.clone());
        }

        let summary = scorer::calculate_score(&results, &request.all_questions);

        Ok(ManualGradeResponse {
            attempt_id: request.attempt_id.clone(),
            question_id: request.question_id.clone(),
            points_awarded: manual.points_awarded,
            feedback: manual.feedback,
            total_earned_points: summary.earned_points,
            total_max_points: summary.total_points,
            score_percentage: summary.score,
        })
    }
}

impl Default for GradingOrchestrator {
    fn default() -> Self {
        Self::new(GradingService::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{AnswerSubmission, PriorAnswer};
    use crate::types::{AnswerPayload, CorrectOption, GradeType, QuestionData, QuestionType};
    use chrono::DateTime;

    fn choice_question(id: &str, correct_id: &str, max_points: u32) -> QuestionData {
        QuestionData {
            id: id.to_string(),
            question_type: QuestionType::SingleChoice,
            max_points,
            correct_options: vec![CorrectOption {
                id: Some(correct_id.to_string()),
                text: None,
            }],
        }
    }

    fn essay_question(id: &str, max_points: u32) -> QuestionData {
        QuestionData {
            id: id.to_string(),
            question_type: QuestionType::LongText,
            max_points,
            correct_options: vec![],
        }
    }

    fn choice_answer(question_id: &str, option_id: &str) -> AnswerSubmission {
        AnswerSubmission {
            question_id: question_id.to_string(),
            answer: AnswerPayload {
                option_id: Some(option_id.to_string()),
                ..Default::default()
            },
        }
    }

    fn is_valid_iso8601(s: &str) -> bool {
        DateTime::parse_from_rfc3339(s).is_ok()
    }

    #[test]
    fn test_grade_attempt_happy_path() {
        let orchestrator = GradingOrchestrator::default();
        let request = GradeAttemptRequest {
            attempt_id: "attempt-1".to_string(),
            answers: vec![choice_answer("q1", "A"), choice_answer("q2", "X")],
            questions: vec![
                choice_question("q1", "A", 5),
                choice_question("q2", "B", 5),
                choice_question("q3", "C", 10),
            ],
        };

        let response = orchestrator.grade_attempt(&request).unwrap();

        assert_eq!(response.attempt_id, "attempt-1");
        assert_eq!(response.total_points, 20);
        assert_eq!(response.earned_points, 5);
        assert_eq!(response.score, 25);
        assert!(is_valid_iso8601(&response.graded_at));

        // Answered questions first in request order, then the synthesized entry for q3.
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].question_id, "q1");
        assert!(response.results[0].result.is_correct);
        assert_eq!(response.results[1].question_id, "q2");
        assert!(!response.results[1].result.is_correct);
        assert_eq!(response.results[2].question_id, "q3");
        assert!(!response.results[2].result.is_correct);
        assert_eq!(response.results[2].result.points_awarded, 0);
        assert_eq!(response.results[2].result.grade_type, GradeType::Automatic);
    }

    #[test]
    fn test_grade_attempt_full_coverage_when_all_questions_known() {
        let orchestrator = GradingOrchestrator::default();
        let request = GradeAttemptRequest {
            attempt_id: "attempt-2".to_string(),
            answers: vec![choice_answer("q2", "B")],
            questions: vec![
                choice_question("q1", "A", 5),
                choice_question("q2", "B", 5),
                essay_question("q3", 10),
                choice_question("q4", "D", 5),
            ],
        };

        let response = orchestrator.grade_attempt(&request).unwrap();
        assert_eq!(response.results.len(), request.questions.len());
    }

    #[test]
    fn test_grade_attempt_skips_unknown_question_reference() {
        let orchestrator = GradingOrchestrator::default();
        let request = GradeAttemptRequest {
            attempt_id: "attempt-3".to_string(),
            answers: vec![choice_answer("q1", "A"), choice_answer("stale-id", "A")],
            questions: vec![choice_question("q1", "A", 5)],
        };

        let response = orchestrator.grade_attempt(&request).unwrap();

        // The stale answer is excluded; only the known question appears.
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].question_id, "q1");
        assert_eq!(response.earned_points, 5);
        assert_eq!(response.total_points, 5);
        assert_eq!(response.score, 100);
    }

    #[test]
    fn test_grade_attempt_pending_essay_counts_toward_total() {
        let orchestrator = GradingOrchestrator::default();
        let request = GradeAttemptRequest {
            attempt_id: "attempt-4".to_string(),
            answers: vec![
                choice_answer("q1", "A"),
                AnswerSubmission {
                    question_id: "q2".to_string(),
                    answer: AnswerPayload {
                        text: Some("An essay about borrowing.".to_string()),
                        ..Default::default()
                    },
                },
            ],
            questions: vec![choice_question("q1", "A", 10), essay_question("q2", 10)],
        };

        let response = orchestrator.grade_attempt(&request).unwrap();

        assert!(response.results[1].result.requires_manual_review);
        assert_eq!(response.earned_points, 10);
        assert_eq!(response.total_points, 20);
        assert_eq!(response.score, 50);
    }

    #[test]
    fn test_grade_attempt_empty_question_set_scores_zero() {
        let orchestrator = GradingOrchestrator::default();
        let request = GradeAttemptRequest {
            attempt_id: "attempt-5".to_string(),
            answers: vec![],
            questions: vec![],
        };
        let response = orchestrator.grade_attempt(&request).unwrap();
        assert_eq!(response.total_points, 0);
        assert_eq!(response.score, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_manual_reconciliation_replaces_prior_points() {
        let orchestrator = GradingOrchestrator::default();
        // Questions total 20; prior answers sum to 12 with question x at 3.
        let request = ManualGradeRequest {
            attempt_id: "attempt-6".to_string(),
            question_id: "x".to_string(),
            points: 8,
            max_points: 10,
            comment: Some("Stronger second half".to_string()),
            all_answers: vec![
                PriorAnswer {
                    question_id: "x".to_string(),
                    points_awarded: 3,
                },
                PriorAnswer {
                    question_id: "y".to_string(),
                    points_awarded: 5,
                },
                PriorAnswer {
                    question_id: "z".to_string(),
                    points_awarded: 4,
                },
            ],
            all_questions: vec![
                essay_question("x", 10),
                choice_question("y", "A", 5),
                choice_question("z", "B", 5),
            ],
        };

        let response = orchestrator.grade_answer_manually(&request).unwrap();

        assert_eq!(response.points_awarded, 8);
        assert_eq!(response.feedback.as_deref(), Some("Stronger second half"));
        assert_eq!(response.total_earned_points, 17);
        assert_eq!(response.total_max_points, 20);
        assert_eq!(response.score_percentage, 85);
    }

    #[test]
    fn test_manual_reconciliation_is_idempotent() {
        let orchestrator = GradingOrchestrator::default();
        let request = ManualGradeRequest {
            attempt_id: "attempt-7".to_string(),
            question_id: "x".to_string(),
            points: 6,
            max_points: 10,
            comment: None,
            all_answers: vec![
                PriorAnswer {
                    question_id: "x".to_string(),
                    points_awarded: 6,
                },
                PriorAnswer {
                    question_id: "y".to_string(),
                    points_awarded: 5,
                },
            ],
            all_questions: vec![essay_question("x", 10), choice_question("y", "A", 10)],
        };

        let first = orchestrator.grade_answer_manually(&request).unwrap();
        let second = orchestrator.grade_answer_manually(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_manual_reconciliation_for_previously_ungraded_question() {
        let orchestrator = GradingOrchestrator::default();
        // The pending essay never produced a prior entry; its manual grade must still count.
        let request = ManualGradeRequest {
            attempt_id: "attempt-8".to_string(),
            question_id: "essay".to_string(),
            points: 10,
            max_points: 10,
            comment: None,
            all_answers: vec![PriorAnswer {
                question_id: "y".to_string(),
                points_awarded: 5,
            }],
            all_questions: vec![essay_question("essay", 10), choice_question("y", "A", 10)],
        };

        let response = orchestrator.grade_answer_manually(&request).unwrap();
        assert_eq!(response.total_earned_points, 15);
        assert_eq!(response.total_max_points, 20);
        assert_eq!(response.score_percentage, 75);
    }

    #[test]
    fn test_manual_reconciliation_rejects_out_of_range_points() {
        let orchestrator = GradingOrchestrator::default();
        let request = ManualGradeRequest {
            attempt_id: "attempt-9".to_string(),
            question_id: "x".to_string(),
            points: 12,
            max_points: 10,
            comment: None,
            all_answers: vec![],
            all_questions: vec![essay_question("x", 10)],
        };

        let result = orchestrator.grade_answer_manually(&request);
        assert!(matches!(result, Err(GradingError::InvalidManualGrade(_))));
    }
}
