//! A grader for long-text (essay) questions. There is no automatic grading path for this
//! question type: every answer is deferred to a human reviewer.

use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerPayload, GradingResult, QuestionData};

/// A grader that always defers to manual review.
///
/// The pending-review result is an expected terminal state, not an error: the answer holds
/// zero points until a reviewer (optionally informed by an advisory AI suggestion) assigns
/// a grade through the manual grading path.
pub struct LongTextGrader;

impl QuestionGrader for LongTextGrader {
    /// Returns `GradingResult::manual_review_required()` for every answer, including an
    /// empty one. The reviewer decides what an empty essay is worth.
    fn grade(&self, _answer: &AnswerPayload, _question: &QuestionData) -> GradingResult {
        GradingResult::manual_review_required()
    }
}
