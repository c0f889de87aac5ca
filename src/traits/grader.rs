use crate::types::{AnswerPayload, GradingResult, QuestionData};

/// QuestionGrader is a strategy trait for grading answers.
/// Each implementation provides the grading policy for one question type,
/// deciding correctness and points for a single answer.
///
/// Implementations must be pure and deterministic: no I/O, no side effects,
/// and no dependence on state outside the two arguments.
pub trait QuestionGrader: Send + Sync {
    /// Grade one answer against its question, producing a full GradingResult.
    ///
    /// - `answer`: the student's raw answer payload. Fields not relevant to the
    ///   question type are ignored, not rejected.
    /// - `question`: the grading-time view of the question (type, points, correct options).
    fn grade(&self, answer: &AnswerPayload, question: &QuestionData) -> GradingResult;
}
