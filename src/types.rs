//! # Types Module
//!
//! This module defines the core data structures used throughout the grading system:
//! the grading-time view of a question, the student's raw answer payload, and the
//! result of grading a single answer.
//!
//! [`GradingResult`] is only constructed through its named factory methods so that
//! each grading code path states its own invariants instead of assigning raw fields.

use serde::{Deserialize, Serialize};

/// The kind of question being graded. Determines which grading strategy applies.
///
/// `TrueFalse` is structurally a two-option single choice and is graded by the
/// same strategy as `SingleChoice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    SingleChoice,
    MultiChoice,
    TrueFalse,
    ShortText,
    LongText,
}

/// One acceptable answer for a question.
///
/// `id` is populated for choice-style matching (single/multi choice, true/false);
/// `text` is populated for short-text matching. The grader for a question type
/// only reads the field relevant to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectOption {
    pub id: Option<String>,
    pub text: Option<String>,
}

/// Grading-time view of a question: just enough to decide correctness and points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    /// The unique identifier for the question.
    pub id: String,
    /// The question kind, selecting the grading strategy.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// The maximum number of points this question is worth.
    pub max_points: u32,
    /// The set of acceptable answers. Empty means the question is misconfigured;
    /// graders treat that as automatically wrong rather than an error.
    #[serde(default)]
    pub correct_options: Vec<CorrectOption>,
}

/// The student's raw answer for one question.
///
/// Exactly one field is semantically active depending on the question type.
/// Fields not relevant to the type are ignored by the grader, not validated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    /// Selected option identifier (single choice / true-false).
    #[serde(default)]
    pub option_id: Option<String>,
    /// Selected option identifiers, order irrelevant (multi choice).
    #[serde(default)]
    pub option_ids: Option<Vec<String>>,
    /// Free-form answer text (short/long text).
    #[serde(default)]
    pub text: Option<String>,
}

/// How a [`GradingResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeType {
    /// Graded by a deterministic rule without human input.
    Automatic,
    /// Graded (or awaiting grading) by a human reviewer.
    Manual,
    /// Graded by a human who accepted an advisory AI suggestion.
    Ai,
}

/// The outcome of grading one answer.
///
/// Invariant: `0 <= points_awarded <= question.max_points` for every constructor;
/// no grading path ever produces negative points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The number of points awarded for the answer.
    pub points_awarded: u32,
    /// How this result was produced.
    #[serde(rename = "type")]
    pub grade_type: GradeType,
    /// Whether a human must review the answer before a final score exists.
    pub requires_manual_review: bool,
    /// Optional reviewer comment surfaced to the student.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Confidence reported by the AI suggestion, in `[0.0, 1.0]`. Only set for AI grades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
}

impl GradingResult {
    /// A fully correct automatic result awarding `points`.
    pub fn correct(points: u32) -> Self {
        Self {
            is_correct: true,
            points_awarded: points,
            grade_type: GradeType::Automatic,
            requires_manual_review: false,
            feedback: None,
            ai_confidence: None,
        }
    }

    /// An incorrect automatic result awarding zero points.
    pub fn incorrect() -> Self {
        Self {
            is_correct: false,
            points_awarded: 0,
            grade_type: GradeType::Automatic,
            requires_manual_review: false,
            feedback: None,
            ai_confidence: None,
        }
    }

    /// A partial-credit automatic result: not correct, but some points awarded.
    ///
    /// Reserved for partial-credit graders. No current grader awards non-zero
    /// partial credit; all shipped strategies are all-or-nothing.
    pub fn partial(points: u32) -> Self {
        Self {
            is_correct: false,
            points_awarded: points,
            grade_type: GradeType::Automatic,
            requires_manual_review: false,
            feedback: None,
            ai_confidence: None,
        }
    }

    /// A terminal "pending human review" result. Zero points until a reviewer decides.
    pub fn manual_review_required() -> Self {
        Self {
            is_correct: false,
            points_awarded: 0,
            grade_type: GradeType::Manual,
            requires_manual_review: true,
            feedback: None,
            ai_confidence: None,
        }
    }

    /// A human-assigned grade. Correct iff any points were awarded.
    pub fn manual(points: u32, comment: Option<String>) -> Self {
        Self {
            is_correct: points > 0,
            points_awarded: points,
            grade_type: GradeType::Manual,
            requires_manual_review: false,
            feedback: comment,
            ai_confidence: None,
        }
    }

    /// A grade produced by accepting an AI suggestion. Correct iff any points were awarded.
    pub fn ai_graded(points: u32, comment: Option<String>, confidence: f64) -> Self {
        Self {
            is_correct: points > 0,
            points_awarded: points,
            grade_type: GradeType::Ai,
            requires_manual_review: false,
            feedback: comment,
            ai_confidence: Some(confidence),
        }
    }
}
