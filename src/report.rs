//! # Grade Report Module
//!
//! This module defines the request/response records exchanged with the grading core and the
//! response envelope transport adapters serialize back to clients.
//!
//! ## Overview
//!
//! The main types are:
//! - [`GradeAttemptRequest`] / [`GradeAttemptResponse`]: the batch unit of work for grading
//!   every answer of an attempt.
//! - [`ManualGradeRequest`] / [`ManualGradeResponse`]: a single-question manual override plus
//!   the context needed to recompute the attempt's aggregate score.
//! - [`GradeReportResponse`]: a response envelope wrapping a [`GradeAttemptResponse`] with
//!   `success` and `message` fields for API responses.
//!
//! These are transient records with no persistence in the core; they are constructed per call
//! and discarded. Field names serialize in camelCase, which is the logical wire contract any
//! transport (HTTP handler or queue consumer) must preserve.

use crate::types::{AnswerPayload, GradingResult, QuestionData};
use serde::{Deserialize, Serialize};

/// One student answer paired with the id of the question it targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: String,
    pub answer: AnswerPayload,
}

/// The batch unit of work: every answer of an attempt plus the attempt's full question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeAttemptRequest {
    pub attempt_id: String,
    pub answers: Vec<AnswerSubmission>,
    pub questions: Vec<QuestionData>,
}

/// One grading outcome keyed by its question id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub question_id: String,
    pub result: GradingResult,
}

/// The outcome of grading an attempt: per-question results plus the aggregate score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeAttemptResponse {
    pub attempt_id: String,
    /// Answered questions first in request order, then synthesized incorrect entries for
    /// unanswered questions in question order.
    pub results: Vec<GradedAnswer>,
    pub total_points: u32,
    pub earned_points: u32,
    /// Integer percentage, 0-100.
    pub score: u32,
    /// RFC3339 timestamp of when the attempt was graded.
    pub graded_at: String,
}

/// A previously graded answer, carried into manual reconciliation so the aggregate can be
/// recomputed without re-running automatic grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorAnswer {
    pub question_id: String,
    pub points_awarded: u32,
}

/// A single-question manual override plus the full answer/question context of the attempt.
///
/// `points` is signed so an out-of-range reviewer input (including a negative one) reaches
/// validation instead of being rejected at deserialization with an opaque error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualGradeRequest {
    pub attempt_id: String,
    pub question_id: String,
    pub points: i64,
    pub max_points: u32,
    #[serde(default)]
    pub comment: Option<String>,
    pub all_answers: Vec<PriorAnswer>,
    pub all_questions: Vec<QuestionData>,
}

/// The outcome of applying one manual grade: the accepted value plus the recomputed aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualGradeResponse {
    pub attempt_id: String,
    pub question_id: String,
    pub points_awarded: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub total_earned_points: u32,
    pub total_max_points: u32,
    /// Integer percentage, 0-100.
    pub score_percentage: u32,
}

/// The API response envelope for grading results.
///
/// This struct wraps a [`GradeAttemptResponse`] and adds top-level `success` and `message`
/// fields for consistency with other API responses.
#[derive(Debug, Serialize)]
pub struct GradeReportResponse {
    /// Indicates the grading was successful.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed grading report.
    data: GradeAttemptResponse,
}

/// Enables ergonomic conversion from [`GradeAttemptResponse`] to [`GradeReportResponse`].
impl From<GradeAttemptResponse> for GradeReportResponse {
    fn from(report: GradeAttemptResponse) -> Self {
        GradeReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}
