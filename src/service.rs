//! # Grading Service
//!
//! This module provides [`GradingService`], the dispatch layer between a question and the
//! grading strategy registered for its type, plus the validated construction of manual grades.
//!
//! The registry is an explicit, immutable mapping built once in [`GradingService::new`] and
//! shared by reference for the lifetime of the service. True/false questions are wired to the
//! single-choice strategy, since a two-option single choice is structurally identical to
//! true/false.

use crate::error::GradingError;
use crate::graders::long_text::LongTextGrader;
use crate::graders::multi_choice::MultiChoiceGrader;
use crate::graders::short_text::ShortTextGrader;
use crate::graders::single_choice::SingleChoiceGrader;
use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerPayload, GradingResult, QuestionData, QuestionType};
use std::collections::HashMap;

/// Dispatches answers to the grader registered for each question type and constructs
/// validated manual grades.
pub struct GradingService {
    graders: HashMap<QuestionType, Box<dyn QuestionGrader>>,
}

impl GradingService {
    /// Builds the service with every question type wired to its grading strategy.
    ///
    /// All five enum values are registered, so `grade_answer` can only fail if a future
    /// question type is added without a corresponding entry here.
    pub fn new() -> Self {
        let mut graders: HashMap<QuestionType, Box<dyn QuestionGrader>> = HashMap::new();
        graders.insert(QuestionType::SingleChoice, Box::new(SingleChoiceGrader));
        graders.insert(QuestionType::TrueFalse, Box::new(SingleChoiceGrader));
        graders.insert(QuestionType::MultiChoice, Box::new(MultiChoiceGrader));
        graders.insert(QuestionType::ShortText, Box::new(ShortTextGrader));
        graders.insert(QuestionType::LongText, Box::new(LongTextGrader));
        Self { graders }
    }

    /// Grades a single answer with the strategy registered for the question's type.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::UnsupportedQuestionType`] if the question's type has no
    /// registered grader. This is a configuration error and fails the whole grading call.
    pub fn grade_answer(
        &self,
        answer: &AnswerPayload,
        question: &QuestionData,
    ) -> Result<GradingResult, GradingError> {
        let grader = self.graders.get(&question.question_type).ok_or_else(|| {
            GradingError::UnsupportedQuestionType(format!(
                "no grader registered for question type {:?}",
                question.question_type
            ))
        })?;
        Ok(grader.grade(answer, question))
    }

    /// Constructs a manual grade after validating the point range.
    ///
    /// `points` arrives as a signed value so a negative reviewer input is representable
    /// and rejected rather than silently wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::InvalidManualGrade`] if `points` falls outside
    /// `[0, max_points]`.
    pub fn grade_manually(
        &self,
        points: i64,
        max_points: u32,
        comment: Option<String>,
    ) -> Result<GradingResult, GradingError> {
        if points < 0 || points > max_points as i64 {
            return Err(GradingError::InvalidManualGrade(format!(
                "points must be between 0 and {max_points}, got {points}"
            )));
        }
        Ok(GradingResult::manual(points as u32, comment))
    }
}

impl Default for GradingService {
    fn default() -> Self {
        Self::new()
    }
}
