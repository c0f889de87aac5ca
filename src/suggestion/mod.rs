//! # Suggestion Providers Module
//!
//! This module provides advisory AI grade suggestion providers. Each provider implements the
//! [`GradeSuggestor`](crate::traits::suggestor::GradeSuggestor) trait and produces a
//! non-authoritative `(points, comment, confidence)` suggestion for an answer awaiting manual
//! review.
//!
//! A suggestion is surfaced to the human grader, who decides what to feed into the manual
//! grading path; the grading core never calls a provider directly.
//!
//! ## Available Providers
//!
//! - [`gemini`]: Uses Google's Gemini API to suggest a grade for a free-text answer.

pub mod gemini;
