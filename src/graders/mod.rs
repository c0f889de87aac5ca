//! # Graders
//!
//! This module provides the grading strategies for each supported question type.
//! Each grader implements a specific policy for deciding whether a student's answer
//! is correct and how many points it earns.
//!
//! All graders in this module adhere to the `QuestionGrader` trait, which defines a
//! common interface for grading operations. This allows for flexible and interchangeable
//! grading strategies within the grading system.
//!
//! The available graders are:
//! - [`single_choice`]: Membership check of the selected option id (also serves true/false).
//! - [`multi_choice`]: Exact set equality of the selected option ids.
//! - [`short_text`]: Trimmed, case-insensitive match against any acceptable phrasing.
//! - [`long_text`]: Always defers to manual review.

pub mod long_text;
pub mod multi_choice;
pub mod short_text;
pub mod single_choice;
