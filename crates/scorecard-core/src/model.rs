//! Core data model types for scorecard.
//!
//! These are the immutable snapshot types the whole system operates on:
//! one graded (or in-progress) attempt, its questions, their options, and
//! the answers the test-taker submitted. The core never mutates or
//! persists them; they are constructed once at the input boundary and
//! read by the scoring and review functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selectable choice for a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Unique identifier within the enclosing question.
    pub id: u64,
    /// Display text.
    pub text: String,
    /// Whether this option is the correct one.
    #[serde(default)]
    pub is_correct: bool,
    /// Display order; lower positions render first.
    #[serde(default)]
    pub position: i64,
}

/// One gradable item within an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the enclosing evaluation.
    pub id: u64,
    /// Question text.
    pub text: String,
    /// Maximum points awardable for this question.
    pub points: f64,
    /// Display order among the evaluation's questions.
    #[serde(default)]
    pub position: i64,
    /// Explanation shown during review, if the author provided one.
    #[serde(default)]
    pub explanation: Option<String>,
    /// The question's answer choices.
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Options in ascending display order.
    ///
    /// The sort is stable: options sharing a position keep their original
    /// relative order.
    pub fn sorted_options(&self) -> Vec<&AnswerOption> {
        let mut options: Vec<&AnswerOption> = self.options.iter().collect();
        options.sort_by_key(|o| o.position);
        options
    }
}

/// The test-taker's recorded response to one question within one attempt.
///
/// Correctness and earned points are computed by the grading authority
/// upstream; this core reads them verbatim and never re-derives them from
/// option data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question this answer addresses.
    pub question_id: u64,
    /// The selected option, absent for unanswered or free-text responses.
    #[serde(default)]
    pub option_id: Option<u64>,
    /// Graded correctness, as decided upstream.
    #[serde(default)]
    pub is_correct: bool,
    /// Points awarded, as decided upstream.
    #[serde(default)]
    pub points_earned: f64,
}

/// Lifecycle state of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Completed,
    Graded,
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptStatus::InProgress => write!(f, "in_progress"),
            AttemptStatus::Completed => write!(f, "completed"),
            AttemptStatus::Graded => write!(f, "graded"),
        }
    }
}

impl FromStr for AttemptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_progress" | "in-progress" => Ok(AttemptStatus::InProgress),
            "completed" => Ok(AttemptStatus::Completed),
            "graded" => Ok(AttemptStatus::Graded),
            other => Err(format!("unknown attempt status: {other}")),
        }
    }
}

/// One test-taker's submission instance of an evaluation.
///
/// Carries the evaluation's full question set (answered or not), the
/// submitted answers, and the grading authority's totals. The declared
/// `passing_score` is an absolute point threshold, not a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// Unique attempt identifier.
    pub id: u64,
    /// Evaluation title, for display.
    pub title: String,
    /// Lifecycle state.
    pub status: AttemptStatus,
    /// The evaluation's full question set, not just answered ones.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Submitted answers; unanswered questions simply have no entry.
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Total achievable points across all questions.
    pub total_points: f64,
    /// Achieved score in absolute points.
    pub score: f64,
    /// Server-computed percentage score; not recomputed from points.
    pub percentage: f64,
    /// Minimum absolute point score required to pass.
    pub passing_score: f64,
    /// When the attempt was started.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the attempt was submitted.
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Attempt {
    /// Questions in ascending display order (stable on ties).
    pub fn sorted_questions(&self) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self.questions.iter().collect();
        questions.sort_by_key(|q| q.position);
        questions
    }
}
