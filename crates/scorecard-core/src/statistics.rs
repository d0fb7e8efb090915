//! Attempt summary statistics and supervisor progress aggregation.
//!
//! The scoring authority is the server; everything here reshapes already
//! authoritative fields into the tuples the review and progress screens
//! need, keeping the arithmetic in one reviewable place.

use serde::{Deserialize, Serialize};

use crate::model::Attempt;

/// Headline statistics for one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSummary {
    /// Server-computed percentage score, passed through.
    pub percentage: f64,
    /// Count of the evaluation's questions, answered or not.
    pub total_questions: usize,
    /// Count of submitted answers graded correct.
    pub correct_answers: usize,
    /// Absolute point threshold required to pass.
    pub passing_score: f64,
    /// Whether the achieved score meets the threshold.
    pub is_passed: bool,
}

/// Summarize one attempt for the results header.
///
/// `correct_answers` is a direct tally over the submitted answers, not a
/// re-evaluation per question: an attempt with duplicate answers for one
/// question, or answers referencing questions outside the set, counts
/// each such answer. Those inputs violate upstream invariants and are
/// surfaced by [`validate_attempt`] rather than reconciled here.
///
/// Pass/fail compares absolute points: an attempt scoring exactly the
/// passing threshold passes.
///
/// [`validate_attempt`]: crate::parser::validate_attempt
pub fn summarize_attempt(attempt: &Attempt) -> AttemptSummary {
    let correct_answers = attempt.answers.iter().filter(|a| a.is_correct).count();

    AttemptSummary {
        percentage: attempt.percentage,
        total_questions: attempt.questions.len(),
        correct_answers,
        passing_score: attempt.passing_score,
        is_passed: attempt.score >= attempt.passing_score,
    }
}

/// Aggregate statistics over a set of attempts, for the supervisor
/// progress view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Number of attempts considered.
    pub total_attempts: usize,
    /// Attempts whose score met their passing threshold.
    pub passed_attempts: usize,
    /// `passed_attempts / total_attempts`, 0.0 when there are no attempts.
    pub pass_rate: f64,
    /// Mean of the attempts' percentage scores.
    pub average_percentage: f64,
    /// Highest percentage score seen.
    pub best_percentage: f64,
    /// Correct answers tallied across all attempts.
    pub total_correct_answers: usize,
}

/// Aggregate a student's attempts into progress statistics.
///
/// Empty input yields all-zero stats rather than an error; a student with
/// no attempts is a normal state for the progress screen.
pub fn compute_progress(attempts: &[Attempt]) -> ProgressStats {
    if attempts.is_empty() {
        return ProgressStats {
            total_attempts: 0,
            passed_attempts: 0,
            pass_rate: 0.0,
            average_percentage: 0.0,
            best_percentage: 0.0,
            total_correct_answers: 0,
        };
    }

    let summaries: Vec<AttemptSummary> = attempts.iter().map(summarize_attempt).collect();

    let passed_attempts = summaries.iter().filter(|s| s.is_passed).count();
    let total_correct_answers = summaries.iter().map(|s| s.correct_answers).sum();
    let average_percentage =
        summaries.iter().map(|s| s.percentage).sum::<f64>() / summaries.len() as f64;
    let best_percentage = summaries
        .iter()
        .map(|s| s.percentage)
        .fold(f64::NEG_INFINITY, f64::max);

    ProgressStats {
        total_attempts: attempts.len(),
        passed_attempts,
        pass_rate: passed_attempts as f64 / attempts.len() as f64,
        average_percentage,
        best_percentage,
        total_correct_answers,
    }
}
