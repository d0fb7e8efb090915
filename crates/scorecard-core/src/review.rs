//! Per-question review: answer matching and result evaluation.
//!
//! The review screen walks an attempt's questions and, for each one, needs
//! to know whether it was answered, which option was picked, and what it
//! earned. All of that is derived here from the graded snapshot; nothing
//! is recomputed — correctness and points come verbatim from the grading
//! authority's answer records.

use serde::{Deserialize, Serialize};

use crate::model::{Answer, AnswerOption, Question};

/// The review outcome for a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReview {
    /// Whether the submitted answer was graded correct. Unanswered
    /// questions are always incorrect.
    pub is_correct: bool,
    /// The option the test-taker selected, if any. Absent for unanswered
    /// questions and for answers without an option reference (free text).
    pub selected_option: Option<AnswerOption>,
    /// Points earned on this question; zero when unanswered.
    pub earned_points: f64,
}

/// Find the answer submitted for `question`, if one exists.
///
/// Scans in input order and returns the first answer addressing the
/// question. Absence is the normal case for an unanswered question, not a
/// failure. An attempt is expected to hold at most one answer per
/// question; if upstream data violates that, the first one wins (and
/// [`validate_attempt`] flags the duplicate).
///
/// [`validate_attempt`]: crate::parser::validate_attempt
pub fn find_answer_for_question<'a>(
    question: &Question,
    answers: &'a [Answer],
) -> Option<&'a Answer> {
    answers.iter().find(|a| a.question_id == question.id)
}

/// Evaluate one question against the attempt's answer set.
///
/// Total function: every input yields a review. Unanswered questions are
/// scored as incorrect with zero points regardless of their point value.
/// For answered questions the correctness flag and earned points are taken
/// verbatim from the answer — they are never validated against the
/// question's maximum; the grading authority is trusted.
pub fn evaluate_question(question: &Question, answers: &[Answer]) -> QuestionReview {
    let Some(answer) = find_answer_for_question(question, answers) else {
        return QuestionReview {
            is_correct: false,
            selected_option: None,
            earned_points: 0.0,
        };
    };

    let selected_option = answer
        .option_id
        .and_then(|id| question.options.iter().find(|o| o.id == id))
        .cloned();

    QuestionReview {
        is_correct: answer.is_correct,
        selected_option,
        earned_points: answer.points_earned,
    }
}

/// Evaluate every question of an attempt, in display order.
///
/// One entry per question, answered or not — the row list a review screen
/// renders top to bottom.
pub fn review_attempt(attempt: &crate::model::Attempt) -> Vec<QuestionReview> {
    attempt
        .sorted_questions()
        .into_iter()
        .map(|q| evaluate_question(q, &attempt.answers))
        .collect()
}
