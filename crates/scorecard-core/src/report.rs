//! Review report types with JSON persistence and markdown export.
//!
//! A [`ReviewReport`] is the owned, serializable record of one attempt
//! review: the summary header plus one row per question. The CLI writes
//! these for record-keeping and supervisors share the markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Attempt, AttemptStatus};
use crate::review::review_attempt;
use crate::statistics::{summarize_attempt, AttemptSummary};

/// A complete review of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The reviewed attempt.
    pub attempt_id: u64,
    /// Evaluation title.
    pub title: String,
    /// Attempt lifecycle state at review time.
    pub status: AttemptStatus,
    /// Achieved score in absolute points.
    pub score: f64,
    /// Total achievable points.
    pub total_points: f64,
    /// Headline statistics.
    pub summary: AttemptSummary,
    /// One row per question, in display order.
    pub questions: Vec<QuestionReviewRecord>,
}

/// One question's row in a review report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReviewRecord {
    pub question_id: u64,
    pub text: String,
    /// Maximum points for the question.
    pub points: f64,
    pub is_correct: bool,
    pub selected_option_id: Option<u64>,
    pub selected_option_text: Option<String>,
    pub earned_points: f64,
    pub explanation: Option<String>,
}

impl ReviewReport {
    /// Build a report from an attempt snapshot.
    pub fn build(attempt: &Attempt) -> Self {
        let summary = summarize_attempt(attempt);
        let reviews = review_attempt(attempt);

        let questions = attempt
            .sorted_questions()
            .into_iter()
            .zip(reviews)
            .map(|(question, review)| QuestionReviewRecord {
                question_id: question.id,
                text: question.text.clone(),
                points: question.points,
                is_correct: review.is_correct,
                selected_option_id: review.selected_option.as_ref().map(|o| o.id),
                selected_option_text: review.selected_option.map(|o| o.text),
                earned_points: review.earned_points,
                explanation: question.explanation.clone(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            attempt_id: attempt.id,
            title: attempt.title.clone(),
            status: attempt.status,
            score: attempt.score,
            total_points: attempt.total_points,
            summary,
            questions,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ReviewReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render the report as markdown for sharing.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Review: {}\n\n", self.title));
        md.push_str(&format!(
            "**{}** — {:.1} / {:.1} points ({:.1}%), passing score {:.1}\n\n",
            if self.summary.is_passed {
                "PASSED"
            } else {
                "NOT PASSED"
            },
            self.score,
            self.total_points,
            self.summary.percentage,
            self.summary.passing_score,
        ));
        md.push_str(&format!(
            "{} of {} questions answered correctly.\n\n",
            self.summary.correct_answers, self.summary.total_questions
        ));

        md.push_str("| # | Question | Selected | Result | Points |\n");
        md.push_str("|---|----------|----------|--------|--------|\n");
        for (idx, q) in self.questions.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.1} / {:.1} |\n",
                idx + 1,
                q.text,
                q.selected_option_text.as_deref().unwrap_or("—"),
                if q.is_correct { "correct" } else { "incorrect" },
                q.earned_points,
                q.points,
            ));
        }

        md
    }
}
