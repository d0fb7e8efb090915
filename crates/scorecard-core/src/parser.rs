//! JSON attempt snapshot parser.
//!
//! Loads attempt snapshots from JSON files and directories, and validates
//! them. This is the boundary where loose upstream shapes (the REST API
//! serializes the percentage as a number or a numeric string, depending on
//! endpoint) become the strict [`Attempt`] model — a malformed value is a
//! reported error here, never a silent default.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::AttemptDataError;
use crate::model::{Answer, Attempt, AttemptStatus, Question};

/// Intermediate JSON structure tolerating the upstream API's loose shapes.
#[derive(Debug, Deserialize)]
struct RawAttempt {
    id: u64,
    title: String,
    status: String,
    #[serde(default)]
    questions: Vec<Question>,
    #[serde(default)]
    answers: Vec<Answer>,
    total_points: f64,
    score: f64,
    percentage: RawNumber,
    passing_score: f64,
    #[serde(default)]
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A numeric field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn to_f64(&self) -> Result<f64, AttemptDataError> {
        match self {
            RawNumber::Number(n) => Ok(*n),
            RawNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AttemptDataError::NonNumericPercentage(s.clone())),
        }
    }
}

impl RawAttempt {
    fn into_attempt(self) -> Result<Attempt, AttemptDataError> {
        let status: AttemptStatus = self
            .status
            .parse()
            .map_err(AttemptDataError::UnknownStatus)?;

        let percentage = self.percentage.to_f64()?;

        for question in &self.questions {
            if question.points < 0.0 {
                return Err(AttemptDataError::NegativePoints {
                    field: "points",
                    value: question.points,
                    entity: format!("question {}", question.id),
                });
            }
        }
        for answer in &self.answers {
            if answer.points_earned < 0.0 {
                return Err(AttemptDataError::NegativePoints {
                    field: "points_earned",
                    value: answer.points_earned,
                    entity: format!("answer to question {}", answer.question_id),
                });
            }
        }

        Ok(Attempt {
            id: self.id,
            title: self.title,
            status,
            questions: self.questions,
            answers: self.answers,
            total_points: self.total_points,
            score: self.score,
            percentage,
            passing_score: self.passing_score,
            started_at: self.started_at,
            finished_at: self.finished_at,
        })
    }
}

/// Parse a single JSON file into an [`Attempt`].
pub fn parse_attempt(path: &Path) -> Result<Attempt> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read attempt file: {}", path.display()))?;

    parse_attempt_str(&content, path)
}

/// Parse a JSON string into an [`Attempt`] (useful for testing).
pub fn parse_attempt_str(content: &str, source_path: &Path) -> Result<Attempt> {
    let raw: RawAttempt = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    raw.into_attempt()
        .with_context(|| format!("malformed attempt data: {}", source_path.display()))
}

/// Recursively load all `.json` attempt files from a directory.
///
/// Files that fail to parse are skipped with a warning; one bad export
/// should not hide a student's remaining attempts.
pub fn load_attempt_directory(dir: &Path) -> Result<Vec<Attempt>> {
    let mut attempts = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            attempts.extend(load_attempt_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match parse_attempt(&path) {
                Ok(attempt) => attempts.push(attempt),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(attempts)
}

/// A warning from attempt validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID involved (if applicable).
    pub question_id: Option<u64>,
    /// Warning message.
    pub message: String,
}

/// Validate an attempt for upstream-data violations the core tolerates.
///
/// These are the invariants the scoring functions assume but do not
/// enforce: at most one answer per question, answers referencing real
/// questions and options, earned points within the question maximum, and
/// a total that matches the question sum. Violations degrade the review
/// (first answer wins, dangling references show no selection) rather than
/// fail it, so they surface as warnings.
pub fn validate_attempt(attempt: &Attempt) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate answers for one question
    let mut seen = std::collections::HashSet::new();
    for answer in &attempt.answers {
        if !seen.insert(answer.question_id) {
            warnings.push(ValidationWarning {
                question_id: Some(answer.question_id),
                message: format!(
                    "more than one answer for question {}; the first wins",
                    answer.question_id
                ),
            });
        }
    }

    // Answers referencing unknown questions or options
    for answer in &attempt.answers {
        let Some(question) = attempt.questions.iter().find(|q| q.id == answer.question_id) else {
            warnings.push(ValidationWarning {
                question_id: Some(answer.question_id),
                message: format!(
                    "answer references question {} which is not in the attempt",
                    answer.question_id
                ),
            });
            continue;
        };

        if let Some(option_id) = answer.option_id {
            if !question.options.iter().any(|o| o.id == option_id) {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id),
                    message: format!(
                        "answer references option {option_id} which question {} does not have",
                        question.id
                    ),
                });
            }
        }

        if answer.points_earned > question.points {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: format!(
                    "earned points {} exceed question maximum {}",
                    answer.points_earned, question.points
                ),
            });
        }
    }

    // Declared total vs question sum
    let question_sum: f64 = attempt.questions.iter().map(|q| q.points).sum();
    if (question_sum - attempt.total_points).abs() > 1e-9 {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "declared total points {} disagree with question sum {question_sum}",
                attempt.total_points
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"{
        "id": 301,
        "title": "Forklift Safety Certification",
        "status": "graded",
        "questions": [
            {
                "id": 1,
                "text": "Maximum safe load?",
                "points": 5.0,
                "position": 1,
                "options": [
                    { "id": 10, "text": "1 ton", "is_correct": true, "position": 1 },
                    { "id": 11, "text": "5 tons", "is_correct": false, "position": 2 }
                ]
            },
            {
                "id": 2,
                "text": "Describe the pre-shift inspection.",
                "points": 5.0,
                "position": 2
            }
        ],
        "answers": [
            { "question_id": 1, "option_id": 10, "is_correct": true, "points_earned": 5.0 }
        ],
        "total_points": 10.0,
        "score": 5.0,
        "percentage": "50.0",
        "passing_score": 5.0,
        "finished_at": "2024-03-18T14:05:00Z"
    }"#;

    #[test]
    fn parse_valid_attempt() {
        let attempt = parse_attempt_str(VALID_JSON, &PathBuf::from("attempt.json")).unwrap();
        assert_eq!(attempt.id, 301);
        assert_eq!(attempt.status, AttemptStatus::Graded);
        assert_eq!(attempt.questions.len(), 2);
        assert_eq!(attempt.answers.len(), 1);
        // String percentage parses to a number.
        assert_eq!(attempt.percentage, 50.0);
        assert!(attempt.finished_at.is_some());
    }

    #[test]
    fn percentage_accepts_json_number() {
        let json = VALID_JSON.replace("\"50.0\"", "50.0");
        let attempt = parse_attempt_str(&json, &PathBuf::from("attempt.json")).unwrap();
        assert_eq!(attempt.percentage, 50.0);
    }

    #[test]
    fn non_numeric_percentage_is_an_error_not_a_default() {
        let json = VALID_JSON.replace("\"50.0\"", "\"fifty\"");
        let err = parse_attempt_str(&json, &PathBuf::from("attempt.json")).unwrap_err();
        assert!(format!("{err:#}").contains("fifty"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = VALID_JSON.replace("\"graded\"", "\"abandoned\"");
        assert!(parse_attempt_str(&json, &PathBuf::from("attempt.json")).is_err());
    }

    #[test]
    fn negative_earned_points_are_rejected() {
        let json = VALID_JSON.replace("\"points_earned\": 5.0", "\"points_earned\": -1.0");
        let err = parse_attempt_str(&json, &PathBuf::from("attempt.json")).unwrap_err();
        assert!(format!("{err:#}").contains("points_earned"));
    }

    #[test]
    fn parse_malformed_json() {
        let bad = "this is not {valid json ][";
        assert!(parse_attempt_str(bad, &PathBuf::from("bad.json")).is_err());
    }

    #[test]
    fn validate_clean_attempt_has_no_warnings() {
        let attempt = parse_attempt_str(VALID_JSON, &PathBuf::from("attempt.json")).unwrap();
        assert!(validate_attempt(&attempt).is_empty());
    }

    #[test]
    fn validate_duplicate_answers() {
        let mut attempt = parse_attempt_str(VALID_JSON, &PathBuf::from("attempt.json")).unwrap();
        let dup = attempt.answers[0].clone();
        attempt.answers.push(dup);
        let warnings = validate_attempt(&attempt);
        assert!(warnings.iter().any(|w| w.message.contains("more than one answer")));
    }

    #[test]
    fn validate_dangling_question_reference() {
        let mut attempt = parse_attempt_str(VALID_JSON, &PathBuf::from("attempt.json")).unwrap();
        attempt.answers[0].question_id = 99;
        let warnings = validate_attempt(&attempt);
        assert!(warnings.iter().any(|w| w.message.contains("not in the attempt")));
    }

    #[test]
    fn validate_overdrawn_points_and_total_mismatch() {
        let mut attempt = parse_attempt_str(VALID_JSON, &PathBuf::from("attempt.json")).unwrap();
        attempt.answers[0].points_earned = 12.0;
        attempt.total_points = 42.0;
        let warnings = validate_attempt(&attempt);
        assert!(warnings.iter().any(|w| w.message.contains("exceed question maximum")));
        assert!(warnings.iter().any(|w| w.message.contains("question sum")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("attempt.json"), VALID_JSON).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an attempt").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let attempts = load_attempt_directory(dir.path()).unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].id, 301);
    }
}
