//! The `scorecard validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(attempt_path: PathBuf) -> Result<()> {
    let attempts = if attempt_path.is_dir() {
        scorecard_core::parser::load_attempt_directory(&attempt_path)?
    } else {
        vec![scorecard_core::parser::parse_attempt(&attempt_path)?]
    };

    let mut total_warnings = 0;

    for attempt in &attempts {
        println!(
            "Attempt {}: {} ({} questions)",
            attempt.id,
            attempt.title,
            attempt.questions.len()
        );

        let warnings = scorecard_core::parser::validate_attempt(attempt);
        for w in &warnings {
            let prefix = w
                .question_id
                .map(|id| format!("  [question {id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All attempts valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
