//! The `scorecard summarize` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecard_core::parser::parse_attempt;
use scorecard_core::statistics::summarize_attempt;

pub fn execute(attempt_path: PathBuf) -> Result<()> {
    let attempt = parse_attempt(&attempt_path)?;
    let summary = summarize_attempt(&attempt);

    println!("{} (attempt {})", attempt.title, attempt.id);
    println!("Status: {}", attempt.status);
    println!(
        "Score: {:.1} / {:.1} points ({:.1}%)",
        attempt.score, attempt.total_points, summary.percentage
    );
    println!(
        "Correct answers: {} of {} questions",
        summary.correct_answers, summary.total_questions
    );
    println!(
        "Result: {} (passing score {:.1})",
        if summary.is_passed { "PASSED" } else { "NOT PASSED" },
        summary.passing_score
    );

    Ok(())
}
