//! The `scorecard progress` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scorecard_core::parser::load_attempt_directory;
use scorecard_core::statistics::{compute_progress, summarize_attempt};

pub fn execute(dir: PathBuf) -> Result<()> {
    let mut attempts = load_attempt_directory(&dir)?;
    attempts.sort_by_key(|a| a.id);
    tracing::info!("loaded {} attempts from {}", attempts.len(), dir.display());

    if attempts.is_empty() {
        println!("No attempts found in {}", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Evaluation", "Status", "Score", "Result"]);

    for attempt in &attempts {
        let summary = summarize_attempt(attempt);
        table.add_row(vec![
            Cell::new(attempt.id),
            Cell::new(&attempt.title),
            Cell::new(attempt.status),
            Cell::new(format!("{:.1}%", summary.percentage)),
            Cell::new(if summary.is_passed { "passed" } else { "failed" }),
        ]);
    }

    println!("{table}");

    let stats = compute_progress(&attempts);
    println!(
        "\n{} attempts, {} passed ({:.0}% pass rate)",
        stats.total_attempts,
        stats.passed_attempts,
        stats.pass_rate * 100.0
    );
    println!(
        "Average {:.1}%, best {:.1}%, {} correct answers overall",
        stats.average_percentage, stats.best_percentage, stats.total_correct_answers
    );

    Ok(())
}
