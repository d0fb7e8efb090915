//! The `scorecard review` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scorecard_core::parser::parse_attempt;
use scorecard_core::report::ReviewReport;

pub fn execute(attempt_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let attempt = parse_attempt(&attempt_path)?;
    let report = ReviewReport::build(&attempt);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        _ => {
            print_review_table(&report);
        }
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Review report saved: {}", path.display());
    }

    Ok(())
}

fn print_review_table(report: &ReviewReport) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Selected", "Result", "Points"]);

    for (idx, q) in report.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&q.text),
            Cell::new(q.selected_option_text.as_deref().unwrap_or("—")),
            Cell::new(if q.is_correct { "correct" } else { "incorrect" }),
            Cell::new(format!("{:.1} / {:.1}", q.earned_points, q.points)),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}: {:.1} / {:.1} points ({:.1}%), {} of {} correct — {}",
        report.title,
        report.score,
        report.total_points,
        report.summary.percentage,
        report.summary.correct_answers,
        report.summary.total_questions,
        if report.summary.is_passed {
            "PASSED"
        } else {
            "NOT PASSED"
        }
    );
}
