use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scorecard_core::model::{Answer, AnswerOption, Attempt, AttemptStatus, Question};
use scorecard_core::review::{evaluate_question, review_attempt};
use scorecard_core::statistics::summarize_attempt;

fn make_attempt(question_count: u64) -> Attempt {
    let questions: Vec<Question> = (1..=question_count)
        .map(|id| Question {
            id,
            text: format!("question {id}"),
            points: 5.0,
            position: id as i64,
            explanation: None,
            options: (0..4)
                .map(|i| AnswerOption {
                    id: id * 10 + i,
                    text: format!("option {i}"),
                    is_correct: i == 0,
                    position: i as i64,
                })
                .collect(),
        })
        .collect();

    // Every other question answered, half of those correct.
    let answers: Vec<Answer> = (1..=question_count)
        .filter(|id| id % 2 == 0)
        .map(|id| Answer {
            question_id: id,
            option_id: Some(id * 10),
            is_correct: id % 4 == 0,
            points_earned: if id % 4 == 0 { 5.0 } else { 0.0 },
        })
        .collect();

    let total_points = questions.iter().map(|q| q.points).sum();
    Attempt {
        id: 1,
        title: "bench".into(),
        status: AttemptStatus::Graded,
        questions,
        answers,
        total_points,
        score: 60.0,
        percentage: 25.0,
        passing_score: 100.0,
        started_at: None,
        finished_at: None,
    }
}

fn bench_scoring(c: &mut Criterion) {
    let attempt = make_attempt(50);

    c.bench_function("summarize_attempt_50q", |b| {
        b.iter(|| summarize_attempt(black_box(&attempt)))
    });

    c.bench_function("review_attempt_50q", |b| {
        b.iter(|| review_attempt(black_box(&attempt)))
    });

    let last = attempt.questions.last().unwrap().clone();
    c.bench_function("evaluate_question_worst_case", |b| {
        b.iter(|| evaluate_question(black_box(&last), black_box(&attempt.answers)))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
