use std::collections::HashMap;

use crate::{
    models::{
        analytics::{StudentBreakdown, TestBreakdown},
        FlashcardSession, StudentRef, TestAttempt, TestRef,
    },
    utils::rollup::{average, ratio_percent},
};

#[derive(Debug, Default, Clone, Copy)]
struct FlashcardTotals {
    correct: i64,
    answered: i64,
}

fn scores_by<'a, F>(attempts: &'a [TestAttempt], key: F) -> HashMap<&'a str, Vec<i64>>
where
    F: Fn(&'a TestAttempt) -> &'a str,
{
    let mut grouped: HashMap<&str, Vec<i64>> = HashMap::new();
    for attempt in attempts {
        grouped.entry(key(attempt)).or_default().push(attempt.score);
    }
    grouped
}

fn flashcard_totals_by_student(sessions: &[FlashcardSession]) -> HashMap<&str, FlashcardTotals> {
    let mut totals: HashMap<&str, FlashcardTotals> = HashMap::new();
    for session in sessions {
        let entry = totals.entry(session.student_id.as_str()).or_default();
        entry.correct += session.correct_answers;
        entry.answered += session.answered();
    }
    totals
}

/// One breakdown per roster member, in roster order. Members without attempts
/// or sessions get zeroes.
pub fn student_breakdowns(
    roster: &[StudentRef],
    attempts: &[TestAttempt],
    sessions: &[FlashcardSession],
) -> Vec<StudentBreakdown> {
    let scores = scores_by(attempts, |attempt| attempt.student_id.as_str());
    let flashcards = flashcard_totals_by_student(sessions);

    roster
        .iter()
        .map(|student| {
            let test_average = scores
                .get(student.id.as_str())
                .map(|values| average(values.iter().copied()))
                .unwrap_or(0);
            let flashcard_accuracy = flashcards
                .get(student.id.as_str())
                .map(|totals| ratio_percent(totals.correct, totals.answered))
                .unwrap_or(0);

            StudentBreakdown {
                id: student.id.clone(),
                name: student.name.clone(),
                test_average,
                flashcard_accuracy,
            }
        })
        .collect()
}

/// One breakdown per test, in input order. Tests nobody attempted average 0.
pub fn test_breakdowns(tests: &[TestRef], attempts: &[TestAttempt]) -> Vec<TestBreakdown> {
    let scores = scores_by(attempts, |attempt| attempt.test_id.as_str());

    tests
        .iter()
        .map(|test| TestBreakdown {
            id: test.id.clone(),
            name: test.name.clone(),
            average: scores
                .get(test.id.as_str())
                .map(|values| average(values.iter().copied()))
                .unwrap_or(0),
        })
        .collect()
}
