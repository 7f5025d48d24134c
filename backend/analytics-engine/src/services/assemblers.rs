//! Pure pipelines from raw rows to dashboard-ready statistics. None of these
//! call one another.

use crate::{
    models::{
        analytics::ContentAnalytics,
        student::{RawComprehensiveAnalytics, StudentComprehensiveAnalytics},
        ContentBundle,
    },
    services::breakdown::{student_breakdowns, test_breakdowns},
    utils::rollup::{average, ratio_percent},
};

/// Rolls one content scope's bundle into counts, pooled averages and rankings.
///
/// `average_score` and `average_flashcard_accuracy` pool every raw row before
/// dividing once; they are not averages of the per-student figures.
pub fn assemble_content_analytics(bundle: ContentBundle) -> ContentAnalytics {
    let ContentBundle {
        students,
        tests,
        test_attempts,
        sessions,
        activity_log,
    } = bundle;

    let average_score = average(test_attempts.iter().map(|attempt| attempt.score));
    let (correct, answered) = sessions.iter().fold((0i64, 0i64), |(correct, answered), s| {
        (correct + s.correct_answers, answered + s.answered())
    });

    let mut student_rows = student_breakdowns(&students, &test_attempts, &sessions);
    let mut test_rows = test_breakdowns(&tests, &test_attempts);

    // sort_by is stable: ties keep the data source's row order
    student_rows.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));
    test_rows.sort_by(|a, b| b.average.cmp(&a.average));

    ContentAnalytics {
        student_count: students.len(),
        test_count: tests.len(),
        average_score,
        flashcard_session_count: sessions.len(),
        average_flashcard_accuracy: ratio_percent(correct, answered),
        students: student_rows,
        tests: test_rows,
        flashcard_sessions: sessions,
        activity_log,
    }
}

pub fn assemble_comprehensive_analytics(
    raw: RawComprehensiveAnalytics,
) -> StudentComprehensiveAnalytics {
    StudentComprehensiveAnalytics {
        overall_progress: raw.overall_progress,
        test_average: raw.test_average,
        flashcard_accuracy: raw.flashcard_accuracy,
        study_days: raw.study_days,
        total_sessions: raw.total_sessions,
        strengths: raw.strengths.unwrap_or_default(),
        weaknesses: raw.weaknesses.unwrap_or_default(),
        recent_activity: raw.recent_activity.unwrap_or_default(),
    }
}
