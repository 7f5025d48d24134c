#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use learning_analytics::{
    models::{
        student::RawComprehensiveAnalytics, ActivityLogEntry, ContentBundle, FlashcardSession,
        FlashcardSessionStatus, StudentRef, TestAttempt, TestRef,
    },
    AnalyticsError, AnalyticsResult, AnalyticsSource, ContentScope, StudentContextualPerformance,
};

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// In-memory data source. `fail` makes every fetch return a transport error.
#[derive(Default)]
pub struct FakeSource {
    pub bundle: Option<ContentBundle>,
    pub contextual: Option<StudentContextualPerformance>,
    pub comprehensive: Option<RawComprehensiveAnalytics>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_bundle(bundle: ContentBundle) -> Self {
        Self {
            bundle: Some(bundle),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond<T: Clone>(&self, value: &Option<T>) -> AnalyticsResult<Option<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AnalyticsError::Transport("data source unreachable".into()));
        }
        Ok(value.clone())
    }
}

#[async_trait]
impl AnalyticsSource for FakeSource {
    async fn fetch_content_analytics_bundle(
        &self,
        _scope: &ContentScope,
    ) -> AnalyticsResult<Option<ContentBundle>> {
        self.respond(&self.bundle)
    }

    async fn fetch_student_contextual_performance(
        &self,
        _student_id: &str,
        _scope: &ContentScope,
    ) -> AnalyticsResult<Option<StudentContextualPerformance>> {
        self.respond(&self.contextual)
    }

    async fn fetch_student_comprehensive_analytics(
        &self,
        _student_id: &str,
    ) -> AnalyticsResult<Option<RawComprehensiveAnalytics>> {
        self.respond(&self.comprehensive)
    }
}

pub fn student(id: &str) -> StudentRef {
    StudentRef {
        id: id.to_string(),
        name: format!("Student {}", id),
    }
}

pub fn test_ref(id: &str) -> TestRef {
    TestRef {
        id: id.to_string(),
        name: format!("Test {}", id),
    }
}

pub fn attempt(student_id: &str, test_id: &str, score: i64) -> TestAttempt {
    TestAttempt {
        student_id: student_id.to_string(),
        test_id: test_id.to_string(),
        score,
    }
}

pub fn session(student_id: &str, correct: i64, incorrect: i64) -> FlashcardSession {
    let created_at = Utc.with_ymd_and_hms(2026, 2, 10, 14, 0, 0).unwrap();
    FlashcardSession {
        student_id: student_id.to_string(),
        correct_answers: correct,
        incorrect_answers: incorrect,
        status: FlashcardSessionStatus::Completed,
        created_at,
        completed_at: Some(created_at + chrono::Duration::minutes(12)),
    }
}

pub fn activity(id: &str, student_id: Option<&str>, description: &str) -> ActivityLogEntry {
    ActivityLogEntry {
        id: id.to_string(),
        student_id: student_id.map(str::to_string),
        description: description.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 2, 11, 9, 30, 0).unwrap(),
    }
}
