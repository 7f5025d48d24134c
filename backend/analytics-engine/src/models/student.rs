use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, FlashcardSession, TestAttempt};

/// A single student's metrics restricted to one content scope.
///
/// The data source has already scoped every row; the engine passes it through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentContextualPerformance {
    pub student_test_average: i64,
    pub student_flashcard_accuracy: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_attempts: Vec<TestAttempt>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flashcard_sessions: Vec<FlashcardSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Platform-wide payload as the data source delivers it: every field may be
/// missing or null. Null scalars read as 0; null collections stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComprehensiveAnalytics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_progress: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_average: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flashcard_accuracy: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_days: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sessions: i64,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default)]
    pub recent_activity: Option<Vec<RecentActivity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentComprehensiveAnalytics {
    pub overall_progress: i64,
    pub test_average: i64,
    pub flashcard_accuracy: i64,
    pub study_days: i64,
    pub total_sessions: i64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recent_activity: Vec<RecentActivity>,
}
