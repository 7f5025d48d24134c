use serde::{Deserialize, Serialize};

use super::{ActivityLogEntry, FlashcardSession};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBreakdown {
    pub id: String,
    pub name: String,
    pub test_average: i64,
    pub flashcard_accuracy: i64,
}

impl StudentBreakdown {
    /// Combined key the student ranking is ordered by.
    pub fn ranking_score(&self) -> i64 {
        self.test_average + self.flashcard_accuracy
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestBreakdown {
    pub id: String,
    pub name: String,
    pub average: i64,
}

/// Rolled-up statistics for one content scope.
///
/// `Default` is the zero-valued shape returned when nothing could be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalytics {
    pub student_count: usize,
    pub test_count: usize,
    pub average_score: i64,
    pub flashcard_session_count: usize,
    pub average_flashcard_accuracy: i64,
    pub students: Vec<StudentBreakdown>,
    pub tests: Vec<TestBreakdown>,
    pub flashcard_sessions: Vec<FlashcardSession>,
    pub activity_log: Vec<ActivityLogEntry>,
}

impl ContentAnalytics {
    pub fn is_empty(&self) -> bool {
        self.student_count == 0
            && self.test_count == 0
            && self.flashcard_session_count == 0
            && self.activity_log.is_empty()
    }
}
