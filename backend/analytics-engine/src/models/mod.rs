use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod analytics;
pub mod student;

/// Node of the course → module → discipline → class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLevel {
    Course,
    Module,
    Discipline,
    Class,
}

impl ContentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLevel::Course => "course",
            ContentLevel::Module => "module",
            ContentLevel::Discipline => "discipline",
            ContentLevel::Class => "class",
        }
    }
}

impl fmt::Display for ContentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentLevel(pub String);

impl fmt::Display for UnknownContentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content level '{}'", self.0)
    }
}

impl std::error::Error for UnknownContentLevel {}

impl FromStr for ContentLevel {
    type Err = UnknownContentLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "course" => Ok(ContentLevel::Course),
            "module" => Ok(ContentLevel::Module),
            "discipline" => Ok(ContentLevel::Discipline),
            "class" => Ok(ContentLevel::Class),
            _ => Err(UnknownContentLevel(value.to_string())),
        }
    }
}

/// Scope that analytics are filtered to. Only forwarded to the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentScope {
    pub level: ContentLevel,
    pub id: String,
}

impl ContentScope {
    pub fn new(level: ContentLevel, id: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRef {
    pub id: String,
    pub name: String,
}

/// Raw rows arrive in the data source's snake_case and leave in camelCase,
/// matching the results they are embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TestAttempt {
    #[serde(alias = "studentId")]
    pub student_id: String,
    #[serde(alias = "testId")]
    pub test_id: String,
    /// 0..=100, validated upstream.
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashcardSessionStatus {
    InProgress,
    Completed,
    Abandoned,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FlashcardSession {
    #[serde(alias = "studentId")]
    pub student_id: String,
    #[serde(default, alias = "correctAnswers", deserialize_with = "null_as_default")]
    pub correct_answers: i64,
    #[serde(default, alias = "incorrectAnswers", deserialize_with = "null_as_default")]
    pub incorrect_answers: i64,
    pub status: FlashcardSessionStatus,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl FlashcardSession {
    pub fn answered(&self) -> i64 {
        self.correct_answers + self.incorrect_answers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(default, alias = "studentId")]
    pub student_id: Option<String>,
    pub description: String,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Every raw row relevant to one content scope, as delivered by the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub students: Vec<StudentRef>,
    #[serde(default)]
    pub tests: Vec<TestRef>,
    #[serde(default, alias = "testAttempts")]
    pub test_attempts: Vec<TestAttempt>,
    #[serde(default)]
    pub sessions: Vec<FlashcardSession>,
    #[serde(default, alias = "activityLog")]
    pub activity_log: Vec<ActivityLogEntry>,
}

/// Reads an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
