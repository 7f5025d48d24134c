//! Learning analytics aggregation: turns raw roster, test, attempt, flashcard
//! and activity rows into the statistics the management console renders.

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{AnalyticsError, AnalyticsResult};
pub use models::{
    analytics::{ContentAnalytics, StudentBreakdown, TestBreakdown},
    student::{StudentComprehensiveAnalytics, StudentContextualPerformance},
    ContentLevel, ContentScope,
};
pub use services::{AnalyticsService, AnalyticsSource, HttpAnalyticsSource};
