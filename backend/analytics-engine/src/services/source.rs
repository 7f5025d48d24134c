use async_trait::async_trait;

use crate::{
    error::AnalyticsResult,
    models::{
        student::{RawComprehensiveAnalytics, StudentContextualPerformance},
        ContentBundle, ContentScope,
    },
};

/// Data-access collaborator that delivers raw rows to the engine.
///
/// Implementations must not pre-aggregate, and should return rows in a stable
/// order (for example by id) because rankings break ties by input order.
/// `Ok(None)` means the collaborator was reachable but had nothing to return.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn fetch_content_analytics_bundle(
        &self,
        scope: &ContentScope,
    ) -> AnalyticsResult<Option<ContentBundle>>;

    async fn fetch_student_contextual_performance(
        &self,
        student_id: &str,
        scope: &ContentScope,
    ) -> AnalyticsResult<Option<StudentContextualPerformance>>;

    async fn fetch_student_comprehensive_analytics(
        &self,
        student_id: &str,
    ) -> AnalyticsResult<Option<RawComprehensiveAnalytics>>;
}
