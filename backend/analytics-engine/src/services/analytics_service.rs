use std::sync::Arc;

use crate::{
    config::Config,
    error::{AnalyticsError, AnalyticsResult},
    metrics::track_fetch,
    models::{
        analytics::ContentAnalytics,
        student::{StudentComprehensiveAnalytics, StudentContextualPerformance},
        ContentScope,
    },
    services::{
        assemblers::{assemble_comprehensive_analytics, assemble_content_analytics},
        fallback::{contain, zeroed_on_failure},
        http_source::HttpAnalyticsSource,
        source::AnalyticsSource,
    },
};

const CONTENT_SCOPE: &str = "content_scope";
const CONTEXTUAL: &str = "contextual";
const COMPREHENSIVE: &str = "comprehensive";

/// Entry points the dashboards call. Each call fetches once, computes
/// synchronously and shares no state with other calls.
#[derive(Clone)]
pub struct AnalyticsService {
    source: Arc<dyn AnalyticsSource>,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &Config) -> AnalyticsResult<Self> {
        let source = HttpAnalyticsSource::new(&config.data_api)?;
        Ok(Self::new(Arc::new(source)))
    }

    /// Scope-wide analytics. Fetch failures and empty scopes both come back as
    /// the zero-valued shape.
    pub async fn content_analytics(&self, scope: &ContentScope) -> ContentAnalytics {
        zeroed_on_failure(
            CONTENT_SCOPE,
            &scope_subject(scope),
            self.try_content_analytics(scope),
        )
        .await
    }

    pub async fn try_content_analytics(
        &self,
        scope: &ContentScope,
    ) -> AnalyticsResult<ContentAnalytics> {
        tracing::debug!(
            scope_level = scope.level.as_str(),
            scope_id = %scope.id,
            "Loading content analytics bundle"
        );

        let bundle = track_fetch(
            CONTENT_SCOPE,
            self.source.fetch_content_analytics_bundle(scope),
        )
        .await?
        .ok_or(AnalyticsError::EmptyPayload)?;

        let analytics = assemble_content_analytics(bundle);
        if analytics.is_empty() {
            tracing::debug!(
                scope_level = scope.level.as_str(),
                scope_id = %scope.id,
                "Content scope has no rows"
            );
        }
        tracing::info!(
            scope_level = scope.level.as_str(),
            scope_id = %scope.id,
            students = analytics.student_count,
            tests = analytics.test_count,
            sessions = analytics.flashcard_session_count,
            "Content analytics assembled"
        );
        Ok(analytics)
    }

    /// `None` tells the caller to render an explicit "could not load" state.
    pub async fn student_contextual_performance(
        &self,
        student_id: &str,
        scope: &ContentScope,
    ) -> Option<StudentContextualPerformance> {
        let subject = format!("student={} {}", student_id, scope_subject(scope));
        contain(
            CONTEXTUAL,
            &subject,
            self.try_student_contextual_performance(student_id, scope),
        )
        .await
    }

    pub async fn try_student_contextual_performance(
        &self,
        student_id: &str,
        scope: &ContentScope,
    ) -> AnalyticsResult<StudentContextualPerformance> {
        tracing::debug!(
            student_id,
            scope_level = scope.level.as_str(),
            scope_id = %scope.id,
            "Loading contextual student performance"
        );

        track_fetch(
            CONTEXTUAL,
            self.source
                .fetch_student_contextual_performance(student_id, scope),
        )
        .await?
        .ok_or(AnalyticsError::EmptyPayload)
    }

    pub async fn student_comprehensive_analytics(
        &self,
        student_id: &str,
    ) -> Option<StudentComprehensiveAnalytics> {
        let subject = format!("student={}", student_id);
        contain(
            COMPREHENSIVE,
            &subject,
            self.try_student_comprehensive_analytics(student_id),
        )
        .await
    }

    pub async fn try_student_comprehensive_analytics(
        &self,
        student_id: &str,
    ) -> AnalyticsResult<StudentComprehensiveAnalytics> {
        tracing::debug!(student_id, "Loading comprehensive student analytics");

        let raw = track_fetch(
            COMPREHENSIVE,
            self.source.fetch_student_comprehensive_analytics(student_id),
        )
        .await?
        .ok_or(AnalyticsError::EmptyPayload)?;

        Ok(assemble_comprehensive_analytics(raw))
    }
}

fn scope_subject(scope: &ContentScope) -> String {
    format!("scope={}:{}", scope.level, scope.id)
}
