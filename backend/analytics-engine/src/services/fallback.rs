use std::future::Future;

use tracing::warn;

use crate::{error::AnalyticsResult, metrics};

/// Awaits `work` and records how it ended. A failure is logged once and
/// returned as `None`; it never reaches the caller.
pub async fn contain<T, F>(assembler: &'static str, subject: &str, work: F) -> Option<T>
where
    F: Future<Output = AnalyticsResult<T>>,
{
    match work.await {
        Ok(value) => {
            metrics::record_outcome(assembler, "success");
            Some(value)
        }
        Err(err) => {
            let category = err.category();
            metrics::record_outcome(assembler, category);
            warn!(
                assembler,
                subject,
                category,
                error = %err,
                "Analytics unavailable, returning fallback"
            );
            None
        }
    }
}

/// Like [`contain`] but substitutes the zero-valued `T`.
pub async fn zeroed_on_failure<T, F>(assembler: &'static str, subject: &str, work: F) -> T
where
    T: Default,
    F: Future<Output = AnalyticsResult<T>>,
{
    contain(assembler, subject, work).await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    #[tokio::test]
    async fn success_passes_value_through() {
        let value = contain("test_assembler", "scope", async { Ok(7) }).await;
        assert_eq!(value, Some(7));
    }

    #[tokio::test]
    async fn failure_becomes_none() {
        let value: Option<u32> = contain("test_assembler", "scope", async {
            Err(AnalyticsError::Transport("connection reset".into()))
        })
        .await;
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn failure_becomes_default() {
        let value: Vec<u32> = zeroed_on_failure("test_assembler", "scope", async {
            Err(AnalyticsError::EmptyPayload)
        })
        .await;
        assert!(value.is_empty());
    }
}
