use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    pub static ref ANALYTICS_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "analytics_requests_total",
        "Total number of analytics entry point calls",
        &["assembler", "outcome"]
    )
    .unwrap();

    pub static ref ANALYTICS_FETCH_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "analytics_fetch_duration_seconds",
        "Data source fetch duration in seconds",
        &["assembler"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

/// Helper: time a data source fetch for one assembler
pub async fn track_fetch<F, T>(assembler: &str, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = std::time::Instant::now();
    let result = future.await;

    ANALYTICS_FETCH_DURATION_SECONDS
        .with_label_values(&[assembler])
        .observe(start.elapsed().as_secs_f64());

    result
}

/// Record how an entry point call ended
pub fn record_outcome(assembler: &str, outcome: &str) {
    ANALYTICS_REQUESTS_TOTAL
        .with_label_values(&[assembler, outcome])
        .inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_metrics() {
        record_outcome("content_scope", "success");

        let result = render_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("analytics_requests_total"));
    }

    #[tokio::test]
    async fn test_track_fetch_passes_result_through() {
        let value = track_fetch("comprehensive", async { 42 }).await;
        assert_eq!(value, 42);

        let output = render_metrics().unwrap();
        assert!(output.contains("analytics_fetch_duration_seconds"));
    }
}
