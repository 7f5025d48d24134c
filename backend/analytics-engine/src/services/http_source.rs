use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::{
    config::DataApiConfig,
    error::{AnalyticsError, AnalyticsResult},
    models::{
        student::{RawComprehensiveAnalytics, StudentContextualPerformance},
        ContentBundle, ContentScope,
    },
    services::source::AnalyticsSource,
};

const RPC_PATH: &str = "rest/v1/rpc/";

/// `AnalyticsSource` backed by the remote data store's RPC endpoints.
pub struct HttpAnalyticsSource {
    client: Client,
    rpc_base: Url,
    api_key: Option<String>,
}

impl HttpAnalyticsSource {
    pub fn new(config: &DataApiConfig) -> AnalyticsResult<Self> {
        let mut base = Url::parse(&config.url)
            .map_err(|e| AnalyticsError::Config(format!("invalid data_api.url: {}", e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rpc_base = base
            .join(RPC_PATH)
            .map_err(|e| AnalyticsError::Config(format!("invalid data_api.url: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyticsError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rpc_base,
            api_key: config.key.clone(),
        })
    }

    pub fn rpc_url(&self, function: &str) -> AnalyticsResult<Url> {
        self.rpc_base
            .join(function)
            .map_err(|e| AnalyticsError::Config(format!("invalid RPC function '{}': {}", function, e)))
    }

    async fn call_rpc<T>(&self, function: &str, args: Value) -> AnalyticsResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.rpc_url(function)?;
        tracing::debug!(function, "Calling data source RPC");

        let mut request = self.client.post(url).json(&args);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header(header::AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyticsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(&body)?;
        if value.is_null() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(value)?))
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn fetch_content_analytics_bundle(
        &self,
        scope: &ContentScope,
    ) -> AnalyticsResult<Option<ContentBundle>> {
        self.call_rpc(
            "get_content_analytics_bundle",
            json!({
                "p_level": scope.level.as_str(),
                "p_content_id": scope.id,
            }),
        )
        .await
    }

    async fn fetch_student_contextual_performance(
        &self,
        student_id: &str,
        scope: &ContentScope,
    ) -> AnalyticsResult<Option<StudentContextualPerformance>> {
        self.call_rpc(
            "get_student_contextual_performance",
            json!({
                "p_student_id": student_id,
                "p_level": scope.level.as_str(),
                "p_content_id": scope.id,
            }),
        )
        .await
    }

    async fn fetch_student_comprehensive_analytics(
        &self,
        student_id: &str,
    ) -> AnalyticsResult<Option<RawComprehensiveAnalytics>> {
        self.call_rpc(
            "get_student_comprehensive_analytics",
            json!({ "p_student_id": student_id }),
        )
        .await
    }
}
