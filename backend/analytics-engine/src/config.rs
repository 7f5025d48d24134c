use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::{AnalyticsError, AnalyticsResult};

const DEFAULT_DATA_API_URL: &str = "http://localhost:54321";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data_api: DataApiConfig,
}

/// Connection settings for the remote data store's RPC surface.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DataApiConfig {
    #[validate(url(message = "data_api.url must be an absolute URL"))]
    pub url: String,
    pub key: Option<String>,
    #[validate(range(min = 1, max = 120, message = "data_api.timeout_secs must be 1..=120"))]
    pub timeout_secs: u64,
}

impl Default for DataApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_API_URL.to_string(),
            key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> AnalyticsResult<Self> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // config/*.toml first, APP__* environment overrides on top
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let url = settings
            .get_string("data_api.url")
            .or_else(|_| env::var("DATA_API_URL"))
            .unwrap_or_else(|_| DEFAULT_DATA_API_URL.to_string());

        let key = settings
            .get_string("data_api.key")
            .or_else(|_| env::var("DATA_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let timeout_secs = match settings.get_int("data_api.timeout_secs") {
            Ok(value) => u64::try_from(value).map_err(|_| {
                AnalyticsError::Config(format!("data_api.timeout_secs must be positive, got {}", value))
            })?,
            Err(config::ConfigError::NotFound(_)) => DEFAULT_TIMEOUT_SECS,
            Err(err) => return Err(err.into()),
        };

        let data_api = DataApiConfig {
            url,
            key,
            timeout_secs,
        };
        data_api.validate()?;

        if data_api.key.is_none() {
            tracing::warn!("DATA_API_KEY not set; data source requests will be unauthenticated");
        }

        Ok(Config { data_api })
    }
}
