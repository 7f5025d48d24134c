use std::env;

use learning_analytics::{AnalyticsError, AnalyticsService, Config};

const VARS: [&str; 6] = [
    "APP_ENV",
    "APP__DATA_API__URL",
    "APP__DATA_API__TIMEOUT_SECS",
    "APP__DATA_API__KEY",
    "DATA_API_URL",
    "DATA_API_KEY",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
    // No config/test-isolated.toml exists, so only env and defaults apply.
    env::set_var("APP_ENV", "test-isolated");
}

#[test]
#[serial_test::serial]
fn test_defaults_without_overrides() {
    clear_env();

    let config = Config::load().expect("defaults should load");

    assert_eq!(config.data_api.url, "http://localhost:54321");
    assert_eq!(config.data_api.timeout_secs, 10);
    assert_eq!(config.data_api.key, None);
}

#[test]
#[serial_test::serial]
fn test_prefixed_env_overrides() {
    clear_env();
    env::set_var("APP__DATA_API__URL", "https://data.school.example");
    env::set_var("APP__DATA_API__TIMEOUT_SECS", "30");
    env::set_var("APP__DATA_API__KEY", "anon-key");

    let config = Config::load().expect("overrides should load");

    assert_eq!(config.data_api.url, "https://data.school.example");
    assert_eq!(config.data_api.timeout_secs, 30);
    assert_eq!(config.data_api.key.as_deref(), Some("anon-key"));
    assert!(AnalyticsService::from_config(&config).is_ok());

    clear_env();
}

#[test]
#[serial_test::serial]
fn test_plain_env_fallbacks() {
    clear_env();
    env::set_var("DATA_API_URL", "http://10.0.0.5:3000");
    env::set_var("DATA_API_KEY", "  ");

    let config = Config::load().expect("fallbacks should load");

    assert_eq!(config.data_api.url, "http://10.0.0.5:3000");
    assert_eq!(config.data_api.key, None, "blank keys are ignored");

    clear_env();
}

#[test]
#[serial_test::serial]
fn test_invalid_timeout_is_rejected() {
    clear_env();
    env::set_var("APP__DATA_API__TIMEOUT_SECS", "0");

    let result = Config::load();

    assert!(matches!(result, Err(AnalyticsError::Config(_))));
    clear_env();
}

#[test]
#[serial_test::serial]
fn test_invalid_url_is_rejected() {
    clear_env();
    env::set_var("APP__DATA_API__URL", "data-api");

    assert!(matches!(Config::load(), Err(AnalyticsError::Config(_))));
    clear_env();
}
