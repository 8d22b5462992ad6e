//! Tests for configuration loading

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use tomctl::config::{API_URL_ENV, AUTH_SCHEME_ENV, Config, ConfigError};

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.auth_scheme, "JWT");
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert_eq!(config.retry.policy(), tomctl::client::RetryPolicy::default());
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "https://tom.example.org"

[retry]
max_retries = 5
base_delay_ms = 250
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://tom.example.org");
    assert_eq!(config.api.auth_scheme, "JWT");

    let policy = config.retry.policy();
    assert_eq!(policy.max_retries, 5);
    assert_eq!(policy.base_delay, Duration::from_millis(250));
    assert_eq!(policy.retryable_statuses, vec![408, 429, 500, 502, 503, 504]);
}

#[test]
fn test_load_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_invalid_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\ntimeout_secs = \"soon\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

#[test]
fn test_env_overrides() {
    let config = Config::default().with_env_overrides(|key| match key {
        API_URL_ENV => Some("https://override.example".to_string()),
        AUTH_SCHEME_ENV => Some("Bearer".to_string()),
        _ => None,
    });

    assert_eq!(config.api.base_url, "https://override.example");
    assert_eq!(config.api.auth_scheme, "Bearer");
}

#[test]
fn test_empty_env_values_are_ignored() {
    let config = Config::default().with_env_overrides(|_| Some(String::new()));
    assert_eq!(config, Config::default());
}

// =============================================================================
// SETTINGS
// =============================================================================

#[test]
fn test_set_known_keys() {
    let mut config = Config::default();
    config.set("api.base_url", "https://tom.example.org/").unwrap();
    config.set("api.auth_scheme", "Bearer").unwrap();
    config.set("api.timeout_secs", "10").unwrap();
    config.set("retry.max_retries", "5").unwrap();
    config.set("retry.base_delay_ms", "250").unwrap();
    config.set("retry.retryable_statuses", "429, 503").unwrap();

    assert_eq!(config.api.base_url, "https://tom.example.org");
    assert_eq!(config.api.auth_scheme, "Bearer");
    assert_eq!(config.api.timeout(), Duration::from_secs(10));
    let policy = config.retry.policy();
    assert_eq!(policy.max_retries, 5);
    assert_eq!(policy.base_delay, Duration::from_millis(250));
    assert_eq!(policy.retryable_statuses, vec![429, 503]);
}

#[test]
fn test_set_rejects_unknown_key() {
    let mut config = Config::default();
    let err = config.set("api.colour", "blue").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKey(ref key) if key == "api.colour"));
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_set_rejects_bad_values_and_keeps_old_ones() {
    let mut config = Config::default();
    for (key, value) in [
        ("api.base_url", "localhost:8000"),
        ("api.base_url", "ftp://tom.example.org"),
        ("api.auth_scheme", "two words"),
        ("api.timeout_secs", "0"),
        ("retry.max_retries", "-1"),
        ("retry.retryable_statuses", "503,abc"),
        ("retry.retryable_statuses", "700"),
    ] {
        let err = config.set(key, value).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{key}={value}");
    }
    assert_eq!(config, Config::default());
}

// =============================================================================
// PATHS
// =============================================================================

#[test]
#[serial_test::serial(env)]
fn test_home_override_relocates_files() {
    let dir = TempDir::new().unwrap();
    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(tomctl::paths::HOME_ENV, dir.path()) };

    assert_eq!(tomctl::paths::app_dir(), dir.path());
    assert_eq!(tomctl::paths::config_file(), dir.path().join("config.toml"));
    assert_eq!(tomctl::paths::session_file(), dir.path().join("session.toml"));

    // SAFETY: as above
    unsafe { std::env::remove_var(tomctl::paths::HOME_ENV) };
}

#[test]
#[serial_test::serial(env)]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(tomctl::paths::HOME_ENV, dir.path()) };

    let mut config = Config::default();
    config.api.base_url = "https://saved.example".to_string();
    config.save().unwrap();

    let loaded = Config::load_from(&Config::config_path()).unwrap();
    assert_eq!(loaded, config);

    // SAFETY: as above
    unsafe { std::env::remove_var(tomctl::paths::HOME_ENV) };
}

#[test]
#[serial_test::serial(env)]
fn test_load_file_ignores_env_overrides() {
    let dir = TempDir::new().unwrap();
    // SAFETY: serialized with every other test touching the environment
    unsafe {
        std::env::set_var(tomctl::paths::HOME_ENV, dir.path());
        std::env::set_var(API_URL_ENV, "https://env.example");
    }

    assert_eq!(Config::load_file().unwrap(), Config::default());
    assert_eq!(Config::load().api.base_url, "https://env.example");

    // SAFETY: as above
    unsafe {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(tomctl::paths::HOME_ENV);
    }
}
