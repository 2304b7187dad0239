/*!
 * Tests for application configuration
 */

use hookline::app_config::{Config, TranslationProvider};

/// Test that the default configuration is valid
#[test]
fn test_defaultConfig_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

/// Test that the default provider set covers both backends
#[test]
fn test_defaultConfig_shouldListBothProviders() {
    let config = Config::default();
    let types: Vec<&str> = config
        .translation
        .available_providers
        .iter()
        .map(|p| p.provider_type.as_str())
        .collect();

    assert!(types.contains(&"libretranslate"));
    assert!(types.contains(&"deepl"));
}

/// Test that DeepL without an API key fails validation
#[test]
fn test_validate_withDeepLAndNoKey_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::DeepL;

    let error = config.validate().unwrap_err().to_string();
    assert!(error.contains("API key"));
}

/// Test that DeepL with a key passes validation
#[test]
fn test_validate_withDeepLAndKey_shouldSucceed() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::DeepL;
    for provider in &mut config.translation.available_providers {
        if provider.provider_type == "deepl" {
            provider.api_key = "test-key".to_string();
        }
    }

    assert!(config.validate().is_ok());
}

/// Test that an unparseable bind address fails validation
#[test]
fn test_validate_withBadBindAddr_shouldFail() {
    let mut config = Config::default();
    config.server.bind_addr = "not-an-address".to_string();
    assert!(config.validate().is_err());
}

/// Test that zero retry attempts fail validation
#[test]
fn test_validate_withZeroRetries_shouldFail() {
    let mut config = Config::default();
    config.translation.retry_attempts = 0;
    assert!(config.validate().is_err());
}

/// Test that a config file with only overrides picks up defaults elsewhere
#[test]
fn test_deserialize_withPartialConfig_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{"data_dir": "custom"}"#).unwrap();

    assert_eq!(config.data_dir, "custom");
    assert_eq!(config.content_file, "data/content.json");
    assert_eq!(config.source_language, "en");
    assert_eq!(config.translation.retry_attempts, 3);
    assert_eq!(config.translation.checkpoint_interval, 50);
}

/// Test provider selection through the available_providers table
#[test]
fn test_getActiveProviderConfig_shouldFollowProviderField() {
    let mut config = Config::default();

    config.translation.provider = TranslationProvider::LibreTranslate;
    assert_eq!(
        config.translation.get_active_provider_config().unwrap().provider_type,
        "libretranslate"
    );

    config.translation.provider = TranslationProvider::DeepL;
    assert_eq!(
        config.translation.get_active_provider_config().unwrap().provider_type,
        "deepl"
    );
}
