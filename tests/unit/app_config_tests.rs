/*!
 * Tests for application configuration
 */

use std::str::FromStr;
use anyhow::Result;
use nbtrans::app_config::{Config, ProviderConfig, TranslationProvider};

/// Test that the default config targets English via Google
#[test]
fn test_default_withNoOverrides_shouldTargetEnglishViaGoogle() {
    let config = Config::default();

    assert_eq!(config.target_language, "en");
    assert_eq!(config.translation.provider, TranslationProvider::Google);
}

/// Test that validation rejects a cloud provider without an API key
#[test]
fn test_validate_withoutApiKey_shouldFail() {
    let config = Config::default();

    assert!(config.validate().is_err());
}

/// Test that validation accepts a cloud provider once a key is set
#[test]
fn test_validate_withApiKey_shouldSucceed() -> Result<()> {
    let mut config = Config::default();
    for provider in config.translation.available_providers.iter_mut() {
        provider.api_key = "test-key".to_string();
    }

    config.validate()?;

    Ok(())
}

/// Test that validation rejects an unknown target language
#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "zz".to_string();
    config.translation.provider = TranslationProvider::Mock;

    assert!(config.validate().is_err());
}

/// Test that the mock provider validates without credentials
#[test]
fn test_validate_withMockProvider_shouldNotRequireApiKey() -> Result<()> {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Mock;

    config.validate()?;

    Ok(())
}

/// Test provider parsing from strings
#[test]
fn test_fromStr_withKnownProviders_shouldParse() -> Result<()> {
    assert_eq!(TranslationProvider::from_str("google")?, TranslationProvider::Google);
    assert_eq!(TranslationProvider::from_str("DeepL")?, TranslationProvider::DeepL);
    assert!(TranslationProvider::from_str("babelfish").is_err());

    Ok(())
}

/// Test that accessors read from the active provider entry
#[test]
fn test_getApiKey_withActiveProviderEntry_shouldReturnItsKey() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::DeepL;

    let mut deepl = ProviderConfig::new(TranslationProvider::DeepL);
    deepl.api_key = "deepl-key".to_string();
    config.translation.available_providers = vec![
        ProviderConfig::new(TranslationProvider::Google),
        deepl,
    ];

    assert_eq!(config.translation.get_api_key(), "deepl-key");
    assert_eq!(config.translation.get_endpoint(), "https://api.deepl.com");
}

/// Test that a config parsed from JSON picks up defaults for omitted fields
#[test]
fn test_deserialize_withMinimalJson_shouldApplyDefaults() -> Result<()> {
    let json = r#"{
        "target_language": "es",
        "translation": {"provider": "deepl"}
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.target_language, "es");
    assert_eq!(config.translation.provider, TranslationProvider::DeepL);
    assert_eq!(config.log_level, nbtrans::app_config::LogLevel::Info);

    Ok(())
}
