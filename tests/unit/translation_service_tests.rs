/*!
 * Tests for the translation service and its alignment checking
 */

use anyhow::Result;
use nbtrans::app_config::{TranslationConfig, TranslationProvider};
use nbtrans::errors::TranslationError;
use nbtrans::providers::mock::{MockTranslator, MOCK_PREFIX};
use nbtrans::translation::TranslationService;

/// Test that a working mock translates every line, index-aligned
#[tokio::test]
async fn test_translateLines_withWorkingMock_shouldReturnAlignedLines() -> Result<()> {
    let service = TranslationService::with_mock(MockTranslator::working());

    let lines = vec!["un".to_string(), "deux".to_string(), "trois".to_string()];
    let translated = service.translate_lines(&lines, "en").await?;

    assert_eq!(translated.len(), lines.len());
    for (original, translated) in lines.iter().zip(translated.iter()) {
        assert_eq!(translated, &format!("{}{}", MOCK_PREFIX, original));
    }

    Ok(())
}

/// Test that dictionary entries take precedence over the prefix fallback
#[tokio::test]
async fn test_translateLines_withDictionary_shouldUseFixedTranslations() -> Result<()> {
    let mock = MockTranslator::working().with_translation("Bonjour", "Hello");
    let service = TranslationService::with_mock(mock);

    let translated = service.translate_lines(&["Bonjour".to_string()], "en").await?;

    assert_eq!(translated, vec!["Hello".to_string()]);

    Ok(())
}

/// Test that an empty input produces an empty output without a provider call
#[tokio::test]
async fn test_translateLines_withEmptyInput_shouldReturnEmpty() -> Result<()> {
    let service = TranslationService::with_mock(MockTranslator::failing());

    // A failing mock would error if the service actually called it
    let translated = service.translate_lines(&[], "en").await?;
    assert!(translated.is_empty());

    Ok(())
}

/// Test that a short provider response is rejected as an alignment error
#[tokio::test]
async fn test_translateLines_withMisalignedResponse_shouldReturnAlignmentError() {
    let service = TranslationService::with_mock(MockTranslator::misaligned(1));

    let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let result = service.translate_lines(&lines, "en").await;

    match result {
        Err(TranslationError::Alignment { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        },
        other => panic!("Expected alignment error, got {:?}", other.map(|_| ())),
    }
}

/// Test that provider failures surface as provider errors
#[tokio::test]
async fn test_translateLines_withFailingProvider_shouldReturnProviderError() {
    let service = TranslationService::with_mock(MockTranslator::failing());

    let result = service.translate_lines(&["x".to_string()], "en").await;

    assert!(matches!(result, Err(TranslationError::Provider(_))));
}

/// Test that a service builds from a mock-provider configuration
#[test]
fn test_new_withMockProviderConfig_shouldBuildService() -> Result<()> {
    let config = TranslationConfig {
        provider: TranslationProvider::Mock,
        ..TranslationConfig::default()
    };

    let _service = TranslationService::new(config)?;

    Ok(())
}

/// Test that a garbage endpoint is rejected at construction time
#[test]
fn test_new_withInvalidEndpoint_shouldFail() {
    let mut config = TranslationConfig::default();
    for provider in config.available_providers.iter_mut() {
        provider.endpoint = "not a url".to_string();
    }

    assert!(TranslationService::new(config).is_err());
}
