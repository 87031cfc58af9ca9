/*!
 * Tests for provider implementations, exercised through the mock
 */

use anyhow::Result;
use nbtrans::errors::ProviderError;
use nbtrans::providers::Provider;
use nbtrans::providers::mock::{MockRequest, MockTranslator, MOCK_PREFIX};

fn request(lines: &[&str]) -> MockRequest {
    MockRequest {
        lines: lines.iter().map(|s| s.to_string()).collect(),
        target_language: "en".to_string(),
    }
}

/// Test that the working mock answers every request and counts them
#[tokio::test]
async fn test_complete_withWorkingMock_shouldCountRequests() -> Result<()> {
    let mock = MockTranslator::working();

    let response = mock.complete(request(&["salut"])).await?;
    assert_eq!(response.lines, vec![format!("{}salut", MOCK_PREFIX)]);

    mock.complete(request(&["encore"])).await?;
    assert_eq!(mock.request_count(), 2);

    Ok(())
}

/// Test that the intermittent mock fails on its configured cadence
#[tokio::test]
async fn test_complete_withIntermittentMock_shouldFailEverySecondRequest() -> Result<()> {
    let mock = MockTranslator::intermittent(2);

    assert!(mock.complete(request(&["un"])).await.is_ok());
    assert!(mock.complete(request(&["deux"])).await.is_err());
    assert!(mock.complete(request(&["trois"])).await.is_ok());
    assert!(mock.complete(request(&["quatre"])).await.is_err());
    assert_eq!(mock.request_count(), 4);

    Ok(())
}

/// Test that the connection probe reflects the configured behavior
#[tokio::test]
async fn test_testConnection_withWorkingAndFailingMocks_shouldMatchBehavior() -> Result<()> {
    MockTranslator::working().test_connection().await?;

    let result = MockTranslator::failing().test_connection().await;
    assert!(matches!(result, Err(ProviderError::ConnectionError(_))));

    Ok(())
}
