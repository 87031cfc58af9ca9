use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use log::error;

use crate::errors::ProviderError;
use crate::providers::{http_client, Provider};

/// Google client for the Cloud Translation v2 API
#[derive(Debug)]
pub struct GoogleTranslate {
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Request timeout
    timeout: Duration,
}

/// Google translation request
///
/// The `q` field carries every source line of one cell; the API returns one
/// translation per element, in the same order.
#[derive(Debug, Serialize)]
pub struct GoogleRequest {
    /// The lines to translate
    q: Vec<String>,
    /// Target language code
    target: String,
    /// Input format ("text" disables HTML entity handling)
    format: String,
}

impl GoogleRequest {
    /// Create a new translation request
    pub fn new(lines: Vec<String>, target_language: impl Into<String>) -> Self {
        Self {
            q: lines,
            target: target_language.into(),
            format: "text".to_string(),
        }
    }
}

/// Google translation response envelope
#[derive(Debug, Deserialize)]
pub struct GoogleResponse {
    /// The response payload
    pub data: GoogleResponseData,
}

/// Payload of a Google translation response
#[derive(Debug, Deserialize)]
pub struct GoogleResponseData {
    /// Translations, index-aligned with the request lines
    pub translations: Vec<GoogleTranslation>,
}

/// A single translated line
#[derive(Debug, Deserialize)]
pub struct GoogleTranslation {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl GoogleTranslate {
    /// Create a new Google Translate client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Build the request URL, keeping the API key in the query string as the
    /// v2 API expects
    fn request_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://translation.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/language/translate/v2?key={}", base, self.api_key)
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    type Request = GoogleRequest;
    type Response = GoogleResponse;

    async fn complete(&self, request: GoogleRequest) -> Result<GoogleResponse, ProviderError> {
        let response = http_client()
            .post(self.request_url())
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to send request to Google Translate API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, error_text);

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<GoogleResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Google Translate API response: {}", e)))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GoogleRequest::new(vec!["Hello".to_string()], "en");
        self.complete(request).await?;
        Ok(())
    }

    fn extract_lines(response: &GoogleResponse) -> Vec<String> {
        response.data.translations.iter()
            .map(|t| t.translated_text.clone())
            .collect()
    }
}
