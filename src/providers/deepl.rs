use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use log::error;

use crate::errors::ProviderError;
use crate::providers::{http_client, Provider};

/// DeepL client for the DeepL REST API
#[derive(Debug)]
pub struct DeepL {
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the paid-tier endpoint)
    endpoint: String,
    /// Request timeout
    timeout: Duration,
}

/// DeepL translation request
#[derive(Debug, Serialize)]
pub struct DeepLRequest {
    /// The lines to translate
    text: Vec<String>,
    /// Target language code (DeepL expects upper case)
    target_lang: String,
}

impl DeepLRequest {
    /// Create a new translation request
    pub fn new(lines: Vec<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: lines,
            target_lang: target_language.into().to_uppercase(),
        }
    }
}

/// DeepL translation response
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    /// Translations, index-aligned with the request lines
    pub translations: Vec<DeepLTranslation>,
}

/// A single translated line
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    /// The translated text
    pub text: String,
}

impl DeepL {
    /// Create a new DeepL client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Build the request URL
    fn request_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://api.deepl.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/v2/translate", base)
    }
}

#[async_trait]
impl Provider for DeepL {
    type Request = DeepLRequest;
    type Response = DeepLResponse;

    async fn complete(&self, request: DeepLRequest) -> Result<DeepLResponse, ProviderError> {
        let response = http_client()
            .post(self.request_url())
            .timeout(self.timeout)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to send request to DeepL API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepL API error ({}): {}", status, error_text);

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<DeepLResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse DeepL API response: {}", e)))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = DeepLRequest::new(vec!["Hello".to_string()], "en");
        self.complete(request).await?;
        Ok(())
    }

    fn extract_lines(response: &DeepLResponse) -> Vec<String> {
        response.translations.iter()
            .map(|t| t.text.clone())
            .collect()
    }
}
