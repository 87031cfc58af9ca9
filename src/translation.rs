/*!
 * Translation service for notebook cell translation.
 *
 * This module contains the main TranslationService struct, which dispatches
 * cell source lines to the configured provider and enforces the alignment
 * postcondition: a response must carry exactly one translated line per
 * request line, in the same order.
 */

use anyhow::{Result, anyhow};
use url::Url;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::TranslationError;
use crate::providers::Provider;
use crate::providers::google::{GoogleTranslate, GoogleRequest};
use crate::providers::deepl::{DeepL, DeepLRequest};
use crate::providers::mock::{MockTranslator, MockRequest};

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// Google Cloud Translation v2 service
    Google {
        /// Client instance
        client: GoogleTranslate,
    },

    /// DeepL API service
    DeepL {
        /// Client instance
        client: DeepL,
    },

    /// Deterministic mock, used by the test suite
    Mock {
        /// Client instance
        client: MockTranslator,
    },
}

/// Validate that an endpoint string parses as an http(s) URL
fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Ok(());
    }

    let url = Url::parse(endpoint)
        .map_err(|e| anyhow!("Invalid endpoint '{}': {}", endpoint, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("Endpoint must use http or https: {}", endpoint));
    }

    Ok(())
}

/// Translation service that dispatches to the configured provider
pub struct TranslationService {
    /// Active provider implementation
    provider_impl: TranslationProviderImpl,
}

impl TranslationService {
    /// Create a new translation service from configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let endpoint = config.get_endpoint();
        validate_endpoint(&endpoint)?;

        let provider_impl = match config.provider {
            ConfigTranslationProvider::Google => TranslationProviderImpl::Google {
                client: GoogleTranslate::new(config.get_api_key(), endpoint, config.get_timeout_secs()),
            },
            ConfigTranslationProvider::DeepL => TranslationProviderImpl::DeepL {
                client: DeepL::new(config.get_api_key(), endpoint, config.get_timeout_secs()),
            },
            ConfigTranslationProvider::Mock => TranslationProviderImpl::Mock {
                client: MockTranslator::working(),
            },
        };

        Ok(Self { provider_impl })
    }

    /// Create a translation service backed by a specific mock, for tests
    pub fn with_mock(client: MockTranslator) -> Self {
        Self {
            provider_impl: TranslationProviderImpl::Mock { client },
        }
    }

    /// Translate an ordered list of lines into the target language.
    ///
    /// The whole list goes out as a single provider request. The returned
    /// list has the same length and order as the input; a provider response
    /// of any other length is rejected with an alignment error rather than
    /// spliced in.
    pub async fn translate_lines(&self, lines: &[String], target_language: &str) -> Result<Vec<String>, TranslationError> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let translated = match &self.provider_impl {
            TranslationProviderImpl::Google { client } => {
                let request = GoogleRequest::new(lines.to_vec(), target_language);
                let response = client.complete(request).await?;
                GoogleTranslate::extract_lines(&response)
            },
            TranslationProviderImpl::DeepL { client } => {
                let request = DeepLRequest::new(lines.to_vec(), target_language);
                let response = client.complete(request).await?;
                DeepL::extract_lines(&response)
            },
            TranslationProviderImpl::Mock { client } => {
                let request = MockRequest {
                    lines: lines.to_vec(),
                    target_language: target_language.to_string(),
                };
                let response = client.complete(request).await?;
                MockTranslator::extract_lines(&response)
            },
        };

        if translated.len() != lines.len() {
            return Err(TranslationError::Alignment {
                expected: lines.len(),
                actual: translated.len(),
            });
        }

        Ok(translated)
    }

    /// Test the connection to the active provider
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        match &self.provider_impl {
            TranslationProviderImpl::Google { client } => client.test_connection().await?,
            TranslationProviderImpl::DeepL { client } => client.test_connection().await?,
            TranslationProviderImpl::Mock { client } => client.test_connection().await?,
        }

        Ok(())
    }
}
