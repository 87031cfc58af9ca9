/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for various translation providers:
 * - Google: Google Cloud Translation v2 API
 * - DeepL: DeepL REST API
 * - Mock: deterministic in-process provider for tests
 */

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Process-wide HTTP client shared by all provider implementations.
///
/// Providers apply their configured timeout per request, so a single shared
/// client handles every file in a batch run.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Get the shared HTTP client
pub(crate) fn http_client() -> &'static Client {
    &HTTP_CLIENT
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably in the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract the ordered translated lines from the provider response
    ///
    /// # Arguments
    /// * `response` - The response from the provider
    ///
    /// # Returns
    /// * `Vec<String>` - The translated lines, index-aligned to the request
    fn extract_lines(response: &Self::Response) -> Vec<String>;
}

pub mod google;
pub mod deepl;
pub mod mock;
