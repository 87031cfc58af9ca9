/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockTranslator::working()` - Always succeeds, prefixing each line
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::misaligned(n)` - Drops n lines from every response
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Prefix applied to lines by the working mock when no dictionary entry matches
pub const MOCK_PREFIX: &str = "[TRANSLATED] ";

/// Mock request for testing
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// The lines to translate
    pub lines: Vec<String>,
    /// Target language
    pub target_language: String,
}

/// Mock response for testing
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// The translated lines
    pub lines: Vec<String>,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a deterministic translation
    Working,
    /// Always fails with an error
    Failing,
    /// Succeeds but drops trailing lines from the response
    Misaligned {
        /// Number of lines dropped from every response
        drop: usize
    },
    /// Fails intermittently (every Nth request)
    Intermittent {
        /// Which requests fail
        fail_every: usize
    },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Fixed line-for-line dictionary, consulted before the prefix fallback
    dictionary: HashMap<String, String>,
}

impl MockTranslator {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            dictionary: HashMap::new(),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that drops lines from every response
    pub fn misaligned(drop: usize) -> Self {
        Self::new(MockBehavior::Misaligned { drop })
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Add a fixed translation to the dictionary
    pub fn with_translation(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.dictionary.insert(from.into(), to.into());
        self
    }

    /// Number of requests this mock has served
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Translate one line deterministically
    fn translate_line(&self, line: &str) -> String {
        match self.dictionary.get(line) {
            Some(translated) => translated.clone(),
            None => format!("{}{}", MOCK_PREFIX, line),
        }
    }
}

#[async_trait]
impl Provider for MockTranslator {
    type Request = MockRequest;
    type Response = MockResponse;

    async fn complete(&self, request: MockRequest) -> Result<MockResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Working => {
                let lines = request.lines.iter()
                    .map(|line| self.translate_line(line))
                    .collect();
                Ok(MockResponse { lines })
            },
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("Mock provider configured to fail".to_string()))
            },
            MockBehavior::Misaligned { drop } => {
                let keep = request.lines.len().saturating_sub(drop);
                let lines = request.lines.iter()
                    .take(keep)
                    .map(|line| self.translate_line(line))
                    .collect();
                Ok(MockResponse { lines })
            },
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    return Err(ProviderError::RequestFailed(format!("Mock provider failing request {}", count)));
                }
                let lines = request.lines.iter()
                    .map(|line| self.translate_line(line))
                    .collect();
                Ok(MockResponse { lines })
            },
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError("Mock provider configured to fail".to_string())),
            _ => Ok(()),
        }
    }

    fn extract_lines(response: &MockResponse) -> Vec<String> {
        response.lines.clone()
    }
}
