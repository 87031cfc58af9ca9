/*!
 * Error types for the nbtrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while parsing or rewriting notebook documents
#[derive(Error, Debug)]
pub enum NotebookError {
    /// The file content is not valid JSON
    #[error("Invalid notebook JSON: {0}")]
    Parse(String),

    /// The document has no "cells" array
    #[error("Notebook document has no \"cells\" array")]
    MissingCells,

    /// A cell is not a JSON object
    #[error("Cell {index} is not a JSON object")]
    InvalidCell {
        /// Index of the offending cell
        index: usize
    },

    /// A cell's "source" field is missing or not an array of strings
    #[error("Cell {index} has a missing or malformed \"source\" field")]
    InvalidSource {
        /// Index of the offending cell
        index: usize
    },

    /// The rewritten document failed to serialize
    #[error("Failed to serialize notebook: {0}")]
    Serialize(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of strings than requested
    #[error("Translation response misaligned: sent {expected} strings, received {actual}")]
    Alignment {
        /// Number of strings in the request
        expected: usize,
        /// Number of strings in the response
        actual: usize
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from notebook parsing or rewriting
    #[error("Notebook error: {0}")]
    Notebook(#[from] NotebookError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
