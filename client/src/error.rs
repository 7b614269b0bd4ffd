//! Error handling for the Smart Crop dashboard client
//!
//! Every failure a page can hit maps to a user-facing [`ErrorDetail`]. None
//! of them is fatal: the page returns to an interactive state and the user
//! may resubmit.

use serde::Serialize;
use shared::{PresentationError, ValidationError};
use thiserror::Error;

/// Message used when nothing more specific is known
pub const GENERIC_FAILURE: &str = "Prediction failed";

/// Client error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Malformed local input, caught before any request is sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived carrying an error
    #[error("Service error: {message}")]
    Service {
        status: Option<u16>,
        message: String,
    },

    /// A response arrived without the expected data
    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Where a page should show an error
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSurface {
    /// Next to the control that caused it
    Inline,
    /// As a generic alert
    Alert,
}

/// User-facing error description
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub surface: ErrorSurface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ClientError {
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "VALIDATION_ERROR",
            ClientError::Network(_) => "NETWORK_ERROR",
            ClientError::Service { .. } => "SERVICE_ERROR",
            ClientError::Presentation(_) => "PRESENTATION_ERROR",
            ClientError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    pub fn surface(&self) -> ErrorSurface {
        match self {
            ClientError::Validation(_) | ClientError::Service { .. } | ClientError::Presentation(_) => {
                ErrorSurface::Inline
            }
            ClientError::Network(_) | ClientError::Configuration(_) => ErrorSurface::Alert,
        }
    }

    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(e) => e.user_message(),
            ClientError::Network(msg) if msg.trim().is_empty() => GENERIC_FAILURE.to_string(),
            ClientError::Network(msg) => msg.clone(),
            ClientError::Service { message, .. } => message.clone(),
            ClientError::Presentation(e) => e.to_string(),
            ClientError::Configuration(msg) => msg.clone(),
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        let field = match self {
            ClientError::Validation(e) => Some(e.field().to_string()),
            _ => None,
        };
        ErrorDetail {
            code: self.code().to_string(),
            message: self.user_message(),
            surface: self.surface(),
            field,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(e: config::ConfigError) -> Self {
        ClientError::Configuration(e.to_string())
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
