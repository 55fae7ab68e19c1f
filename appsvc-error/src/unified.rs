// Copyright 2023 The AppSvc CLI Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error system for the appsvc admin CLI
//!
//! Every fallible operation in the workspace returns [`AppSvcResult`]. The
//! top-level [`AppSvcError`] only groups errors by category; the category
//! enums carry the context needed to explain what went wrong.

mod api;
mod network;
mod serialization;
mod tools;

use std::io;

pub use api::ApiError;
pub use network::NetworkError;
pub use serialization::SerializationError;
use thiserror::Error;
pub use tools::ToolsError;

/// Main error type for all appsvc operations
///
/// # Examples
///
/// ```rust
/// use appsvc_error::AppSvcError;
/// use appsvc_error::ToolsError;
///
/// let err = AppSvcError::from(ToolsError::consumer_group_not_found("g1", "my-instance"));
/// assert!(err.is_classified());
/// assert!(err.to_string().contains("g1"));
/// ```
#[derive(Debug, Error)]
pub enum AppSvcError {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// No response was obtained from the remote API
    #[error(transparent)]
    Network(#[from] NetworkError),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// The remote API answered with a failing status that was not classified
    #[error(transparent)]
    Api(#[from] ApiError),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Encoding or decoding of a payload failed
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    // ============================================================================
    // Tools/Admin Errors
    // ============================================================================
    /// Classified admin operation failures and input validation
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration parsing failed
    #[error("Configuration parse error for '{key}': {reason}")]
    ConfigParseFailed { key: &'static str, reason: String },

    // ============================================================================
    // System Errors
    // ============================================================================
    /// IO error from std::io
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// Illegal argument
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// Internal error (should be rare)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias used across the workspace
pub type AppSvcResult<T> = std::result::Result<T, AppSvcError>;

// ============================================================================
// Convenience Constructors
// ============================================================================

impl AppSvcError {
    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Tools(ToolsError::validation_error(field, reason))
    }

    /// Create an illegal argument error
    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// Create an internal error
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status of an unclassified API failure, if this is one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status()),
            _ => None,
        }
    }

    /// Whether this error was produced by HTTP status classification
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Tools(err) if err.is_classified())
    }
}

// ============================================================================
// Error Conversion Implementations
// ============================================================================

#[cfg(feature = "with_config")]
impl From<config::ConfigError> for AppSvcError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigParseFailed {
            key: "unknown",
            reason: e.to_string(),
        }
    }
}
