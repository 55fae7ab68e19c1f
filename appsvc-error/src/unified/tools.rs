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

//! Tools and admin operation specific errors
//!
//! Holds the semantic errors produced when a failing admin API response is
//! classified by HTTP status, and the validation errors raised by the CLI
//! layer before any request is made.

use thiserror::Error;

/// Tools-specific errors for admin operations
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Consumer Group Errors (classified HTTP responses)
    // ============================================================================
    /// HTTP 404 on a consumer group request
    #[error("Consumer group '{group}' not found in Kafka instance '{instance}'")]
    ConsumerGroupNotFound { group: String, instance: String },

    /// HTTP 401 on a consumer group request
    #[error("You are unauthorized to {operation} consumer groups")]
    Unauthorized { operation: String },

    /// HTTP 403 on a consumer group request
    #[error("You are forbidden to {operation} consumer groups")]
    Forbidden { operation: String },

    /// HTTP 500 on a consumer group request
    #[error("Internal server error while processing the consumer group request")]
    InternalServerError,

    /// HTTP 503 on a consumer group request
    #[error("Unable to connect to Kafka instance '{instance}'")]
    ServiceUnavailable { instance: String },

    // ============================================================================
    // Context Errors
    // ============================================================================
    /// No instance id given and none configured as current
    #[error("No Kafka instance selected: pass --instance-id or set 'kafka_instance_id' in the configuration")]
    NoKafkaInstanceSelected,

    /// The instance exists but exposes no admin API endpoint yet
    #[error("Kafka instance '{instance}' is not ready yet (status: {status})")]
    InstanceNotReady { instance: String, status: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Input validation failed
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    /// Flag value outside of the accepted set
    #[error("Invalid value '{value}' for --{flag}, valid options are: {}", .allowed.join(", "))]
    InvalidFlagValue {
        flag: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create a consumer group not found error
    #[inline]
    pub fn consumer_group_not_found(group: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::ConsumerGroupNotFound {
            group: group.into(),
            instance: instance.into(),
        }
    }

    /// Create an unauthorized error
    #[inline]
    pub fn unauthorized(operation: impl Into<String>) -> Self {
        Self::Unauthorized {
            operation: operation.into(),
        }
    }

    /// Create a forbidden error
    #[inline]
    pub fn forbidden(operation: impl Into<String>) -> Self {
        Self::Forbidden {
            operation: operation.into(),
        }
    }

    /// Create a service unavailable error
    #[inline]
    pub fn service_unavailable(instance: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            instance: instance.into(),
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid flag value error
    #[inline]
    pub fn invalid_flag_value(flag: &'static str, value: impl Into<String>, allowed: &[&'static str]) -> Self {
        Self::InvalidFlagValue {
            flag,
            value: value.into(),
            allowed: allowed.to_vec(),
        }
    }

    /// Whether the error came from HTTP status classification
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Self::ConsumerGroupNotFound { .. }
                | Self::Unauthorized { .. }
                | Self::Forbidden { .. }
                | Self::InternalServerError
                | Self::ServiceUnavailable { .. }
        )
    }
}
