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

//! Failing HTTP responses that were not mapped to a semantic error

use thiserror::Error;

/// Maximum number of body bytes kept in an error message
const MAX_BODY_IN_MESSAGE: usize = 512;

/// API response errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}{}", body_suffix(.body))]
    UnexpectedStatus { status: u16, url: String, body: String },
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    if body.len() <= MAX_BODY_IN_MESSAGE {
        return format!(": {body}");
    }
    let mut end = MAX_BODY_IN_MESSAGE;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!(": {}...", &body[..end])
}

impl ApiError {
    /// Create an unexpected status error
    #[inline]
    pub fn unexpected_status(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// HTTP status code of the failed response
    #[inline]
    pub fn status(&self) -> u16 {
        match self {
            Self::UnexpectedStatus { status, .. } => *status,
        }
    }
}
