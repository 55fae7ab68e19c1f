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

//! Shared HTTP plumbing for the REST clients

use std::time::Duration;

use appsvc_error::ApiError;
use appsvc_error::AppSvcError;
use appsvc_error::AppSvcResult;
use appsvc_error::NetworkError;
use appsvc_error::SerializationError;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("appsvc-admin-cli/", env!("CARGO_PKG_VERSION"));

/// Authenticated HTTP client shared by all API clients.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiHttpClient {
    client: reqwest::Client,
    access_token: Option<String>,
    timeout_millis: u64,
}

impl ApiHttpClient {
    pub fn new(access_token: Option<String>, timeout_millis: u64) -> AppSvcResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(timeout_millis))
            .build()
            .map_err(|e| AppSvcError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            access_token,
            timeout_millis,
        })
    }

    /// Issue a `GET` and decode a JSON body.
    ///
    /// - no response at all maps to [`NetworkError`]
    /// - a non-2xx response maps to [`ApiError::UnexpectedStatus`], even when
    ///   its body cannot be read
    /// - an undecodable 2xx body maps to [`SerializationError`]
    ///
    /// The response is consumed on every path, which releases its connection.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> AppSvcResult<T> {
        let mut request = self.client.get(url.clone()).header(ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        debug!(%url, "GET");
        let response = request.send().await.map_err(|e| self.transport_error(url, e))?;
        let status = response.status();
        let body = response.bytes().await;

        if !status.is_success() {
            // a status line arrived, so a broken body does not hide it
            let body = match body {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    debug!(%url, status = status.as_u16(), error = %e, "failed to read error body");
                    String::new()
                }
            };
            return Err(ApiError::unexpected_status(status.as_u16(), url.as_str(), body).into());
        }

        let body = body.map_err(|e| NetworkError::receive_failed(url.as_str(), e.to_string()))?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        serde_json::from_slice(&body)
            .map_err(|e| SerializationError::decode_failed("JSON", format!("{url}: {e}")).into())
    }

    fn transport_error(&self, url: &Url, e: reqwest::Error) -> AppSvcError {
        let addr = url.as_str();
        if e.is_timeout() {
            NetworkError::request_timeout(addr, self.timeout_millis).into()
        } else if e.is_connect() {
            NetworkError::connection_failed(addr, e.to_string()).into()
        } else {
            NetworkError::send_failed(addr, e.to_string()).into()
        }
    }
}

/// Parse a base URL from configuration or an API payload
pub fn parse_base_url(raw: &str) -> AppSvcResult<Url> {
    Url::parse(raw.trim()).map_err(|_| NetworkError::invalid_address(raw).into())
}

/// Append path segments to `base`, percent-encoding each one.
///
/// Identifiers supplied by the user are opaque, so they always go through
/// segment encoding rather than string concatenation.
pub fn endpoint(base: &Url, segments: &[&str]) -> AppSvcResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| NetworkError::invalid_address(base.as_str()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
