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

//! API connection builder
//!
//! - [`ConnectionBuilder`] - Fluent builder for the authenticated HTTP client
//! - [`Connection`] - Factory for the control-plane and per-instance clients

use appsvc_common::common::cli_config::CliConfig;
use appsvc_common::common::cli_config::DEFAULT_API_URL;
use appsvc_common::common::cli_config::DEFAULT_REQUEST_TIMEOUT_MS;
use appsvc_error::AppSvcResult;
use appsvc_error::ToolsError;
use tracing::debug;

use crate::admin::connector_mgmt_api::HttpConnectorMgmtClient;
use crate::admin::http_client::ApiHttpClient;
use crate::admin::kafka_admin_api::HttpKafkaAdminClient;
use crate::admin::kafka_mgmt_api::HttpKafkaMgmtClient;
use crate::admin::kafka_mgmt_api::KafkaInstance;
use crate::admin::kafka_mgmt_api::KafkaMgmtApi;

/// Builder for creating a [`Connection`]
///
/// # Examples
///
/// ```rust,ignore
/// use appsvc_tools::core::admin::ConnectionBuilder;
///
/// let connection = ConnectionBuilder::new()
///     .api_url("https://api.openshift.com")
///     .access_token(token)
///     .timeout_millis(5000)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectionBuilder {
    api_url: Option<String>,
    access_token: Option<String>,
    timeout_millis: Option<u64>,
}

impl ConnectionBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from the loaded configuration
    pub fn from_config(config: &CliConfig) -> Self {
        let builder = Self::new()
            .api_url(config.api_url.clone())
            .timeout_millis(config.request_timeout_ms);
        match &config.access_token {
            Some(token) => builder.access_token(token.clone()),
            None => builder,
        }
    }

    /// Set the control-plane base URL
    ///
    /// If not set, defaults to [`DEFAULT_API_URL`]
    #[inline]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    #[inline]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set request timeout in milliseconds
    #[inline]
    pub fn timeout_millis(mut self, timeout: u64) -> Self {
        self.timeout_millis = Some(timeout);
        self
    }

    /// Build the connection
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> AppSvcResult<Connection> {
        let http = ApiHttpClient::new(
            self.access_token,
            self.timeout_millis.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )?;
        Ok(Connection {
            http,
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// Authenticated connection to the hosted services
#[derive(Debug, Clone)]
pub struct Connection {
    http: ApiHttpClient,
    api_url: String,
}

impl Connection {
    #[inline]
    pub fn from_config(config: &CliConfig) -> AppSvcResult<Self> {
        ConnectionBuilder::from_config(config).build()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Control-plane client for Kafka instances
    pub fn kafka_mgmt(&self) -> AppSvcResult<HttpKafkaMgmtClient> {
        HttpKafkaMgmtClient::new(self.http.clone(), &self.api_url)
    }

    /// Control-plane client for connector clusters
    pub fn connector_mgmt(&self) -> AppSvcResult<HttpConnectorMgmtClient> {
        HttpConnectorMgmtClient::new(self.http.clone(), &self.api_url)
    }

    /// Look up the instance and build a client for its admin API
    ///
    /// # Errors
    ///
    /// [`ToolsError::InstanceNotReady`] when the instance has no admin
    /// endpoint yet; lookup failures are returned as-is.
    pub async fn kafka_admin(&self, instance_id: &str) -> AppSvcResult<(HttpKafkaAdminClient, KafkaInstance)> {
        let instance = self.kafka_mgmt()?.get_kafka_by_id(instance_id).await?;
        let admin_url = match instance.admin_api_server_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                return Err(ToolsError::InstanceNotReady {
                    instance: instance.display_name().to_string(),
                    status: instance.status.clone().unwrap_or_else(|| "unknown".to_string()),
                }
                .into())
            }
        };
        debug!(instance = %instance.id, %admin_url, "resolved admin API endpoint");
        let admin = HttpKafkaAdminClient::new(self.http.clone(), &admin_url)?;
        Ok((admin, instance))
    }
}
