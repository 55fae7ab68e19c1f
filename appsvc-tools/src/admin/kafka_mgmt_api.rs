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

//! Kafka management API (control plane): instance lookup

use appsvc_error::AppSvcResult;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::admin::http_client::endpoint;
use crate::admin::http_client::parse_base_url;
use crate::admin::http_client::ApiHttpClient;

/// A hosted Kafka instance as described by the control plane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaInstance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_server_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_api_server_url: Option<String>,
}

impl KafkaInstance {
    /// Name for user-facing messages, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[allow(dead_code)]
#[trait_variant::make(KafkaMgmtApi: Send)]
pub trait KafkaMgmtApiLocal: Sync {
    /// `GET /api/kafkas_mgmt/v1/kafkas/{id}`
    async fn get_kafka_by_id(&self, id: &str) -> AppSvcResult<KafkaInstance>;
}

#[derive(Debug, Clone)]
pub struct HttpKafkaMgmtClient {
    http: ApiHttpClient,
    base_url: Url,
}

impl HttpKafkaMgmtClient {
    pub fn new(http: ApiHttpClient, api_url: &str) -> AppSvcResult<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(api_url)?,
        })
    }
}

impl KafkaMgmtApi for HttpKafkaMgmtClient {
    async fn get_kafka_by_id(&self, id: &str) -> AppSvcResult<KafkaInstance> {
        let url = endpoint(&self.base_url, &["api", "kafkas_mgmt", "v1", "kafkas", id])?;
        self.http.get_json(&url).await
    }
}
