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

//! Kafka instance admin API (served by each instance)

use appsvc_error::AppSvcResult;
use url::Url;

use crate::admin::http_client::endpoint;
use crate::admin::http_client::parse_base_url;
use crate::admin::http_client::ApiHttpClient;
use crate::core::consumer_group::ConsumerGroup;

#[allow(dead_code)]
#[trait_variant::make(KafkaAdminApi: Send)]
pub trait KafkaAdminApiLocal: Sync {
    /// `GET /api/v1/groups/{group_id}`
    async fn get_consumer_group_by_id(&self, group_id: &str) -> AppSvcResult<ConsumerGroup>;
}

/// REST client for one instance's admin endpoint
#[derive(Debug, Clone)]
pub struct HttpKafkaAdminClient {
    http: ApiHttpClient,
    base_url: Url,
}

impl HttpKafkaAdminClient {
    pub fn new(http: ApiHttpClient, admin_api_server_url: &str) -> AppSvcResult<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(admin_api_server_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl KafkaAdminApi for HttpKafkaAdminClient {
    async fn get_consumer_group_by_id(&self, group_id: &str) -> AppSvcResult<ConsumerGroup> {
        let url = endpoint(&self.base_url, &["api", "v1", "groups", group_id])?;
        self.http.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_admin_url() {
        let http = ApiHttpClient::new(None, 1000).unwrap();
        assert!(HttpKafkaAdminClient::new(http, "::not-a-url::").is_err());
    }

    #[test]
    fn new_keeps_admin_url() {
        let http = ApiHttpClient::new(None, 1000).unwrap();
        let client = HttpKafkaAdminClient::new(http, "https://admin-server-my-instance.example.com").unwrap();
        assert_eq!(client.base_url().host_str(), Some("admin-server-my-instance.example.com"));
    }
}
