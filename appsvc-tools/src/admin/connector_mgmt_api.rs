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

//! Connector management API: connector cluster add-on parameters

use appsvc_error::AppSvcResult;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::admin::http_client::endpoint;
use crate::admin::http_client::parse_base_url;
use crate::admin::http_client::ApiHttpClient;

/// One parameter of the connector add-on installation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonParameter {
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[allow(dead_code)]
#[trait_variant::make(ConnectorMgmtApi: Send)]
pub trait ConnectorMgmtApiLocal: Sync {
    /// `GET /api/connector_mgmt/v1/kafka_connector_clusters/{id}/addon_parameters`
    async fn get_connector_cluster_addon_parameters(&self, cluster_id: &str) -> AppSvcResult<Vec<AddonParameter>>;
}

#[derive(Debug, Clone)]
pub struct HttpConnectorMgmtClient {
    http: ApiHttpClient,
    base_url: Url,
}

impl HttpConnectorMgmtClient {
    pub fn new(http: ApiHttpClient, api_url: &str) -> AppSvcResult<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(api_url)?,
        })
    }
}

impl ConnectorMgmtApi for HttpConnectorMgmtClient {
    async fn get_connector_cluster_addon_parameters(&self, cluster_id: &str) -> AppSvcResult<Vec<AddonParameter>> {
        let url = endpoint(
            &self.base_url,
            &[
                "api",
                "connector_mgmt",
                "v1",
                "kafka_connector_clusters",
                cluster_id,
                "addon_parameters",
            ],
        )?;
        self.http.get_json(&url).await
    }
}
