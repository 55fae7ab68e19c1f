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

//! Connector cluster operations

use appsvc_error::AppSvcResult;
use tracing::debug;

use crate::admin::connector_mgmt_api::AddonParameter;
use crate::admin::connector_mgmt_api::ConnectorMgmtApi;

pub struct ConnectorService;

impl ConnectorService {
    /// Fetch the add-on parameters of a connector cluster
    pub async fn addon_parameters<A: ConnectorMgmtApi>(api: &A, cluster_id: &str) -> AppSvcResult<Vec<AddonParameter>> {
        debug!(cluster = cluster_id, "fetching connector addon parameters");
        api.get_connector_cluster_addon_parameters(cluster_id).await
    }
}
