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

//! Per-invocation command context

use appsvc_common::common::cli_config::CliConfig;
use appsvc_error::AppSvcResult;
use appsvc_error::ToolsError;

use crate::core::admin::Connection;

/// Everything a command needs beyond its own arguments
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    config: CliConfig,
}

impl CliContext {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Instance to operate on: the flag wins over the configured current
    /// instance. Blank values count as absent.
    pub fn resolve_kafka_instance_id(&self, flag: Option<&str>) -> AppSvcResult<String> {
        flag.map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| self.config.current_kafka_instance())
            .map(str::to_string)
            .ok_or_else(|| ToolsError::NoKafkaInstanceSelected.into())
    }

    pub fn connection(&self) -> AppSvcResult<Connection> {
        Connection::from_config(&self.config)
    }
}
