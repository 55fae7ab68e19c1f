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

//! User configuration of the admin CLI
//!
//! Loaded from `<config dir>/appsvc/config.toml` (or an explicit path) and
//! overlaid with `APPSVC_*` environment variables, e.g. `APPSVC_ACCESS_TOKEN`
//! or `APPSVC_KAFKA_INSTANCE_ID`.

use std::path::Path;
use std::path::PathBuf;

use appsvc_error::AppSvcResult;
use serde::Deserialize;
use serde::Serialize;

use crate::utils::parse_config_file::parse_layered_config;

pub const DEFAULT_API_URL: &str = "https://api.openshift.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const ENV_PREFIX: &str = "APPSVC";

const CONFIG_DIR_NAME: &str = "appsvc";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL of the control-plane API
    pub api_url: String,
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Kafka instance used when a command gets no `--instance-id`
    pub kafka_instance_id: Option<String>,
    pub request_timeout_ms: u64,
    pub log_level: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            kafka_instance_id: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: None,
        }
    }
}

impl CliConfig {
    /// `<config dir>/appsvc/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    /// Without any file only defaults and environment variables apply.
    pub fn load(path: Option<&Path>) -> AppSvcResult<Self> {
        match path {
            Some(path) => parse_layered_config(path, true, ENV_PREFIX),
            None => match Self::default_config_path() {
                Some(default_path) => parse_layered_config(&default_path, false, ENV_PREFIX),
                None => Ok(Self::default()),
            },
        }
    }

    /// Configured current instance, ignoring blank values
    pub fn current_kafka_instance(&self) -> Option<&str> {
        self.kafka_instance_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
