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

use std::fmt::Debug;
use std::path::Path;

use appsvc_error::AppSvcResult;
use config::Config;
use config::Environment;
use config::File;
use serde::de::DeserializeOwned;

/// Parses a configuration file overlaid with `{env_prefix}_*` environment variables.
///
/// When `required` is false a missing file is treated as empty, so defaults
/// and environment variables still apply.
pub fn parse_layered_config<C>(config_file: &Path, required: bool, env_prefix: &str) -> AppSvcResult<C>
where
    C: Debug + DeserializeOwned,
{
    let cfg = Config::builder()
        .add_source(File::from(config_file).required(required))
        .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
        .build()?;
    let config = cfg.try_deserialize::<C>()?;
    tracing::debug!(path = %config_file.display(), "configuration loaded");
    Ok(config)
}
