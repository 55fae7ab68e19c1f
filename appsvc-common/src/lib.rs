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

//! Shared building blocks for the appsvc admin CLI
//!
//! - [`log`]: tracing subscriber bootstrap
//! - [`common::cli_config`]: user configuration (API endpoint, token, current instance)
//! - [`utils::parse_config_file::parse_layered_config`]: layered file + environment configuration loading

pub mod common;
pub mod log;
pub mod utils;
