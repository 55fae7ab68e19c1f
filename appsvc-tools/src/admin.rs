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

//! Remote API layer
//!
//! Thin typed clients over the REST endpoints the CLI talks to. Each API is
//! declared as a trait so the core services can be exercised without a
//! network.

pub mod connector_mgmt_api;
pub mod http_client;
pub mod kafka_admin_api;
pub mod kafka_mgmt_api;
