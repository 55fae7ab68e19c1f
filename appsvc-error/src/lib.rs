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

//! # AppSvc Error Handling
//!
//! Unified error types shared by every crate of the appsvc admin CLI.
//!
//! Errors are grouped by category:
//! - [`NetworkError`]: no HTTP response was obtained (connect, timeout, TLS, ...)
//! - [`ApiError`]: a response was obtained but signaled failure and was not classified
//! - [`SerializationError`]: encoding or decoding of JSON/YAML payloads failed
//! - [`ToolsError`]: classified admin-operation failures and input validation
//!
//! ```rust
//! use appsvc_error::AppSvcError;
//! use appsvc_error::AppSvcResult;
//!
//! fn check_group(group_id: &str) -> AppSvcResult<()> {
//!     if group_id.is_empty() {
//!         return Err(AppSvcError::validation_error("id", "consumer group ID is required"));
//!     }
//!     Ok(())
//! }
//! # check_group("my-group").unwrap();
//! ```

pub mod unified;

pub use unified::ApiError;
pub use unified::AppSvcError;
pub use unified::AppSvcResult;
pub use unified::NetworkError;
pub use unified::SerializationError;
pub use unified::ToolsError;
