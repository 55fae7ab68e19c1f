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

//! JSON formatter

use appsvc_error::AppSvcResult;
use appsvc_error::SerializationError;
use serde::Serialize;

use super::Formatter;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    /// Pretty-printed JSON with a trailing newline
    fn format<T: Serialize>(&self, data: &T) -> AppSvcResult<String> {
        let mut out =
            serde_json::to_string_pretty(data).map_err(|e| SerializationError::encode_failed("JSON", e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}
