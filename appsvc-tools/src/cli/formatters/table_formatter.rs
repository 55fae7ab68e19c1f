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

//! Table formatter using tabled

use appsvc_error::AppSvcResult;
use serde::Serialize;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use super::Formatter;
use super::JsonFormatter;

pub struct TableFormatter;

impl Formatter for TableFormatter {
    /// Arbitrary values have no table shape; they are dumped as JSON
    fn format<T: Serialize>(&self, data: &T) -> AppSvcResult<String> {
        JsonFormatter.format(data)
    }
}

impl TableFormatter {
    /// Format rows that implement [`Tabled`], headers first, no borders
    pub fn format_tabled<T: Tabled>(data: &[T]) -> String {
        let mut table = Table::new(data);
        table.with(Style::blank());
        table.to_string()
    }
}
