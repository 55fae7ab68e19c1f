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

//! CLI output formatters
//!
//! Provides multiple output formats: JSON, Table, YAML

mod json_formatter;
mod table_formatter;
mod yaml_formatter;

use std::fmt;
use std::str::FromStr;

use appsvc_error::AppSvcError;
use appsvc_error::AppSvcResult;
use appsvc_error::ToolsError;
pub use json_formatter::JsonFormatter;
use serde::Serialize;
pub use table_formatter::TableFormatter;
pub use yaml_formatter::YamlFormatter;

/// Tokens accepted by `--output`, besides the empty default
pub const VALID_OUTPUT_FORMATS: &[&str] = &["json", "yaml", "yml"];

/// Output format enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Whether the whole value is dumped instead of rendered as a table
    #[inline]
    pub fn is_structured(self) -> bool {
        !matches!(self, Self::Table)
    }
}

impl FromStr for OutputFormat {
    type Err = AppSvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ToolsError::invalid_flag_value("output", s, VALID_OUTPUT_FORMATS).into()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Formatter trait for output formatting
pub trait Formatter {
    /// Format data to string
    fn format<T: Serialize>(&self, data: &T) -> AppSvcResult<String>;
}

/// Formatter enum that holds concrete implementations
pub enum FormatterType {
    Json(JsonFormatter),
    Table(TableFormatter),
    Yaml(YamlFormatter),
}

impl FormatterType {
    pub fn format<T: Serialize>(&self, data: &T) -> AppSvcResult<String> {
        match self {
            Self::Json(f) => f.format(data),
            Self::Table(f) => f.format(data),
            Self::Yaml(f) => f.format(data),
        }
    }
}

impl From<OutputFormat> for FormatterType {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json(JsonFormatter),
            OutputFormat::Table => Self::Table(TableFormatter),
            OutputFormat::Yaml => Self::Yaml(YamlFormatter),
        }
    }
}

/// Get formatter by format type
pub fn get_formatter(format: OutputFormat) -> FormatterType {
    FormatterType::from(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepted_tokens() {
        assert_eq!("".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        for token in ["xml", "table", "csv", "JSON", "Yaml", " yaml ", "json "] {
            let err = token.parse::<OutputFormat>().unwrap_err();
            assert!(matches!(
                err,
                AppSvcError::Tools(ToolsError::InvalidFlagValue { flag: "output", .. })
            ));
        }
    }

    #[test]
    fn structured_formats() {
        assert!(!OutputFormat::Table.is_structured());
        assert!(OutputFormat::Json.is_structured());
        assert!(OutputFormat::Yaml.is_structured());
    }

    #[test]
    fn formatter_dispatch() {
        let data = serde_json::json!({"id": "cluster-id"});
        let json = get_formatter(OutputFormat::Json).format(&data).unwrap();
        assert!(json.contains("\"id\""));
        let yaml = get_formatter(OutputFormat::Yaml).format(&data).unwrap();
        assert!(yaml.contains("id: cluster-id"));
        let table = get_formatter(OutputFormat::Table).format(&data).unwrap();
        assert_eq!(table, json);
    }
}
