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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use appsvc_error::AppSvcError;
use appsvc_error::AppSvcResult;

use crate::cli::formatters::OutputFormat;

/// Validate the `--output` flag; unset means table
pub fn validate_output_format(output: Option<&str>) -> AppSvcResult<OutputFormat> {
    output.unwrap_or_default().parse()
}

/// Validate a consumer group id.
///
/// The id is opaque to the CLI; only presence is checked.
pub fn validate_group_id(group_id: &str) -> AppSvcResult<&str> {
    require_non_blank("id", group_id, "Consumer group id cannot be empty")
}

/// Validate a connector cluster id
pub fn validate_connector_cluster_id(cluster_id: &str) -> AppSvcResult<&str> {
    require_non_blank("id", cluster_id, "Connector cluster id cannot be empty")
}

/// Blankness is judged on the trimmed value; the value itself passes through unchanged.
fn require_non_blank<'a>(field: &str, value: &'a str, reason: &str) -> AppSvcResult<&'a str> {
    if value.trim().is_empty() {
        return Err(AppSvcError::validation_error(field, reason));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use appsvc_error::ToolsError;

    use super::*;

    #[test]
    fn test_validate_output_format() {
        assert_eq!(validate_output_format(None).unwrap(), OutputFormat::Table);
        assert_eq!(validate_output_format(Some("")).unwrap(), OutputFormat::Table);
        assert_eq!(validate_output_format(Some("json")).unwrap(), OutputFormat::Json);
        assert_eq!(validate_output_format(Some("yml")).unwrap(), OutputFormat::Yaml);

        let err = validate_output_format(Some("xml")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for --output, valid options are: json, yaml, yml"
        );
    }

    #[test]
    fn test_validate_group_id() {
        assert_eq!(validate_group_id("orders").unwrap(), "orders");
        // Anything non-blank is accepted as-is, surrounding whitespace included
        assert_eq!(validate_group_id(" orders ").unwrap(), " orders ");
        assert_eq!(validate_group_id("a/b c?").unwrap(), "a/b c?");
        assert_eq!(validate_group_id("\torders\n").unwrap(), "\torders\n");

        let err = validate_group_id("   ").unwrap_err();
        assert!(matches!(
            err,
            AppSvcError::Tools(ToolsError::ValidationError { ref field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_validate_connector_cluster_id() {
        assert_eq!(validate_connector_cluster_id("cl-1").unwrap(), "cl-1");
        assert_eq!(validate_connector_cluster_id(" cl-1").unwrap(), " cl-1");
        assert!(validate_connector_cluster_id(" ").is_err());
    }
}
