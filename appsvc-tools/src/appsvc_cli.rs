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

use std::io::Write;
use std::path::PathBuf;

use appsvc_common::common::cli_config::CliConfig;
use appsvc_common::log::init_logger_with_level;
use appsvc_common::log::Level;
use appsvc_error::AppSvcResult;
use appsvc_error::ToolsError;
use clap::ArgAction;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use tracing::debug;

use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::core::context::CliContext;

const BIN_NAME: &str = "appsvc-admin-cli";
const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Admin commands for hosted Kafka instances and connectors", long_about = None, version)]
pub struct AppSvcCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Configuration file, defaults to <config dir>/appsvc/config.toml"
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl AppSvcCli {
    pub async fn handle(&self) -> AppSvcResult<()> {
        if let Some(shell) = &self.completion {
            return generate_completion(shell, &mut std::io::stdout());
        }

        let Some(commands) = &self.commands else {
            return Err(ToolsError::validation_error(
                "command",
                "No command specified. Use --help for usage information",
            )
            .into());
        };

        let config = CliConfig::load(self.config.as_deref())?;
        init_logger_with_level(self.log_level(&config));
        debug!(api_url = %config.api_url, "configuration loaded");

        commands.execute(&CliContext::new(config)).await
    }

    /// `-v` wins, then `RUST_LOG`, then the configured level; WARN otherwise
    fn log_level(&self, config: &CliConfig) -> Level {
        if self.verbose > 0 {
            return Level::from_verbosity(self.verbose);
        }
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
            .or_else(|| config.log_level.as_deref().and_then(|value| value.parse::<Level>().ok()))
            .unwrap_or(Level::WARN)
    }
}

/// Write the completion script for `shell` to `out`
pub fn generate_completion<W: Write>(shell: &str, out: &mut W) -> AppSvcResult<()> {
    let mut cmd = AppSvcCli::command();
    match shell.to_lowercase().as_str() {
        "bash" => generate(Bash, &mut cmd, BIN_NAME, out),
        "zsh" => generate(Zsh, &mut cmd, BIN_NAME, out),
        "fish" => generate(Fish, &mut cmd, BIN_NAME, out),
        _ => {
            return Err(ToolsError::invalid_flag_value("generate-completion", shell, SUPPORTED_SHELLS).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        AppSvcCli::command().debug_assert();
    }

    #[test]
    fn parse_describe_with_global_flags() {
        let cli = AppSvcCli::try_parse_from([
            BIN_NAME,
            "kafka",
            "consumer-group",
            "describe",
            "--id",
            "orders",
            "-vv",
            "--config",
            "/tmp/appsvc.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/appsvc.toml")));
        assert!(matches!(cli.commands, Some(Commands::Kafka(_))));
    }

    #[test]
    fn parse_addon_parameters() {
        let cli = AppSvcCli::try_parse_from([BIN_NAME, "connector", "addon-parameters", "--id", "cl-1"]).unwrap();
        assert!(matches!(cli.commands, Some(Commands::Connector(_))));
    }

    #[test]
    fn verbosity_overrides_config_level() {
        let cli = AppSvcCli::try_parse_from([BIN_NAME, "-vvv"]).unwrap();
        let config = CliConfig {
            log_level: Some("error".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(cli.log_level(&config), Level::TRACE);
    }

    #[test]
    fn completion_for_supported_shells() {
        for shell in ["bash", "ZSH", "fish"] {
            let mut out = Vec::new();
            generate_completion(shell, &mut out).unwrap();
            assert!(String::from_utf8(out).unwrap().contains(BIN_NAME));
        }
    }

    #[test]
    fn completion_for_unknown_shell_is_an_error() {
        let mut out = Vec::new();
        let err = generate_completion("powershell-ish", &mut out).unwrap_err();
        assert!(err.to_string().contains("bash, zsh, fish"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn no_command_is_an_error() {
        let cli = AppSvcCli::try_parse_from([BIN_NAME]).unwrap();
        assert!(cli.handle().await.is_err());
    }
}
