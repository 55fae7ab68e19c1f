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

mod connector_commands;
mod kafka_commands;

use appsvc_error::AppSvcResult;
use clap::Args;
use clap::Subcommand;

use crate::cli::formatters::OutputFormat;
use crate::cli::validators::validate_output_format;
use crate::core::context::CliContext;

/// A trait that defines the execution behavior for commands.
///
/// Implemented by every node of the command tree; leaf commands build typed
/// options from their arguments and call into `core`.
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `ctx`: configuration and connection settings of this invocation, passed explicitly rather
    ///   than read from global state.
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()>;
}

#[derive(Debug, Args, Clone, Default)]
pub struct CommonArgs {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FORMAT",
        help = "Format in which to display the result (json, yaml, yml); table when omitted"
    )]
    pub output: Option<String>,
}

impl CommonArgs {
    pub fn output_format(&self) -> AppSvcResult<OutputFormat> {
        validate_output_format(self.output.as_deref())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Kafka instance commands")]
    Kafka(kafka_commands::KafkaCommands),

    #[command(subcommand)]
    #[command(about = "Connector commands")]
    Connector(connector_commands::ConnectorCommands),
}

impl CommandExecute for Commands {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        match self {
            Commands::Kafka(value) => value.execute(ctx).await,
            Commands::Connector(value) => value.execute(ctx).await,
        }
    }
}
