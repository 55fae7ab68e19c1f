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

mod addon_parameters_sub_command;

use appsvc_error::AppSvcResult;
use clap::Subcommand;

use crate::commands::CommandExecute;
use crate::core::context::CliContext;

#[derive(Subcommand)]
pub enum ConnectorCommands {
    #[command(
        name = "addon-parameters",
        about = "Get the add-on parameters of a connector cluster",
        long_about = r#"Get the parameters used to install the connector add-on on a connector
cluster. The result is printed as JSON unless -o yaml is given."#
    )]
    AddonParameters(addon_parameters_sub_command::AddonParametersSubCommand),
}

impl CommandExecute for ConnectorCommands {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        match self {
            ConnectorCommands::AddonParameters(value) => value.execute(ctx).await,
        }
    }
}
