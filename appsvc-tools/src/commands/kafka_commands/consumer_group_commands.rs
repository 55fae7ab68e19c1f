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

mod describe_consumer_group_sub_command;

use appsvc_error::AppSvcResult;
use clap::Subcommand;

use crate::commands::CommandExecute;
use crate::core::context::CliContext;

#[derive(Subcommand)]
pub enum ConsumerGroupCommands {
    #[command(
        name = "describe",
        about = "View consumer group details",
        long_about = r#"View the state, metrics and partition assignments of a consumer group.
Prints a summary and a table sorted by partition, or the raw group with -o json|yaml."#
    )]
    Describe(describe_consumer_group_sub_command::DescribeConsumerGroupSubCommand),
}

impl CommandExecute for ConsumerGroupCommands {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        match self {
            ConsumerGroupCommands::Describe(value) => value.execute(ctx).await,
        }
    }
}
