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

mod consumer_group_commands;

use appsvc_error::AppSvcResult;
use clap::Subcommand;

use crate::commands::CommandExecute;
use crate::core::context::CliContext;

#[derive(Subcommand)]
pub enum KafkaCommands {
    #[command(subcommand)]
    #[command(
        name = "consumer-group",
        about = "Manage consumer groups of a Kafka instance",
        long_about = r#"View the consumer groups of a Kafka instance. The instance is taken from
--instance-id or, when omitted, from the configured current instance."#
    )]
    ConsumerGroup(consumer_group_commands::ConsumerGroupCommands),
}

impl CommandExecute for KafkaCommands {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        match self {
            KafkaCommands::ConsumerGroup(value) => value.execute(ctx).await,
        }
    }
}
