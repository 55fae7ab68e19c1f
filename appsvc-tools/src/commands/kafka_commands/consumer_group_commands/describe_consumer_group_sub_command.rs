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

use appsvc_error::AppSvcResult;
use clap::Parser;
use tracing::info;

use crate::cli::render::render_consumer_group;
use crate::cli::validators::validate_group_id;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::consumer_group::ConsumerGroupService;
use crate::core::context::CliContext;

#[derive(Debug, Clone, Parser)]
pub struct DescribeConsumerGroupSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        long = "instance-id",
        required = false,
        help = "Kafka instance id, defaults to the current instance in the configuration"
    )]
    instance_id: Option<String>,

    #[arg(long = "id", required = true, help = "Consumer group id")]
    id: String,
}

impl CommandExecute for DescribeConsumerGroupSubCommand {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        let format = self.common_args.output_format()?;
        let group_id = validate_group_id(&self.id)?;
        let instance_id = ctx.resolve_kafka_instance_id(self.instance_id.as_deref())?;

        let connection = ctx.connection()?;
        let (admin, instance) = connection.kafka_admin(&instance_id).await?;
        info!(instance = %instance.id, group = group_id, %format, "describe consumer group");

        let group = ConsumerGroupService::describe(&admin, &instance, group_id).await?;
        render_consumer_group(&group, format, &mut std::io::stdout().lock())
    }
}
