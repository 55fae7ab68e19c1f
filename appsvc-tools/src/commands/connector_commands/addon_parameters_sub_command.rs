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

use appsvc_error::AppSvcResult;
use clap::Parser;

use crate::cli::formatters::get_formatter;
use crate::cli::formatters::OutputFormat;
use crate::cli::validators::validate_connector_cluster_id;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::connector::ConnectorService;
use crate::core::context::CliContext;

#[derive(Debug, Clone, Parser)]
pub struct AddonParametersSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(long = "id", required = true, help = "Connector cluster id")]
    id: String,
}

impl AddonParametersSubCommand {
    /// No table form; the default is a JSON dump
    fn dump_format(&self) -> AppSvcResult<OutputFormat> {
        let format = self.common_args.output_format()?;
        Ok(if format.is_structured() { format } else { OutputFormat::Json })
    }
}

impl CommandExecute for AddonParametersSubCommand {
    async fn execute(&self, ctx: &CliContext) -> AppSvcResult<()> {
        let format = self.dump_format()?;
        let cluster_id = validate_connector_cluster_id(&self.id)?;

        let api = ctx.connection()?.connector_mgmt()?;
        let parameters = ConnectorService::addon_parameters(&api, cluster_id).await?;

        let rendered = get_formatter(format).format(&parameters)?;
        let mut out = std::io::stdout().lock();
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
