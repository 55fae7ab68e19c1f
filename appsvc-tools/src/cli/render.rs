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

//! Consumer group report rendering
//!
//! Structured formats dump the snapshot unchanged. The table form prints a
//! two line summary followed by one row per partition assignment, sorted by
//! partition.

use std::io::Write;

use appsvc_error::AppSvcResult;
use tabled::Tabled;

use crate::cli::formatters::get_formatter;
use crate::cli::formatters::OutputFormat;
use crate::cli::formatters::TableFormatter;
use crate::core::consumer_group::Consumer;
use crate::core::consumer_group::ConsumerGroup;
use crate::ui::output::bold;
use crate::ui::output::italic;

pub const ACTIVE_MEMBERS_LABEL: &str = "Active members:";
pub const PARTITIONS_WITH_LAG_LABEL: &str = "Partitions with lag:";
pub const UNASSIGNED_PARTITIONS_LABEL: &str = "Unassigned partitions:";
pub const STATE_LABEL: &str = "State:";

/// Shown instead of an empty member id
pub const UNASSIGNED_PLACEHOLDER: &str = "unassigned";

/// Table projection of a [`Consumer`]. Column headers are part of the
/// output contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ConsumerRow {
    #[tabled(rename = "Consumer ID")]
    pub consumer_id: String,
    #[tabled(rename = "Partition")]
    pub partition: i32,
    #[tabled(rename = "Topic")]
    pub topic: String,
    #[tabled(rename = "Log end offset")]
    pub log_end_offset: i64,
    #[tabled(rename = "Current offset")]
    pub current_offset: i64,
    #[tabled(rename = "Offset lag")]
    pub offset_lag: i64,
}

impl From<&Consumer> for ConsumerRow {
    fn from(consumer: &Consumer) -> Self {
        let consumer_id = match consumer.member_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => italic(UNASSIGNED_PLACEHOLDER),
        };
        Self {
            consumer_id,
            partition: consumer.partition,
            topic: consumer.topic.clone(),
            log_end_offset: consumer.log_end_offset,
            current_offset: consumer.offset,
            offset_lag: consumer.lag,
        }
    }
}

/// Map records to rows, stable-sorted ascending by partition.
///
/// Rows sharing a partition number keep their fetch order.
pub fn map_consumers_to_rows(consumers: &[Consumer]) -> Vec<ConsumerRow> {
    let mut rows: Vec<ConsumerRow> = consumers.iter().map(ConsumerRow::from).collect();
    rows.sort_by_key(|row| row.partition);
    rows
}

/// Write the report for `group` to `out`.
///
/// The output is built in memory first; an encoding failure writes nothing.
pub fn render_consumer_group<W: Write>(group: &ConsumerGroup, format: OutputFormat, out: &mut W) -> AppSvcResult<()> {
    let rendered = if format.is_structured() {
        get_formatter(format).format(group)?
    } else {
        format_consumer_group_table(group)
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn format_consumer_group_table(group: &ConsumerGroup) -> String {
    let metrics = group.metrics_or_default();
    let rows = map_consumers_to_rows(&group.consumers);

    let mut report = String::from("\n");
    report.push_str(&format!(
        "{} {} \t {} {} \t\n",
        bold(ACTIVE_MEMBERS_LABEL),
        metrics.active_consumers,
        bold(PARTITIONS_WITH_LAG_LABEL),
        metrics.lagging_partitions
    ));
    report.push_str(&format!(
        "{} {} {} {}\n",
        bold(UNASSIGNED_PARTITIONS_LABEL),
        metrics.unassigned_partitions,
        bold(STATE_LABEL),
        group.state
    ));
    report.push('\n');
    report.push_str(&TableFormatter::format_tabled(&rows));
    report.push('\n');
    report
}
