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

//! Describe and render a consumer group against an in-memory admin API

use appsvc_error::ApiError;
use appsvc_error::AppSvcError;
use appsvc_error::AppSvcResult;
use appsvc_error::NetworkError;
use appsvc_error::ToolsError;
use appsvc_tools::admin::kafka_admin_api::KafkaAdminApi;
use appsvc_tools::admin::kafka_mgmt_api::KafkaInstance;
use appsvc_tools::cli::formatters::OutputFormat;
use appsvc_tools::cli::render::render_consumer_group;
use appsvc_tools::cli::render::UNASSIGNED_PLACEHOLDER;
use appsvc_tools::core::consumer_group::Consumer;
use appsvc_tools::core::consumer_group::ConsumerGroup;
use appsvc_tools::core::consumer_group::ConsumerGroupMetrics;
use appsvc_tools::core::consumer_group::ConsumerGroupService;
use appsvc_tools::ui::output::italic;

enum Reply {
    Group(ConsumerGroup),
    Status(u16),
    Refused,
}

struct InMemoryAdmin(Reply);

impl KafkaAdminApi for InMemoryAdmin {
    async fn get_consumer_group_by_id(&self, group_id: &str) -> AppSvcResult<ConsumerGroup> {
        let url = format!("https://admin.example.com/api/v1/groups/{group_id}");
        match &self.0 {
            Reply::Group(group) => Ok(group.clone()),
            Reply::Status(status) => Err(ApiError::unexpected_status(*status, url, "").into()),
            Reply::Refused => Err(NetworkError::connection_failed(url, "connection refused").into()),
        }
    }
}

fn my_instance() -> KafkaInstance {
    KafkaInstance {
        id: "c9abc".to_string(),
        name: "my-instance".to_string(),
        ..KafkaInstance::default()
    }
}

fn record(member: &str, partition: i32, log_end: i64, offset: i64, lag: i64) -> Consumer {
    Consumer {
        group_id: "g1".to_string(),
        topic: "t1".to_string(),
        partition,
        offset,
        log_end_offset: log_end,
        lag,
        member_id: Some(member.to_string()),
    }
}

fn scenario_group() -> ConsumerGroup {
    ConsumerGroup {
        group_id: "g1".to_string(),
        state: "Stable".to_string(),
        metrics: Some(ConsumerGroupMetrics {
            active_consumers: 2,
            lagging_partitions: 1,
            unassigned_partitions: 0,
        }),
        consumers: vec![record("", 1, 100, 90, 10), record("c1", 0, 50, 50, 0)],
    }
}

async fn describe(reply: Reply) -> AppSvcResult<ConsumerGroup> {
    ConsumerGroupService::describe(&InMemoryAdmin(reply), &my_instance(), "g1").await
}

fn render(group: &ConsumerGroup, format: OutputFormat) -> String {
    let mut out = Vec::new();
    render_consumer_group(group, format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn not_found_references_group_and_instance() {
    let err = describe(Reply::Status(404)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Consumer group 'g1' not found in Kafka instance 'my-instance'"
    );
}

#[tokio::test]
async fn every_documented_status_is_classified() {
    for status in [404u16, 401, 403, 500, 503] {
        let err = describe(Reply::Status(status)).await.unwrap_err();
        assert!(err.is_classified(), "status {status} was not classified");
        assert_eq!(err.http_status(), None);
    }
}

#[tokio::test]
async fn other_failures_are_returned_unchanged() {
    for status in [400u16, 402, 405, 422, 501, 502] {
        let err = describe(Reply::Status(status)).await.unwrap_err();
        assert!(matches!(&err, AppSvcError::Api(api) if api.status() == status));
    }

    let err = describe(Reply::Refused).await.unwrap_err();
    assert!(matches!(err, AppSvcError::Network(NetworkError::ConnectionFailed { .. })));
    assert!(!matches!(err, AppSvcError::Tools(_)));
}

#[tokio::test]
async fn table_scenario() {
    let group = describe(Reply::Group(scenario_group())).await.unwrap();
    let output = render(&group, OutputFormat::Table);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[1].contains("Active members:"));
    assert!(lines[1].contains(" 2 "));
    assert!(lines[1].contains("Partitions with lag:"));
    assert!(lines[1].contains(" 1 "));
    assert!(lines[2].contains("Unassigned partitions:"));
    assert!(lines[2].contains(" 0 "));
    assert!(lines[2].ends_with("Stable"));

    assert!(lines[4].contains("Consumer ID"));
    assert!(lines[4].contains("Offset lag"));

    let first: Vec<&str> = lines[5].split_whitespace().collect();
    assert_eq!(first, ["c1", "0", "t1", "50", "50", "0"]);

    let second = lines[6];
    assert!(second.contains(&italic(UNASSIGNED_PLACEHOLDER)));
    assert!(second.trim_end().ends_with("10"));

    // the fetched snapshot itself is left as it was
    assert_eq!(group, scenario_group());
}

#[tokio::test]
async fn json_scenario_is_the_plain_snapshot() {
    let group = describe(Reply::Group(scenario_group())).await.unwrap();
    let output = render(&group, OutputFormat::Json);

    assert_eq!(output, format!("{}\n", serde_json::to_string_pretty(&scenario_group()).unwrap()));
    assert!(output.contains("\"memberId\": \"\""));
    assert!(!output.contains(&format!("\"memberId\": \"{UNASSIGNED_PLACEHOLDER}\"")));
    assert!(!output.contains("Consumer ID"));

    let decoded: ConsumerGroup = serde_json::from_str(&output).unwrap();
    assert_eq!(decoded.consumers[0].partition, 1);
    assert_eq!(decoded.consumers[0].member_id.as_deref(), Some(""));
}

#[tokio::test]
async fn yaml_scenario_round_trips() {
    let group = describe(Reply::Group(scenario_group())).await.unwrap();
    let output = render(&group, OutputFormat::Yaml);
    let decoded: ConsumerGroup = serde_yaml::from_str(&output).unwrap();
    assert_eq!(decoded, group);
}

#[test]
fn unknown_output_token_is_rejected() {
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, AppSvcError::Tools(ToolsError::InvalidFlagValue { .. })));
}
