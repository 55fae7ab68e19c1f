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

//! Consumer group types as returned by the Kafka instance admin API

use serde::Deserialize;
use serde::Serialize;

/// State of a consumer group at query time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroup {
    #[serde(default)]
    pub group_id: String,
    /// Group state as reported by the broker, e.g. `Stable` or `Empty`
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConsumerGroupMetrics>,
    #[serde(default)]
    pub consumers: Vec<Consumer>,
}

impl ConsumerGroup {
    /// Metrics, reading an absent block as all zeros
    pub fn metrics_or_default(&self) -> ConsumerGroupMetrics {
        self.metrics.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerGroupMetrics {
    pub active_consumers: i32,
    pub lagging_partitions: i32,
    pub unassigned_partitions: i32,
}

/// One partition assignment of a consumer group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    #[serde(default)]
    pub group_id: String,
    pub topic: String,
    pub partition: i32,
    /// Committed offset
    pub offset: i64,
    #[serde(default)]
    pub log_end_offset: i64,
    pub lag: i64,
    /// Absent or empty when the partition is not assigned to any member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl Consumer {
    pub fn is_unassigned(&self) -> bool {
        self.member_id.as_deref().is_none_or(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_admin_api_payload() {
        let payload = r#"{
            "groupId": "orders",
            "state": "Stable",
            "metrics": {"laggingPartitions": 1, "activeConsumers": 2, "unassignedPartitions": 0},
            "consumers": [
                {"groupId": "orders", "topic": "t1", "partition": 0, "offset": 50, "logEndOffset": 50, "lag": 0, "memberId": "c1"},
                {"groupId": "orders", "topic": "t1", "partition": 1, "offset": 90, "logEndOffset": 100, "lag": 10}
            ]
        }"#;

        let group: ConsumerGroup = serde_json::from_str(payload).unwrap();
        assert_eq!(group.group_id, "orders");
        assert_eq!(group.metrics_or_default().active_consumers, 2);
        assert_eq!(group.consumers.len(), 2);
        assert!(!group.consumers[0].is_unassigned());
        assert!(group.consumers[1].is_unassigned());
    }

    #[test]
    fn missing_metrics_read_as_zero() {
        let group: ConsumerGroup = serde_json::from_str(r#"{"groupId": "g", "state": "Empty"}"#).unwrap();
        assert_eq!(group.metrics, None);
        assert_eq!(group.metrics_or_default(), ConsumerGroupMetrics::default());
        assert!(group.consumers.is_empty());
    }

    #[test]
    fn empty_member_id_is_unassigned() {
        let consumer = Consumer {
            member_id: Some(String::new()),
            ..Consumer::default()
        };
        assert!(consumer.is_unassigned());
    }
}
