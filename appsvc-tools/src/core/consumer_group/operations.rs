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

//! Consumer group operations - core business logic
//!
//! Fetches consumer group state through [`KafkaAdminApi`] and turns failing
//! HTTP responses into semantic errors.

use appsvc_error::AppSvcError;
use appsvc_error::AppSvcResult;
use appsvc_error::ToolsError;
use tracing::debug;
use tracing::warn;

use super::types::ConsumerGroup;
use crate::admin::kafka_admin_api::KafkaAdminApi;
use crate::admin::kafka_mgmt_api::KafkaInstance;

/// Operation name used in authorization messages
pub const VIEW_OPERATION: &str = "view";

/// Consumer group operations service
pub struct ConsumerGroupService;

impl ConsumerGroupService {
    /// Fetch one consumer group from an instance's admin API
    ///
    /// # Arguments
    /// * `admin` - Authenticated admin client of the instance
    /// * `instance` - The instance, used to name it in error messages
    /// * `group_id` - Consumer group id, passed through as an opaque string
    ///
    /// # Returns
    /// The group snapshot, or a classified error for 404/401/403/500/503.
    /// Any other failure is returned exactly as the client produced it.
    pub async fn describe<A: KafkaAdminApi>(
        admin: &A,
        instance: &KafkaInstance,
        group_id: &str,
    ) -> AppSvcResult<ConsumerGroup> {
        debug!(instance = %instance.id, group = group_id, "describing consumer group");
        admin
            .get_consumer_group_by_id(group_id)
            .await
            .map_err(|e| classify_consumer_group_error(e, group_id, instance.display_name()))
    }
}

/// Map a failed consumer group request to its user-facing error.
///
/// Only [`AppSvcError::Api`] (a response was received) is classified;
/// transport and decoding errors come back untouched.
pub fn classify_consumer_group_error(err: AppSvcError, group_id: &str, instance_name: &str) -> AppSvcError {
    let AppSvcError::Api(api_err) = err else {
        return err;
    };

    match api_err.status() {
        404 => ToolsError::consumer_group_not_found(group_id, instance_name).into(),
        401 => ToolsError::unauthorized(VIEW_OPERATION).into(),
        403 => ToolsError::forbidden(VIEW_OPERATION).into(),
        500 => ToolsError::InternalServerError.into(),
        503 => ToolsError::service_unavailable(instance_name).into(),
        status => {
            warn!(status, "unclassified consumer group API response");
            AppSvcError::Api(api_err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use appsvc_error::ApiError;
    use appsvc_error::NetworkError;

    use super::*;

    struct StubAdmin<F> {
        respond: F,
        calls: AtomicUsize,
    }

    impl<F> StubAdmin<F>
    where
        F: Fn() -> AppSvcResult<ConsumerGroup> + Send + Sync,
    {
        fn new(respond: F) -> Self {
            Self {
                respond,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl<F> KafkaAdminApi for StubAdmin<F>
    where
        F: Fn() -> AppSvcResult<ConsumerGroup> + Send + Sync,
    {
        async fn get_consumer_group_by_id(&self, _group_id: &str) -> AppSvcResult<ConsumerGroup> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)()
        }
    }

    fn instance() -> KafkaInstance {
        KafkaInstance {
            id: "c9abc".to_string(),
            name: "my-instance".to_string(),
            ..KafkaInstance::default()
        }
    }

    fn status_error(status: u16) -> AppSvcResult<ConsumerGroup> {
        Err(ApiError::unexpected_status(status, "https://admin.example.com/api/v1/groups/g1", "").into())
    }

    async fn describe_with_status(status: u16) -> AppSvcError {
        let admin = StubAdmin::new(move || status_error(status));
        let err = ConsumerGroupService::describe(&admin, &instance(), "g1")
            .await
            .unwrap_err();
        assert_eq!(admin.calls.load(Ordering::SeqCst), 1);
        err
    }

    #[tokio::test]
    async fn describe_returns_group_on_success() {
        let admin = StubAdmin::new(|| {
            Ok(ConsumerGroup {
                group_id: "g1".to_string(),
                state: "Stable".to_string(),
                ..ConsumerGroup::default()
            })
        });
        let group = ConsumerGroupService::describe(&admin, &instance(), "g1").await.unwrap();
        assert_eq!(group.group_id, "g1");
        assert_eq!(admin.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn not_found_names_group_and_instance() {
        let err = describe_with_status(404).await;
        assert!(matches!(
            &err,
            AppSvcError::Tools(ToolsError::ConsumerGroupNotFound { group, instance })
                if group == "g1" && instance == "my-instance"
        ));
        let message = err.to_string();
        assert!(message.contains("g1"));
        assert!(message.contains("my-instance"));
    }

    #[tokio::test]
    async fn unauthorized_and_forbidden_use_view_operation() {
        let err = describe_with_status(401).await;
        assert!(matches!(
            &err,
            AppSvcError::Tools(ToolsError::Unauthorized { operation }) if operation == VIEW_OPERATION
        ));

        let err = describe_with_status(403).await;
        assert!(matches!(
            &err,
            AppSvcError::Tools(ToolsError::Forbidden { operation }) if operation == VIEW_OPERATION
        ));
    }

    #[tokio::test]
    async fn server_errors_are_classified() {
        let err = describe_with_status(500).await;
        assert!(matches!(err, AppSvcError::Tools(ToolsError::InternalServerError)));

        let err = describe_with_status(503).await;
        assert!(matches!(
            &err,
            AppSvcError::Tools(ToolsError::ServiceUnavailable { instance }) if instance == "my-instance"
        ));
    }

    #[tokio::test]
    async fn other_statuses_pass_through_unchanged() {
        for status in [400u16, 409, 418, 429, 502, 504] {
            let expected = ApiError::unexpected_status(status, "https://admin.example.com/api/v1/groups/g1", "")
                .to_string();
            let err = describe_with_status(status).await;
            assert_eq!(err.http_status(), Some(status));
            assert!(!err.is_classified());
            assert_eq!(err.to_string(), expected);
        }
    }

    #[tokio::test]
    async fn transport_errors_pass_through_unchanged() {
        let admin = StubAdmin::new(|| {
            Err(NetworkError::connection_failed("https://admin.example.com", "connection refused").into())
        });
        let err = ConsumerGroupService::describe(&admin, &instance(), "g1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppSvcError::Network(NetworkError::ConnectionFailed { .. })));
        assert_eq!(
            err.to_string(),
            "Connection failed to https://admin.example.com: connection refused"
        );
    }

    #[test]
    fn unnamed_instance_falls_back_to_id() {
        let err = classify_consumer_group_error(
            ApiError::unexpected_status(503, "u", "").into(),
            "g1",
            KafkaInstance {
                id: "c9abc".to_string(),
                ..KafkaInstance::default()
            }
            .display_name(),
        );
        assert!(err.to_string().contains("c9abc"));
    }
}
