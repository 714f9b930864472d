// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Traits to mock the clients in this library.
//!
//! The topic clients do not own a transport. Applications provide an
//! implementation of [Stub] to [ClientBuilder::with_stub], typically a thin
//! wrapper over the generated `TopicAdmin` and `SubscriptionAdmin` clients.
//! Application developers may also use this trait to mock the service in their
//! tests.
//!
//! Retries, timeouts and other policies in the [RequestOptions] belong to the
//! stub implementation. The topic clients pass them through unchanged.
//!
//! [ClientBuilder::with_stub]: crate::builder::ClientBuilder::with_stub

use crate::Result;
use crate::model;
use gax::options::RequestOptions;

/// Defines the RPCs used by the topic clients.
///
/// Each method corresponds to one RPC. `create_topic`, `get_topic`,
/// `update_topic`, `delete_topic` and `list_topic_subscriptions` belong to the
/// `Publisher` service, `create_subscription` to the `Subscriber` service.
#[async_trait::async_trait]
pub trait Stub: std::fmt::Debug + Send + Sync {
    /// Implements `google.pubsub.v1.Publisher.CreateTopic`.
    async fn create_topic(
        &self,
        req: model::Topic,
        options: RequestOptions,
    ) -> Result<model::Topic>;

    /// Implements `google.pubsub.v1.Publisher.GetTopic`.
    async fn get_topic(
        &self,
        req: model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<model::Topic>;

    /// Implements `google.pubsub.v1.Publisher.UpdateTopic`.
    async fn update_topic(
        &self,
        req: model::UpdateTopicRequest,
        options: RequestOptions,
    ) -> Result<model::Topic>;

    /// Implements `google.pubsub.v1.Publisher.DeleteTopic`.
    async fn delete_topic(
        &self,
        req: model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> Result<()>;

    /// Implements `google.pubsub.v1.Publisher.ListTopicSubscriptions`.
    async fn list_topic_subscriptions(
        &self,
        req: model::ListTopicSubscriptionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListTopicSubscriptionsResponse>;

    /// Implements `google.pubsub.v1.Subscriber.CreateSubscription`.
    async fn create_subscription(
        &self,
        req: model::Subscription,
        options: RequestOptions,
    ) -> Result<model::Subscription>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Stub {}
        #[async_trait::async_trait]
        impl Stub for Stub {
            async fn create_topic(
                &self,
                req: model::Topic,
                options: RequestOptions,
            ) -> Result<model::Topic>;
            async fn get_topic(
                &self,
                req: model::GetTopicRequest,
                options: RequestOptions,
            ) -> Result<model::Topic>;
            async fn update_topic(
                &self,
                req: model::UpdateTopicRequest,
                options: RequestOptions,
            ) -> Result<model::Topic>;
            async fn delete_topic(
                &self,
                req: model::DeleteTopicRequest,
                options: RequestOptions,
            ) -> Result<()>;
            async fn list_topic_subscriptions(
                &self,
                req: model::ListTopicSubscriptionsRequest,
                options: RequestOptions,
            ) -> Result<model::ListTopicSubscriptionsResponse>;
            async fn create_subscription(
                &self,
                req: model::Subscription,
                options: RequestOptions,
            ) -> Result<model::Subscription>;
        }
    }

    /// Returns a `NOT_FOUND` error, as the service would for a missing topic.
    pub(crate) fn not_found() -> crate::Error {
        use gax::error::rpc::{Code, Status};
        crate::Error::service(
            Status::default()
                .set_code(Code::NotFound)
                .set_message("Resource not found (resource=my-topic)."),
        )
    }

    /// Returns a `PERMISSION_DENIED` error.
    pub(crate) fn permission_denied() -> crate::Error {
        use gax::error::rpc::{Code, Status};
        crate::Error::service(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("User not authorized to perform this action."),
        )
    }
}
