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

use super::client_builder::ClientBuilder;
use super::topic::Topic;
use crate::error::UsageError;
use crate::stub::Stub;
use crate::subscription::{Subscription, SubscriptionOptions};
use std::sync::Arc;

/// A client to manage [Cloud Pub/Sub] topics.
///
/// The client creates [Topic] and [Subscription] handles. The handles are
/// local values, creating one does not contact the service.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::client::PubSub;
/// # use google_cloud_pubsub_topic::stub::Stub;
/// # async fn sample(stub: std::sync::Arc<dyn Stub>) -> anyhow::Result<()> {
/// let client = PubSub::builder()
///     .with_project_id("my-project")
///     .with_stub(stub)
///     .build()?;
/// let topic = client.topic("my-topic");
/// if !topic.exists().send().await? {
///     topic.create().send().await?;
/// }
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `PubSub` use the `with_*` methods in the type returned by
/// [builder()][PubSub::builder]. The project id and the stub are required.
///
/// # Pooling and Cloning
///
/// `PubSub` holds its configuration in an [Arc], cloning it is cheap. Topic
/// and subscription handles keep a clone of the client that created them.
///
/// [cloud pub/sub]: https://cloud.google.com/pubsub/docs/overview
#[derive(Clone, Debug)]
pub struct PubSub {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    project_id: String,
    stub: Arc<dyn Stub>,
    tracing: bool,
}

impl PubSub {
    /// Returns a builder for [PubSub].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::PubSub;
    /// # use google_cloud_pubsub_topic::stub::Stub;
    /// # fn sample(stub: std::sync::Arc<dyn Stub>) -> anyhow::Result<()> {
    /// let client = PubSub::builder()
    ///     .with_project_id("my-project")
    ///     .with_stub(stub)
    ///     .build()?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(super) fn new(builder: ClientBuilder) -> crate::Result<Self> {
        let project_id = builder.resolve_project_id()?;
        let stub = builder.stub.ok_or(UsageError::MissingStub)?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                project_id,
                stub,
                tracing: builder.tracing,
            }),
        })
    }

    /// The project used to format resource names.
    pub fn project_id(&self) -> &str {
        &self.inner.project_id
    }

    /// Returns a handle for the topic `name`.
    ///
    /// `name` may be a bare topic id or a fully qualified topic name.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::PubSub;
    /// # fn sample(client: &PubSub) {
    /// let topic = client.topic("my-topic");
    /// assert_eq!(topic.name(), format!("projects/{}/topics/my-topic", client.project_id()));
    /// # }
    /// ```
    pub fn topic<T: AsRef<str>>(&self, name: T) -> Topic {
        Topic::new(self.clone(), name.as_ref())
    }

    /// Returns a handle for the subscription `name`.
    ///
    /// `name` may be a bare subscription id or a fully qualified subscription
    /// name. The handle is created locally, the subscription may not exist.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::PubSub;
    /// # use google_cloud_pubsub_topic::options::subscription::SubscriptionOptions;
    /// # fn sample(client: &PubSub) -> anyhow::Result<()> {
    /// let subscription = client.subscription("my-subscription", SubscriptionOptions::new())?;
    /// # Ok(()) }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn subscription<T: AsRef<str>>(
        &self,
        name: T,
        options: SubscriptionOptions,
    ) -> crate::Result<Subscription> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(UsageError::EmptySubscriptionName.into());
        }
        Ok(Subscription::new(self.clone(), name, options))
    }

    pub(crate) fn stub(&self) -> &Arc<dyn Stub> {
        &self.inner.stub
    }

    /// Returns the span for a single RPC.
    ///
    /// Disabled spans are returned when the client was built without tracing.
    pub(crate) fn span(&self, method: &'static str, resource: &str) -> tracing::Span {
        if !self.inner.tracing {
            return tracing::Span::none();
        }
        tracing::info_span!("pubsub", rpc.method = method, resource = resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::tests::MockStub;

    fn test_client() -> anyhow::Result<PubSub> {
        let client = PubSub::builder()
            .with_project_id("demo")
            .with_stub(Arc::new(MockStub::new()))
            .build()?;
        Ok(client)
    }

    #[test]
    fn build() -> anyhow::Result<()> {
        let client = test_client()?;
        assert_eq!(client.project_id(), "demo");
        assert!(client.span("getTopic", "t").is_disabled());
        Ok(())
    }

    #[test]
    fn build_without_stub() {
        let got = PubSub::builder().with_project_id("demo").build();
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[test]
    fn topic() -> anyhow::Result<()> {
        let client = test_client()?;
        assert_eq!(client.topic("t").name(), "projects/demo/topics/t");
        assert_eq!(
            client.topic("projects/other/topics/t").name(),
            "projects/other/topics/t"
        );
        Ok(())
    }

    #[test]
    fn subscription() -> anyhow::Result<()> {
        let client = test_client()?;
        let subscription = client.subscription("s", SubscriptionOptions::new())?;
        assert_eq!(subscription.name(), "projects/demo/subscriptions/s");
        assert!(subscription.topic().is_none(), "{subscription:?}");
        Ok(())
    }

    #[test]
    fn subscription_empty_name() -> anyhow::Result<()> {
        let client = test_client()?;
        let got = client.subscription("", SubscriptionOptions::new());
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        Ok(())
    }
}
