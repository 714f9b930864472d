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

use super::builder::{
    CreateSubscription, CreateTopic, DeleteTopic, Exists, GetMetadata, GetTopic,
    ListSubscriptions, SetMetadata,
};
use crate::client::{Iam, PubSub, Publisher, Subscription};
use crate::model;
use crate::name::topic_name;
use crate::options::publisher::BatchingOptions;
use crate::options::subscription::SubscriptionOptions;
use std::sync::{Arc, Mutex};

/// A handle for a Pub/Sub topic.
///
/// The handle is a local value, creating one does not assert the topic exists.
/// Use [create()][Topic::create] to create the topic in the service, and
/// [exists()][Topic::exists] or [get()][Topic::get] to check for it. Dropping
/// the handle has no effect on the service.
///
/// The handle caches the last topic metadata returned by the service, see
/// [metadata()][Topic::metadata].
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::client::PubSub;
/// # async fn sample(client: &PubSub) -> anyhow::Result<()> {
/// let topic = client.topic("my-topic");
/// let (topic, _) = topic.get().set_auto_create(true).send().await?;
/// let mut subscriptions = topic.list_subscriptions().by_item();
/// while let Some(subscription) = subscriptions.next().await.transpose()? {
///     println!("{}", subscription.name());
/// }
/// # Ok(()) }
/// ```
///
/// # Cloning
///
/// `Topic` holds its state in an [Arc], clones share the metadata cache.
#[derive(Clone, Debug)]
pub struct Topic {
    inner: Arc<TopicInner>,
}

#[derive(Debug)]
struct TopicInner {
    name: String,
    client: PubSub,
    iam: Iam,
    metadata: Mutex<Option<model::Topic>>,
}

impl Topic {
    pub(crate) fn new(client: PubSub, name: &str) -> Self {
        let name = topic_name(client.project_id(), name);
        let iam = Iam::new(name.clone());
        Self {
            inner: Arc::new(TopicInner {
                name,
                client,
                iam,
                metadata: Mutex::new(None),
            }),
        }
    }

    /// The fully qualified name of the topic.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The client that created this handle.
    pub fn client(&self) -> &PubSub {
        &self.inner.client
    }

    /// The IAM handle for this topic.
    pub fn iam(&self) -> &Iam {
        &self.inner.iam
    }

    /// The last topic metadata returned by the service.
    ///
    /// Returns `None` until an operation returning the topic metadata succeeds.
    /// The value is replaced on each success and never invalidated. If
    /// multiple requests are in flight, the last one to complete wins.
    pub fn metadata(&self) -> Option<model::Topic> {
        self.inner
            .metadata
            .lock()
            .expect("never poisoned")
            .clone()
    }

    pub(crate) fn cache_metadata(&self, metadata: model::Topic) {
        tracing::debug!("caching metadata for {}", self.name());
        *self.inner.metadata.lock().expect("never poisoned") = Some(metadata);
    }

    /// Creates the topic in the service.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let (topic, metadata) = topic.create().set_labels([("env", "test")]).send().await?;
    /// # Ok(()) }
    /// ```
    pub fn create(&self) -> CreateTopic {
        CreateTopic::new(self.clone())
    }

    /// Gets the topic, optionally creating it if it does not exist.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let (topic, metadata) = topic.get().set_auto_create(true).send().await?;
    /// # Ok(()) }
    /// ```
    pub fn get(&self) -> GetTopic {
        GetTopic::new(self.clone())
    }

    /// Fetches the topic metadata and caches it.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let metadata = topic.get_metadata().send().await?;
    /// assert_eq!(topic.metadata(), Some(metadata));
    /// # Ok(()) }
    /// ```
    pub fn get_metadata(&self) -> GetMetadata {
        GetMetadata::new(self.clone())
    }

    /// Updates the topic metadata.
    ///
    /// Only the fields set in the builder are updated.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let metadata = topic.set_metadata().set_labels([("env", "prod")]).send().await?;
    /// # Ok(()) }
    /// ```
    pub fn set_metadata(&self) -> SetMetadata {
        SetMetadata::new(self.clone())
    }

    /// Checks if the topic exists.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// if topic.exists().send().await? {
    ///     println!("{} exists", topic.name());
    /// }
    /// # Ok(()) }
    /// ```
    pub fn exists(&self) -> Exists {
        Exists::new(self.clone())
    }

    /// Deletes the topic.
    ///
    /// The handle remains valid, and the cached metadata is not cleared.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// topic.delete().send().await?;
    /// # Ok(()) }
    /// ```
    pub fn delete(&self) -> DeleteTopic {
        DeleteTopic::new(self.clone())
    }

    /// Lists the subscriptions attached to the topic.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let page = topic.list_subscriptions().send().await?;
    /// for subscription in page.subscriptions {
    ///     println!("{}", subscription.name());
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_subscriptions(&self) -> ListSubscriptions {
        ListSubscriptions::new(self.clone())
    }

    /// Creates a subscription attached to this topic.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::Topic;
    /// # async fn sample(topic: Topic) -> anyhow::Result<()> {
    /// let (subscription, _) = topic
    ///     .create_subscription("my-subscription")?
    ///     .set_ack_deadline_seconds(30)
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error, without contacting the service, if `name` is empty.
    pub fn create_subscription<T: AsRef<str>>(
        &self,
        name: T,
    ) -> crate::Result<CreateSubscription> {
        CreateSubscription::new(self.clone(), name.as_ref())
    }

    /// Returns a publisher for this topic.
    pub fn publisher(&self, options: BatchingOptions) -> Publisher {
        Publisher::new(self.clone(), options)
    }

    /// Returns a handle for a subscription attached to this topic.
    ///
    /// Any topic in `options` is replaced by this topic.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn subscription<T: AsRef<str>>(
        &self,
        name: T,
        options: SubscriptionOptions,
    ) -> crate::Result<Subscription> {
        self.client().subscription(name, options.set_topic(self.clone()))
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
    fn name() -> anyhow::Result<()> {
        let client = test_client()?;
        let topic = Topic::new(client.clone(), "t");
        assert_eq!(topic.name(), "projects/demo/topics/t");
        let topic = Topic::new(client, "projects/other/topics/t");
        assert_eq!(topic.name(), "projects/other/topics/t");
        Ok(())
    }

    #[test]
    fn iam() -> anyhow::Result<()> {
        let topic = test_client()?.topic("t");
        assert_eq!(topic.iam().resource(), topic.name());
        Ok(())
    }

    #[test]
    fn metadata_cache() -> anyhow::Result<()> {
        let topic = test_client()?.topic("t");
        assert!(topic.metadata().is_none(), "{topic:?}");
        let first = model::Topic::new()
            .set_name(topic.name())
            .set_labels([("k", "v1")]);
        topic.cache_metadata(first.clone());
        assert_eq!(topic.metadata(), Some(first));

        let clone = topic.clone();
        let second = model::Topic::new()
            .set_name(topic.name())
            .set_labels([("k", "v2")]);
        clone.cache_metadata(second.clone());
        assert_eq!(topic.metadata(), Some(second));
        Ok(())
    }

    #[test]
    fn publisher() -> anyhow::Result<()> {
        let topic = test_client()?.topic("t");
        let options = BatchingOptions::new().set_message_count_threshold(7_u32);
        let publisher = topic.publisher(options.clone());
        assert_eq!(publisher.topic().name(), topic.name());
        assert_eq!(publisher.batching_options(), &options);
        Ok(())
    }

    #[test]
    fn subscription() -> anyhow::Result<()> {
        let client = test_client()?;
        let topic = client.topic("t");
        let other = client.topic("other");
        let subscription =
            topic.subscription("s", SubscriptionOptions::new().set_topic(other))?;
        assert_eq!(subscription.name(), "projects/demo/subscriptions/s");
        assert_eq!(subscription.topic().map(|t| t.name()), Some(topic.name()));

        let got = topic.subscription("", SubscriptionOptions::new());
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        Ok(())
    }
}
