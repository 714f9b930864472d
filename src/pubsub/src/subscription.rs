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

use crate::client::{PubSub, Topic};
use crate::name::subscription_name;

/// Options to create a [Subscription] handle.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::options::subscription::SubscriptionOptions;
/// let options = SubscriptionOptions::new();
/// assert!(options.topic().is_none());
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct SubscriptionOptions {
    topic: Option<Topic>,
}

impl SubscriptionOptions {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topic the subscription is attached to.
    pub fn set_topic(mut self, v: Topic) -> Self {
        self.topic = Some(v);
        self
    }

    /// The topic the subscription is attached to, if known.
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }
}

/// A handle for a Pub/Sub subscription.
///
/// The handle is a local value, it does not assert the subscription exists.
/// Receiving messages is the job of the subscriber clients, this handle only
/// identifies the subscription.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::client::Topic;
/// # use google_cloud_pubsub_topic::options::subscription::SubscriptionOptions;
/// # fn sample(topic: &Topic) -> anyhow::Result<()> {
/// let subscription = topic.subscription("my-subscription", SubscriptionOptions::new())?;
/// assert_eq!(subscription.topic().map(|t| t.name()), Some(topic.name()));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Subscription {
    name: String,
    client: PubSub,
    options: SubscriptionOptions,
}

impl Subscription {
    pub(crate) fn new(client: PubSub, name: &str, options: SubscriptionOptions) -> Self {
        let name = subscription_name(client.project_id(), name);
        Self {
            name,
            client,
            options,
        }
    }

    /// The fully qualified name of the subscription.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The topic this subscription is attached to, if known.
    pub fn topic(&self) -> Option<&Topic> {
        self.options.topic()
    }

    /// The client that created this handle.
    pub fn client(&self) -> &PubSub {
        &self.client
    }
}
