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

use crate::client::Topic;
use crate::publisher::options::BatchingOptions;

/// Publishes messages to a single topic.
///
/// Creating a publisher does not contact the service. The batching options
/// are used as given, publishing is handled by the publisher clients.
///
/// ```
/// # use google_cloud_pubsub_topic::client::Topic;
/// # use google_cloud_pubsub_topic::options::publisher::BatchingOptions;
/// # fn sample(topic: &Topic) {
/// let publisher = topic.publisher(BatchingOptions::new().set_message_count_threshold(1_u32));
/// assert_eq!(publisher.topic().name(), topic.name());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Publisher {
    topic: Topic,
    batching_options: BatchingOptions,
}

impl Publisher {
    pub(crate) fn new(topic: Topic, batching_options: BatchingOptions) -> Self {
        Self {
            topic,
            batching_options,
        }
    }

    /// The topic receiving the messages.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// The batching configuration.
    pub fn batching_options(&self) -> &BatchingOptions {
        &self.batching_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PubSub;
    use crate::stub::tests::MockStub;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_topic() -> anyhow::Result<Topic> {
        let client = PubSub::builder()
            .with_project_id("my-project")
            .with_stub(Arc::new(MockStub::new()))
            .build()?;
        Ok(client.topic("my-topic"))
    }

    #[test]
    fn builder() -> anyhow::Result<()> {
        let topic = test_topic()?;
        let options = BatchingOptions::new()
            .set_message_count_threshold(1_u32)
            .set_byte_threshold(2_000_000_u32)
            .set_delay_threshold(Duration::from_secs(2));
        let publisher = Publisher::new(topic, options.clone());
        assert_eq!(publisher.topic().name(), "projects/my-project/topics/my-topic");
        assert_eq!(publisher.batching_options(), &options);
        Ok(())
    }

    #[test]
    fn default_batching() -> anyhow::Result<()> {
        let publisher = Publisher::new(test_topic()?, BatchingOptions::default());
        assert_eq!(publisher.batching_options(), &BatchingOptions::default());
        Ok(())
    }
}
