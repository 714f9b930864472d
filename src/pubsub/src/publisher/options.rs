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

use std::time::Duration;

/// Options for configuring publisher batching behavior.
///
/// A batch is sent when any of the thresholds is reached. To turn off
/// batching, set the value of message_count_threshold to 1.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct BatchingOptions {
    pub(crate) message_count_threshold: u32,
    pub(crate) byte_threshold: u32,
    pub(crate) delay_threshold: Duration,
}

impl BatchingOptions {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum number of messages in a batch.
    pub fn message_count_threshold(&self) -> u32 {
        self.message_count_threshold
    }

    /// The maximum size of a batch, in bytes.
    pub fn byte_threshold(&self) -> u32 {
        self.byte_threshold
    }

    /// The maximum time a message waits for its batch to be sent.
    pub fn delay_threshold(&self) -> Duration {
        self.delay_threshold
    }

    /// Set the [message count threshold][Self::message_count_threshold].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::options::publisher::BatchingOptions;
    /// let options = BatchingOptions::new().set_message_count_threshold(100_u32);
    /// ```
    pub fn set_message_count_threshold<V: Into<u32>>(mut self, v: V) -> Self {
        self.message_count_threshold = v.into();
        self
    }

    /// Set the [byte threshold][Self::byte_threshold].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::options::publisher::BatchingOptions;
    /// let options = BatchingOptions::new().set_byte_threshold(1000_u32);
    /// ```
    pub fn set_byte_threshold<V: Into<u32>>(mut self, v: V) -> Self {
        self.byte_threshold = v.into();
        self
    }

    /// Set the [delay threshold][Self::delay_threshold].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::options::publisher::BatchingOptions;
    /// let options = BatchingOptions::new().set_delay_threshold(std::time::Duration::from_millis(10));
    /// ```
    pub fn set_delay_threshold<V: Into<Duration>>(mut self, v: V) -> Self {
        self.delay_threshold = v.into();
        self
    }
}

impl std::default::Default for BatchingOptions {
    fn default() -> Self {
        Self {
            message_count_threshold: 100_u32,
            byte_threshold: 1024 * 1024_u32,
            delay_threshold: Duration::from_millis(10),
        }
    }
}
