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

//! Google Cloud Client Libraries for Rust - Pub/Sub topic resources
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains types and functions to manage [Pub/Sub] topics: create,
//! inspect, update, and delete a topic, and enumerate the subscriptions
//! attached to it.
//!
//! The transport is not part of this crate. Applications (or other client
//! libraries) provide an implementation of [stub::Stub] when building the
//! [client::PubSub] client.
//!
//! ```
//! # use google_cloud_pubsub_topic::client::PubSub;
//! # use google_cloud_pubsub_topic::stub::Stub;
//! # async fn sample(stub: std::sync::Arc<dyn Stub>) -> anyhow::Result<()> {
//! let client = PubSub::builder()
//!     .with_project_id("my-project")
//!     .with_stub(stub)
//!     .build()?;
//! let topic = client.topic("my-topic");
//! assert_eq!(topic.name(), "projects/my-project/topics/my-topic");
//! let (topic, metadata) = topic.get().set_auto_create(true).send().await?;
//! println!("{metadata:?}");
//! # Ok(()) }
//! ```
//!
//! [pub/sub]: https://cloud.google.com/pubsub

pub(crate) mod completion;
pub(crate) mod iam;
pub(crate) mod name;
pub(crate) mod paginator;
pub(crate) mod publisher;
pub(crate) mod subscription;
pub(crate) mod topic;

pub mod error;
pub mod model;
pub mod stub;

pub use gax::Result;
pub use gax::error::Error;
pub use wkt;

pub mod builder {
    pub use crate::topic::client_builder::ClientBuilder;
    pub mod topic {
        pub use crate::topic::builder::*;
    }
}

pub mod client {
    pub use crate::iam::Iam;
    pub use crate::publisher::publisher::Publisher;
    pub use crate::subscription::Subscription;
    pub use crate::topic::client::PubSub;
    pub use crate::topic::topic::Topic;
}

pub mod options {
    pub use gax::options::RequestOptions;
    pub mod publisher {
        pub use crate::publisher::options::BatchingOptions;
    }
    pub mod subscription {
        pub use crate::subscription::SubscriptionOptions;
    }
}

pub mod paging {
    pub use crate::paginator::{ItemStream, PageStream, PageableResponse};
    pub use crate::topic::builder::SubscriptionPage;
}

pub use name::{subscription_name, topic_name};
