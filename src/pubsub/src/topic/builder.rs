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

use crate::client::{Subscription, Topic};
use crate::completion;
use crate::error::is_not_found;
use crate::model;
use crate::options::subscription::SubscriptionOptions;
use crate::paginator::{ItemStream, PageStream, PageableResponse};
use gax::options::RequestOptions;
use crate::error::UsageError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Implements the functions shared by all the request builders.
///
/// `send()` is the only implementation of each operation. `on_complete()`
/// runs `send()` in the background and hands the result to a callback.
macro_rules! request_builder {
    ($builder:ty, $output:ty) => {
        impl $builder {
            /// Sets the request options, such as timeouts and retry policies.
            ///
            /// The options are passed unchanged to the [Stub][crate::stub::Stub].
            pub fn with_request_options(mut self, v: RequestOptions) -> Self {
                self.options = v;
                self
            }

            /// Sets the per-attempt timeout in the request options.
            pub fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
                self.options.set_attempt_timeout(v);
                self
            }

            /// Sends the request in a background task, calling `callback` with
            /// the result.
            ///
            /// The callback receives the same result returned by `send()`.
            ///
            /// # Panics
            ///
            /// If called outside the context of a Tokio runtime.
            pub fn on_complete<C>(self, callback: C) -> JoinHandle<()>
            where
                C: FnOnce(crate::Result<$output>) + Send + 'static,
            {
                completion::on_complete(self.send(), callback)
            }
        }
    };
}

fn rpc_span(topic: &Topic, method: &'static str) -> tracing::Span {
    tracing::debug!("sending {method} for {}", topic.name());
    topic.client().span(method, topic.name())
}

/// The request builder for [Topic::create][crate::client::Topic::create].
#[derive(Clone, Debug)]
pub struct CreateTopic {
    topic: Topic,
    resource: model::Topic,
    options: RequestOptions,
}

impl CreateTopic {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            resource: model::Topic::new(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the labels of the new topic.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource = self.resource.set_labels(v);
        self
    }

    /// Sets the Cloud KMS key protecting the messages in the new topic.
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = self.resource.set_kms_key_name(v);
        self
    }

    /// Sets how long the new topic retains messages.
    pub fn set_message_retention_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.resource = self.resource.set_message_retention_duration(v);
        self
    }

    /// Sends the request.
    ///
    /// On success returns the topic handle and the metadata of the new topic.
    /// The metadata is also cached in the handle.
    pub async fn send(self) -> crate::Result<(Topic, model::Topic)> {
        let span = rpc_span(&self.topic, "createTopic");
        let request = self.resource.set_name(self.topic.name());
        let response = self
            .topic
            .client()
            .stub()
            .create_topic(request, self.options)
            .instrument(span)
            .await?;
        self.topic.cache_metadata(response.clone());
        Ok((self.topic, response))
    }
}

request_builder!(CreateTopic, (Topic, model::Topic));

/// The request builder for [Topic::get_metadata][crate::client::Topic::get_metadata].
#[derive(Clone, Debug)]
pub struct GetMetadata {
    topic: Topic,
    options: RequestOptions,
}

impl GetMetadata {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            options: RequestOptions::default(),
        }
    }

    /// Sends the request.
    ///
    /// On success the response replaces the metadata cached in the handle. On
    /// failure the cache is not modified.
    pub async fn send(self) -> crate::Result<model::Topic> {
        let span = rpc_span(&self.topic, "getTopic");
        let request = model::GetTopicRequest::new().set_topic(self.topic.name());
        let response = self
            .topic
            .client()
            .stub()
            .get_topic(request, self.options)
            .instrument(span)
            .await?;
        self.topic.cache_metadata(response.clone());
        Ok(response)
    }
}

request_builder!(GetMetadata, model::Topic);

/// The request builder for [Topic::get][crate::client::Topic::get].
#[derive(Clone, Debug)]
pub struct GetTopic {
    topic: Topic,
    auto_create: bool,
    options: RequestOptions,
}

impl GetTopic {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            auto_create: false,
            options: RequestOptions::default(),
        }
    }

    /// Creates the topic if it does not exist.
    ///
    /// The default is `false`.
    pub fn set_auto_create(mut self, v: bool) -> Self {
        self.auto_create = v;
        self
    }

    /// Sends the request.
    ///
    /// If the topic does not exist and auto-create is enabled, creates the
    /// topic using the same request options and returns the result of the
    /// creation.
    pub async fn send(self) -> crate::Result<(Topic, model::Topic)> {
        let GetTopic {
            topic,
            auto_create,
            options,
        } = self;
        let fetched = topic
            .get_metadata()
            .with_request_options(options.clone())
            .send()
            .await;
        match fetched {
            Ok(metadata) => Ok((topic, metadata)),
            Err(e) if auto_create && is_not_found(&e) => {
                tracing::debug!("topic {} not found, creating it", topic.name());
                topic.create().with_request_options(options).send().await
            }
            Err(e) => Err(e),
        }
    }
}

request_builder!(GetTopic, (Topic, model::Topic));

/// The request builder for [Topic::exists][crate::client::Topic::exists].
#[derive(Clone, Debug)]
pub struct Exists {
    topic: Topic,
    options: RequestOptions,
}

impl Exists {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            options: RequestOptions::default(),
        }
    }

    /// Sends the request.
    ///
    /// Returns `false` if the service reports the topic as not found. Any
    /// other error is returned unchanged, as the existence of the topic cannot
    /// be determined.
    pub async fn send(self) -> crate::Result<bool> {
        let fetched = self
            .topic
            .get_metadata()
            .with_request_options(self.options)
            .send()
            .await;
        match fetched {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

request_builder!(Exists, bool);

/// The request builder for [Topic::delete][crate::client::Topic::delete].
#[derive(Clone, Debug)]
pub struct DeleteTopic {
    topic: Topic,
    options: RequestOptions,
}

impl DeleteTopic {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            options: RequestOptions::default(),
        }
    }

    /// Sends the request.
    pub async fn send(self) -> crate::Result<()> {
        let span = rpc_span(&self.topic, "deleteTopic");
        let request = model::DeleteTopicRequest::new().set_topic(self.topic.name());
        self.topic
            .client()
            .stub()
            .delete_topic(request, self.options)
            .instrument(span)
            .await
    }

    /// Sends the request in a background task and ignores the result.
    ///
    /// Errors, including a missing topic, are logged at the `DEBUG` level and
    /// discarded. Use [send()][DeleteTopic::send] or
    /// [on_complete()][DeleteTopic::on_complete] to observe them.
    ///
    /// # Panics
    ///
    /// If called outside the context of a Tokio runtime.
    pub fn detach(self) -> JoinHandle<()> {
        let name = self.topic.name().to_string();
        completion::detach("deleteTopic", name, self.send())
    }
}

request_builder!(DeleteTopic, ());

/// The request builder for [Topic::set_metadata][crate::client::Topic::set_metadata].
#[derive(Clone, Debug)]
pub struct SetMetadata {
    topic: Topic,
    resource: model::Topic,
    update_mask: Vec<String>,
    options: RequestOptions,
}

impl SetMetadata {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            resource: model::Topic::new(),
            update_mask: Vec::new(),
            options: RequestOptions::default(),
        }
    }

    fn mask(&mut self, path: &str) {
        if !self.update_mask.iter().any(|p| p == path) {
            self.update_mask.push(path.to_string());
        }
    }

    /// Replaces the labels of the topic.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource = self.resource.set_labels(v);
        self.mask("labels");
        self
    }

    /// Changes the Cloud KMS key protecting the messages in the topic.
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = self.resource.set_kms_key_name(v);
        self.mask("kms_key_name");
        self
    }

    /// Changes how long the topic retains messages.
    pub fn set_message_retention_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.resource = self.resource.set_message_retention_duration(v);
        self.mask("message_retention_duration");
        self
    }

    /// Sends the request.
    ///
    /// On success the response replaces the metadata cached in the handle.
    ///
    /// Only the fields changed with the setters are updated. Returns an error
    /// without contacting the service if no setter was called.
    pub async fn send(self) -> crate::Result<model::Topic> {
        if self.update_mask.is_empty() {
            return Err(UsageError::EmptyUpdateMask.into());
        }
        let span = rpc_span(&self.topic, "updateTopic");
        let request = model::UpdateTopicRequest::new()
            .set_topic(self.resource.set_name(self.topic.name()))
            .set_update_mask(wkt::FieldMask::default().set_paths(self.update_mask));
        let response = self
            .topic
            .client()
            .stub()
            .update_topic(request, self.options)
            .instrument(span)
            .await?;
        self.topic.cache_metadata(response.clone());
        Ok(response)
    }
}

request_builder!(SetMetadata, model::Topic);

/// One page of subscriptions attached to a topic.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct SubscriptionPage {
    /// The subscriptions, in the order returned by the service.
    pub subscriptions: Vec<Subscription>,

    /// The token to request the next page. Empty on the last page, and when
    /// all the pages were collected.
    pub next_page_token: String,
}

impl PageableResponse for SubscriptionPage {
    type PageItem = Subscription;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<Subscription> {
        self.subscriptions
    }
}

/// The request builder for [Topic::list_subscriptions][crate::client::Topic::list_subscriptions].
///
/// The service returns subscription names, each name is converted to a
/// [Subscription] handle attached to the topic.
#[derive(Clone, Debug)]
pub struct ListSubscriptions {
    topic: Topic,
    request: model::ListTopicSubscriptionsRequest,
    auto_paginate: bool,
    options: RequestOptions,
}

impl ListSubscriptions {
    pub(crate) fn new(topic: Topic) -> Self {
        Self {
            topic,
            request: model::ListTopicSubscriptionsRequest::new(),
            auto_paginate: true,
            options: RequestOptions::default(),
        }
    }

    /// Sets the maximum number of subscriptions in each page.
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request = self.request.set_page_size(v);
        self
    }

    /// Starts the listing at the page identified by `v`.
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request = self.request.set_page_token(v);
        self
    }

    /// Controls if [send()][ListSubscriptions::send] collects all the pages.
    ///
    /// The default is `true`. Set to `false` to receive a single page and
    /// the token for the next page.
    pub fn set_auto_paginate(mut self, v: bool) -> Self {
        self.auto_paginate = v;
        self
    }

    /// Sends the request(s).
    ///
    /// With auto-pagination enabled, requests all the pages and returns their
    /// subscriptions in order. Otherwise returns a single page.
    pub async fn send(self) -> crate::Result<SubscriptionPage> {
        if !self.auto_paginate {
            return list_page(self.topic, self.request, self.options).await;
        }
        let mut pages = self.by_page();
        let mut subscriptions = Vec::new();
        while let Some(page) = pages.next().await {
            subscriptions.extend(page?.subscriptions);
        }
        Ok(SubscriptionPage {
            subscriptions,
            next_page_token: String::new(),
        })
    }

    /// Streams the pages of subscriptions.
    ///
    /// Pages are requested as the stream is consumed. Dropping the stream
    /// stops any further requests.
    pub fn by_page(self) -> PageStream<SubscriptionPage> {
        let ListSubscriptions {
            topic,
            request,
            options,
            ..
        } = self;
        let seed = request.page_token.clone();
        let execute = move |token: String| {
            let request = request.clone().set_page_token(token);
            list_page(topic.clone(), request, options.clone())
        };
        PageStream::new(seed, execute)
    }

    /// Streams the subscriptions across all pages.
    ///
    /// Pages are requested as the stream is consumed. Dropping the stream
    /// stops any further requests.
    pub fn by_item(self) -> ItemStream<Subscription> {
        self.by_page().items()
    }
}

request_builder!(ListSubscriptions, SubscriptionPage);

async fn list_page(
    topic: Topic,
    request: model::ListTopicSubscriptionsRequest,
    options: RequestOptions,
) -> crate::Result<SubscriptionPage> {
    let span = rpc_span(&topic, "listTopicSubscriptions");
    let request = request.set_topic(topic.name());
    let response = topic
        .client()
        .stub()
        .list_topic_subscriptions(request, options)
        .instrument(span)
        .await?;
    let subscriptions = response
        .subscriptions
        .iter()
        .map(|name| topic.subscription(name, SubscriptionOptions::new()))
        .collect::<crate::Result<Vec<_>>>()?;
    Ok(SubscriptionPage {
        subscriptions,
        next_page_token: response.next_page_token,
    })
}

/// The request builder for [Topic::create_subscription][crate::client::Topic::create_subscription].
#[derive(Clone, Debug)]
pub struct CreateSubscription {
    topic: Topic,
    subscription: Subscription,
    resource: model::Subscription,
    options: RequestOptions,
}

impl CreateSubscription {
    pub(crate) fn new(topic: Topic, name: &str) -> crate::Result<Self> {
        let subscription = topic.subscription(name, SubscriptionOptions::new())?;
        Ok(Self {
            topic,
            subscription,
            resource: model::Subscription::new(),
            options: RequestOptions::default(),
        })
    }

    /// Sets the acknowledgement deadline of the new subscription.
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.resource = self.resource.set_ack_deadline_seconds(v);
        self
    }

    /// Sets the labels of the new subscription.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource = self.resource.set_labels(v);
        self
    }

    /// Sends the request.
    ///
    /// On success returns the subscription handle and the metadata of the new
    /// subscription.
    pub async fn send(self) -> crate::Result<(Subscription, model::Subscription)> {
        let span = rpc_span(&self.topic, "createSubscription");
        let request = self
            .resource
            .set_name(self.subscription.name())
            .set_topic(self.topic.name());
        let response = self
            .topic
            .client()
            .stub()
            .create_subscription(request, self.options)
            .instrument(span)
            .await?;
        Ok((self.subscription, response))
    }
}

request_builder!(CreateSubscription, (Subscription, model::Subscription));
