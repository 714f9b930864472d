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

//! The messages exchanged with the service by the topic clients.
//!
//! These types mirror the subset of the `google.pubsub.v1` API used to manage
//! topics. They serialize using the field names of the JSON mapping.

use std::collections::HashMap;

/// A topic resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The name of the topic, `projects/{project}/topics/{topic}`.
    pub name: String,

    /// See [Creating and managing labels](https://cloud.google.com/pubsub/docs/labels).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// The Cloud KMS key used to protect access to messages published on
    /// this topic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kms_key_name: String,

    /// How long to retain messages published to this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_duration: Option<wkt::Duration>,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Topic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][Topic::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kms_key_name][Topic::kms_key_name].
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_name = v.into();
        self
    }

    /// Sets the value of [message_retention_duration][Topic::message_retention_duration].
    pub fn set_message_retention_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.message_retention_duration = Some(v.into());
        self
    }

    /// Sets or clears the value of [message_retention_duration][Topic::message_retention_duration].
    pub fn set_or_clear_message_retention_duration<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<wkt::Duration>,
    {
        self.message_retention_duration = v.map(|x| x.into());
        self
    }
}

/// A subscription resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subscription {
    /// The name of the subscription,
    /// `projects/{project}/subscriptions/{subscription}`.
    pub name: String,

    /// The name of the topic from which this subscription receives messages.
    pub topic: String,

    /// The approximate amount of time, in seconds, the service waits for the
    /// subscriber to acknowledge receipt before resending the message.
    #[serde(skip_serializing_if = "is_zero")]
    pub ack_deadline_seconds: i32,

    /// See [Creating and managing labels](https://cloud.google.com/pubsub/docs/labels).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Subscription::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [topic][Subscription::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of [ack_deadline_seconds][Subscription::ack_deadline_seconds].
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = v.into();
        self
    }

    /// Sets the value of [labels][Subscription::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

/// Request for the `GetTopic` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetTopicRequest {
    /// The name of the topic to get.
    pub topic: String,
}

impl GetTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][GetTopicRequest::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }
}

/// Request for the `DeleteTopic` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteTopicRequest {
    /// The name of the topic to delete.
    pub topic: String,
}

impl DeleteTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][DeleteTopicRequest::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }
}

/// Request for the `UpdateTopic` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateTopicRequest {
    /// The updated topic object.
    pub topic: Option<Topic>,

    /// The fields of `topic` to update, using their proto field names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][UpdateTopicRequest::topic].
    pub fn set_topic<T: Into<Topic>>(mut self, v: T) -> Self {
        self.topic = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][UpdateTopicRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

/// Request for the `ListTopicSubscriptions` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTopicSubscriptionsRequest {
    /// The name of the topic that subscriptions are attached to.
    pub topic: String,

    /// Maximum number of subscription names to return.
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i32,

    /// The value returned by the last `ListTopicSubscriptionsResponse`;
    /// indicates that this is a continuation of a prior call.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListTopicSubscriptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][ListTopicSubscriptionsRequest::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of [page_size][ListTopicSubscriptionsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListTopicSubscriptionsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response for the `ListTopicSubscriptions` method.
///
/// The service returns subscription names only.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTopicSubscriptionsResponse {
    /// The names of subscriptions attached to the topic.
    pub subscriptions: Vec<String>,

    /// If not empty, indicates that there may be more subscriptions that match
    /// the request.
    pub next_page_token: String,
}

impl ListTopicSubscriptionsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subscriptions][ListTopicSubscriptionsResponse::subscriptions].
    pub fn set_subscriptions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subscriptions = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListTopicSubscriptionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn topic_json() -> anyhow::Result<()> {
        let topic = Topic::new()
            .set_name("projects/p/topics/t")
            .set_labels([("env", "test")])
            .set_message_retention_duration(wkt::Duration::clamp(600, 0));
        let got = serde_json::to_value(&topic)?;
        let want = json!({
            "name": "projects/p/topics/t",
            "labels": {"env": "test"},
            "messageRetentionDuration": "600s",
        });
        assert_eq!(got, want);

        let got = serde_json::from_value::<Topic>(json!({"name": "projects/p/topics/t"}))?;
        assert_eq!(got, Topic::new().set_name("projects/p/topics/t"));
        Ok(())
    }

    #[test]
    fn topic_retention_from_json() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Topic>(json!({
            "name": "projects/p/topics/t",
            "messageRetentionDuration": "3600.5s",
        }))?;
        assert_eq!(
            got.message_retention_duration,
            Some(wkt::Duration::clamp(3600, 500_000_000))
        );

        let got = serde_json::from_value::<Topic>(json!({"messageRetentionDuration": 600}));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn set_or_clear_retention() {
        let topic = Topic::new().set_or_clear_message_retention_duration(Some(
            wkt::Duration::clamp(60, 0),
        ));
        assert_eq!(
            topic.message_retention_duration,
            Some(wkt::Duration::clamp(60, 0))
        );
        let topic = topic.set_or_clear_message_retention_duration(None::<wkt::Duration>);
        assert_eq!(topic.message_retention_duration, None);
    }

    #[test]
    fn list_response_json() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ListTopicSubscriptionsResponse>(json!({
            "subscriptions": ["projects/p/subscriptions/a", "projects/p/subscriptions/b"],
            "nextPageToken": "abc",
        }))?;
        let want = ListTopicSubscriptionsResponse::new()
            .set_subscriptions(["projects/p/subscriptions/a", "projects/p/subscriptions/b"])
            .set_next_page_token("abc");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn update_request() -> anyhow::Result<()> {
        let mask = wkt::FieldMask::default()
            .set_paths(vec!["labels".to_string(), "kms_key_name".to_string()]);
        let request = UpdateTopicRequest::new()
            .set_topic(Topic::new().set_name("projects/p/topics/t"))
            .set_update_mask(mask.clone());
        assert_eq!(
            request.topic.as_ref().map(|t| t.name.as_str()),
            Some("projects/p/topics/t")
        );
        assert_eq!(request.update_mask, Some(mask.clone()));

        let got = serde_json::to_value(&request)?;
        assert_eq!(got["topic"], json!({"name": "projects/p/topics/t"}));
        assert_eq!(got["updateMask"], serde_json::to_value(&mask)?);
        Ok(())
    }
}
