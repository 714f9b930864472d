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

//! Canonical resource names.
//!
//! Pub/Sub resources are identified by `projects/{project}/topics/{topic}` and
//! `projects/{project}/subscriptions/{subscription}`. The functions in this
//! module do not validate the character set of names, the service rejects
//! malformed names when they are used.

/// Returns the canonical name of a topic.
///
/// A `name` containing `/` is assumed to be fully qualified and returned
/// verbatim.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::topic_name;
/// assert_eq!(topic_name("demo", "t"), "projects/demo/topics/t");
/// assert_eq!(topic_name("demo", "projects/p/topics/t"), "projects/p/topics/t");
/// ```
pub fn topic_name(project: &str, name: &str) -> String {
    format_name(project, "topics", name)
}

/// Returns the canonical name of a subscription.
///
/// A `name` containing `/` is assumed to be fully qualified and returned
/// verbatim.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::subscription_name;
/// assert_eq!(subscription_name("demo", "s"), "projects/demo/subscriptions/s");
/// ```
pub fn subscription_name(project: &str, name: &str) -> String {
    format_name(project, "subscriptions", name)
}

fn format_name(project: &str, collection: &str, name: &str) -> String {
    if name.contains('/') {
        return name.to_string();
    }
    format!("projects/{project}/{collection}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("t", "projects/demo/topics/t"; "bare")]
    #[test_case("my-topic.v2", "projects/demo/topics/my-topic.v2"; "punctuation")]
    #[test_case("", "projects/demo/topics/"; "empty")]
    #[test_case("projects/other/topics/t", "projects/other/topics/t"; "qualified")]
    #[test_case("a/b", "a/b"; "any separator")]
    fn topic(input: &str, want: &str) {
        assert_eq!(topic_name("demo", input), want);
    }

    #[test_case("s", "projects/demo/subscriptions/s"; "bare")]
    #[test_case("projects/p/subscriptions/s", "projects/p/subscriptions/s"; "qualified")]
    fn subscription(input: &str, want: &str) {
        assert_eq!(subscription_name("demo", input), want);
    }

    #[test]
    fn qualified_is_identity() {
        for name in ["projects/a/topics/b", "/", "x/", "/y"] {
            assert_eq!(topic_name("ignored", name), name);
            assert_eq!(subscription_name("ignored", name), name);
        }
    }
}
