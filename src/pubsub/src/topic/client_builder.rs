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

use super::client::PubSub;
use crate::error::UsageError;
use crate::stub::Stub;
use std::sync::Arc;

const PROJECT_ENV_VAR: &str = "GOOGLE_CLOUD_PROJECT";

/// A builder for [PubSub].
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
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    pub(super) project_id: Option<String>,
    pub(super) stub: Option<Arc<dyn Stub>>,
    pub(super) tracing: bool,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Creates a new client.
    ///
    /// Fails if the project id cannot be determined or no stub is configured.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_topic::client::PubSub;
    /// # use google_cloud_pubsub_topic::stub::Stub;
    /// # fn sample(stub: std::sync::Arc<dyn Stub>) -> anyhow::Result<()> {
    /// let client = PubSub::builder().with_stub(stub).build()?;
    /// # Ok(()) }
    /// ```
    pub fn build(self) -> crate::Result<PubSub> {
        PubSub::new(self)
    }

    /// Sets the project used to format resource names.
    ///
    /// If not set, the client uses the value of the `GOOGLE_CLOUD_PROJECT`
    /// environment variable.
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
    /// assert_eq!(client.project_id(), "my-project");
    /// # Ok(()) }
    /// ```
    pub fn with_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Configures the transport.
    ///
    /// All the RPCs issued by the client, and by any [Topic] or
    /// [Subscription] created from it, go through this stub.
    ///
    /// [Topic]: crate::client::Topic
    /// [Subscription]: crate::client::Subscription
    pub fn with_stub(mut self, v: Arc<dyn Stub>) -> Self {
        self.stub = Some(v);
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag wraps each RPC in a span naming
    /// the method and the resource.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    pub(super) fn resolve_project_id(&self) -> crate::Result<String> {
        resolve_project_id(
            self.project_id.clone(),
            std::env::var(PROJECT_ENV_VAR).ok(),
        )
    }
}

fn resolve_project_id(
    configured: Option<String>,
    from_env: Option<String>,
) -> crate::Result<String> {
    configured
        .filter(|p| !p.is_empty())
        .or(from_env.filter(|p| !p.is_empty()))
        .ok_or_else(|| UsageError::MissingProjectId.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = ClientBuilder::new();
        assert!(builder.project_id.is_none(), "{builder:?}");
        assert!(builder.stub.is_none(), "{builder:?}");
        assert!(!builder.tracing, "{builder:?}");
    }

    #[test]
    fn setters() {
        let builder = ClientBuilder::new()
            .with_project_id("my-project")
            .with_tracing();
        assert_eq!(builder.project_id.as_deref(), Some("my-project"));
        assert!(builder.tracing, "{builder:?}");
    }

    #[test]
    fn project_id_precedence() -> anyhow::Result<()> {
        let got = resolve_project_id(Some("configured".into()), Some("env".into()))?;
        assert_eq!(got, "configured");
        let got = resolve_project_id(None, Some("env".into()))?;
        assert_eq!(got, "env");
        Ok(())
    }

    #[test]
    fn project_id_empty_falls_back_to_env() -> anyhow::Result<()> {
        let got = resolve_project_id(Some(String::new()), Some("env".into()))?;
        assert_eq!(got, "env");
        Ok(())
    }

    #[test]
    fn project_id_missing() {
        let got = resolve_project_id(None, None);
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = resolve_project_id(Some(String::new()), None);
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = resolve_project_id(Some(String::new()), Some(String::new()));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }
}
