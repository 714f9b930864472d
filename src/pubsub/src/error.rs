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

//! Custom errors for the Pub/Sub topic clients.
//!
//! The clients define additional error types. These are returned as the
//! `source()` of an [Error][crate::Error].

use gax::error::rpc::Code;

/// Represents a misuse of the client library.
///
/// These errors are detected locally, before any request is sent to the
/// service. They are returned as the source of an [Error][crate::Error] where
/// [is_binding()][crate::Error::is_binding] is true.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum UsageError {
    /// A subscription requires a non-empty name.
    #[error("a name must be specified for a subscription")]
    EmptySubscriptionName,

    /// The client could not determine the project for resource names.
    #[error(
        "the project id was not configured, use `with_project_id()` or set GOOGLE_CLOUD_PROJECT"
    )]
    MissingProjectId,

    /// The client was built without a transport.
    #[error("a stub must be configured with `with_stub()`")]
    MissingStub,

    /// An update request must change at least one field.
    #[error("no fields to update, call at least one setter before `send()`")]
    EmptyUpdateMask,
}

impl From<UsageError> for crate::Error {
    fn from(value: UsageError) -> Self {
        crate::Error::binding(value)
    }
}

/// Returns true if the service reported the resource as missing.
///
/// Only the status code is inspected, the message is never parsed.
pub(crate) fn is_not_found(error: &crate::Error) -> bool {
    error.status().is_some_and(|s| s.code == Code::NotFound)
}
