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

/// A handle to manage the IAM policy of a Pub/Sub resource.
///
/// The handle is created together with its [Topic][crate::client::Topic] and
/// is bound to the topic name. Reading and changing policies is provided by
/// the IAM clients.
#[derive(Clone, Debug, PartialEq)]
pub struct Iam {
    resource: String,
}

impl Iam {
    pub(crate) fn new<T: Into<String>>(resource: T) -> Self {
        Self {
            resource: resource.into(),
        }
    }

    /// The fully qualified name of the resource controlled by this policy.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource() {
        let iam = Iam::new("projects/p/topics/t");
        assert_eq!(iam.resource(), "projects/p/topics/t");
    }
}
