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

//! Adapters between the request builders and the application.
//!
//! Every request builder implements its operation once, as a future returning
//! [Result][crate::Result]. Applications either await that future (see the
//! `send()` functions) or provide a callback (see the `on_complete()`
//! functions). The callback receives exactly the result the future would have
//! produced.

use std::future::Future;
use tokio::task::JoinHandle;

/// Runs `operation` in a background task and passes its result to `callback`.
///
/// # Panics
///
/// If called outside the context of a Tokio runtime.
pub(crate) fn on_complete<T, F, C>(operation: F, callback: C) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = crate::Result<T>> + Send + 'static,
    C: FnOnce(crate::Result<T>) + Send + 'static,
{
    tokio::spawn(async move { callback(operation.await) })
}

/// Runs `operation` in a background task, discarding its result.
///
/// Errors are logged and dropped.
///
/// # Panics
///
/// If called outside the context of a Tokio runtime.
pub(crate) fn detach<T, F>(method: &'static str, resource: String, operation: F) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = crate::Result<T>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = operation.await {
            tracing::debug!("ignoring error in detached {method} for {resource}: {e:?}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn callback_receives_value() -> anyhow::Result<()> {
        let (tx, rx) = oneshot::channel();
        let handle = on_complete(async { Ok(42) }, move |r| {
            let _ = tx.send(r);
        });
        handle.await?;
        let got = rx.await?;
        assert_eq!(got?, 42);
        Ok(())
    }

    #[tokio::test]
    async fn callback_receives_error() -> anyhow::Result<()> {
        let (tx, rx) = oneshot::channel();
        let handle = on_complete(
            async { Err::<i32, _>(crate::Error::io("simulated")) },
            move |r| {
                let _ = tx.send(r);
            },
        );
        handle.await?;
        let got = rx.await?;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn detached_error_is_dropped() -> anyhow::Result<()> {
        let handle = detach(
            "deleteTopic",
            "projects/p/topics/t".to_string(),
            async { Err::<(), _>(crate::Error::io("simulated")) },
        );
        // The task completes normally, the error does not panic.
        handle.await?;
        Ok(())
    }
}
