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

//! Streams over paginated list RPCs.
//!
//! List RPCs return one page of results and a token for the next page, as
//! described in [AIP-4233]. The types in this module turn such an RPC into a
//! [Stream] of pages, or a [Stream] of items.
//!
//! The streams are lazy: a page is only requested when the stream is polled
//! and the previous page has been consumed. Dropping the stream stops any
//! further requests.
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use futures::stream::{StreamExt, try_unfold};
use futures::{Stream, future};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a page returned by a list RPC.
pub trait PageableResponse {
    type PageItem: Send + 'static;

    /// The token to request the next page, empty on the last page.
    fn next_page_token(&self) -> String;

    /// Consumes the page, returning its items in order.
    fn into_items(self) -> Vec<Self::PageItem>;
}

type BoxStream<T> = Pin<Box<dyn Stream<Item = crate::Result<T>> + Send>>;

/// A stream of pages returned by a list RPC.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::client::Topic;
/// # async fn sample(topic: Topic) -> anyhow::Result<()> {
/// let mut pages = topic.list_subscriptions().set_page_size(100).by_page();
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for subscription in page.subscriptions {
///         println!("{}", subscription.name());
///     }
/// }
/// # Ok(()) }
/// ```
#[pin_project]
pub struct PageStream<T> {
    #[pin]
    stream: BoxStream<T>,
}

impl<T> PageStream<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Creates a stream given the initial page token and a function to fetch
    /// a page.
    ///
    /// The state is the token of the next page, `None` after the last page.
    /// An error ends the stream.
    pub(crate) fn new<F, E>(seed_token: String, execute: E) -> Self
    where
        E: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = crate::Result<T>> + Send + 'static,
    {
        let stream = try_unfold(Some(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let Some(token) = state else {
                    return Ok(None);
                };
                let page = execute(token).await?;
                let next = Some(page.next_page_token()).filter(|t| !t.is_empty());
                Ok::<_, crate::Error>(Some((page, next)))
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemStream<T::PageItem> {
        let stream = self.flat_map(|page| match page {
            Ok(page) => {
                let items = page.into_items().into_iter();
                futures::stream::iter(items.map(Ok::<T::PageItem, crate::Error>)).left_stream()
            }
            Err(e) => futures::stream::once(future::ready(Err(e))).right_stream(),
        });
        ItemStream {
            stream: Box::pin(stream),
        }
    }
}

impl<T> Stream for PageStream<T> {
    type Item = crate::Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of the items in all the pages returned by a list RPC.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_topic::client::Topic;
/// # async fn sample(topic: Topic) -> anyhow::Result<()> {
/// let mut items = topic.list_subscriptions().by_item();
/// while let Some(subscription) = items.next().await.transpose()? {
///     println!("{}", subscription.name());
/// }
/// # Ok(()) }
/// ```
#[pin_project]
pub struct ItemStream<T> {
    #[pin]
    stream: BoxStream<T>,
}

impl<T> ItemStream<T> {
    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T> Stream for ItemStream<T> {
    type Item = crate::Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestPage {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestPage {
        type PageItem = String;
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
        fn into_items(self) -> Vec<String> {
            self.items
        }
    }

    fn page(items: &[&str], token: &str) -> TestPage {
        TestPage {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    type Calls = Arc<Mutex<Vec<String>>>;

    fn fake(pages: Vec<crate::Result<TestPage>>) -> (PageStream<TestPage>, Calls) {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        let execute = move |token: String| {
            recorded.lock().unwrap().push(token);
            let next = pages.lock().unwrap().pop_front().unwrap();
            async move { next }
        };
        (PageStream::new("seed".to_string(), execute), calls)
    }

    #[tokio::test]
    async fn pages() -> anyhow::Result<()> {
        let (mut stream, calls) = fake(vec![
            Ok(page(&["a", "b"], "token1")),
            Ok(page(&["c"], "")),
        ]);
        let mut got = Vec::new();
        while let Some(page) = stream.next().await {
            got.push(page?.items);
        }
        assert_eq!(got, vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(*calls.lock().unwrap(), vec!["seed", "token1"]);
        Ok(())
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let (stream, _) = fake(vec![
            Ok(page(&["a", "b"], "token1")),
            Ok(page(&[], "token2")),
            Ok(page(&["c"], "")),
        ]);
        let mut items = stream.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await.transpose()? {
            got.push(item);
        }
        assert_eq!(got, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_stream() -> anyhow::Result<()> {
        let (mut stream, calls) = fake(vec![
            Ok(page(&["a"], "token1")),
            Err(crate::Error::io("simulated")),
        ]);
        assert!(stream.next().await.is_some_and(|r| r.is_ok()));
        assert!(stream.next().await.is_some_and(|r| r.is_err()));
        assert!(stream.next().await.is_none());
        assert_eq!(calls.lock().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn early_drop_stops_fetching() -> anyhow::Result<()> {
        let (stream, calls) = fake(vec![
            Ok(page(&["a", "b"], "token1")),
            Ok(page(&["c"], "")),
        ]);
        let mut items = stream.items();
        let first = items.next().await.transpose()?;
        assert_eq!(first.as_deref(), Some("a"));
        drop(items);
        assert_eq!(*calls.lock().unwrap(), vec!["seed"]);
        Ok(())
    }

    #[tokio::test]
    async fn lazy_until_polled() {
        let (stream, calls) = fake(vec![Ok(page(&["a"], ""))]);
        drop(stream);
        assert!(calls.lock().unwrap().is_empty());
    }
}
