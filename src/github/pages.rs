use anyhow::Result;
use futures::stream::{self, Stream};
use tracing::info;

use serde_json::Value;

use crate::github::GistApi;

/// Page size requested from the listing endpoint
pub const PER_PAGE: u32 = 100;

/// Lazily pages through a user's gists, starting at page 1.
///
/// Each poll issues at most one request. The stream ends on the first empty
/// page (which is not yielded) or right after yielding an error.
pub fn gist_pages<'a, A>(api: &'a A, username: &'a str) -> impl Stream<Item = Result<Vec<Value>>> + 'a
where
    A: GistApi + ?Sized,
{
    stream::try_unfold(1u32, move |page| next_page(api, username, page))
}

async fn next_page<A>(api: &A, username: &str, page: u32) -> Result<Option<(Vec<Value>, u32)>>
where
    A: GistApi + ?Sized,
{
    let gists = api.list_gists(username, page, PER_PAGE).await?;
    if gists.is_empty() {
        return Ok(None);
    }

    info!("Fetched page {} with {} gists", page, gists.len());
    Ok(Some((gists, page + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use futures::{StreamExt, TryStreamExt};
    use std::sync::Mutex;

    /// Serves a fixed number of non-empty pages, optionally failing on one
    struct Paged {
        pages: u32,
        fail_on: Option<u32>,
        requested: Mutex<Vec<(u32, u32)>>,
    }

    impl Paged {
        fn new(pages: u32, fail_on: Option<u32>) -> Self {
            Self {
                pages,
                fail_on,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GistApi for Paged {
        async fn list_gists(&self, _user: &str, page: u32, per_page: u32) -> Result<Vec<Value>> {
            self.requested.lock().unwrap().push((page, per_page));
            if self.fail_on == Some(page) {
                return Err(anyhow!("boom"));
            }
            if page > self.pages {
                return Ok(Vec::new());
            }
            Ok(vec![serde_json::json!({}); 2])
        }

        async fn fetch_raw(&self, _url: &str) -> Result<String> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn stops_at_first_empty_page() {
        let api = Paged::new(3, None);
        let pages: Vec<Vec<Value>> = gist_pages(&api, "octocat").try_collect().await.unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(
            *api.requested.lock().unwrap(),
            [(1, PER_PAGE), (2, PER_PAGE), (3, PER_PAGE), (4, PER_PAGE)]
        );
    }

    #[tokio::test]
    async fn empty_account_yields_nothing() {
        let api = Paged::new(0, None);
        let pages: Vec<_> = gist_pages(&api, "nobody").collect().await;
        assert!(pages.is_empty());
    }

    #[tokio::test]
    async fn error_ends_the_stream() {
        let api = Paged::new(5, Some(2));
        let items: Vec<Result<Vec<Value>>> = gist_pages(&api, "octocat").collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
        assert_eq!(api.requested.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn is_lazy() {
        let api = Paged::new(5, None);
        let stream = gist_pages(&api, "octocat");
        futures::pin_mut!(stream);

        assert!(api.requested.lock().unwrap().is_empty());
        stream.next().await;
        assert_eq!(api.requested.lock().unwrap().len(), 1);
    }
}
