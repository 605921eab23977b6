//! The browser session the pipeline drives.
//!
//! [`BrowserSession`] is the capability the core consumes: issue a search,
//! apply a sort order, follow a pagination link, and read back the currently
//! rendered page. One session is reused across the whole keyword batch, so at
//! most one in-flight "current page" exists at any time.
//!
//! [`HttpBrowserSession`] is the concrete implementation, driving the site's
//! URL parameters over plain HTTPS: a search is `GET {base}/search?q=<kw>`,
//! sorting re-issues the search with the listing's `s` parameter, and the
//! next-page control is followed by resolving its `href` against the current
//! URL. "Page has finished loading" means the response body was fully
//! received; the client timeout bounds every such wait so a stalled server
//! surfaces as a step failure instead of an indefinite hang.

use crate::errors::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Sort orders the result listing exposes. The pipeline always applies
/// [`SortOrder::NewestFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    /// Value of the listing's `s` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            SortOrder::Relevance => "0",
            SortOrder::NewestFirst => "3",
            SortOrder::OldestFirst => "4",
        }
    }
}

/// The page a session currently has rendered.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: Url,
    pub body: String,
}

/// One logical browser, reused across keywords.
pub trait BrowserSession {
    /// Issue a search for `keyword` and block until the results page has
    /// loaded.
    async fn submit_search(&mut self, keyword: &str) -> Result<()>;

    /// Re-order the current result listing and block until it has reloaded.
    async fn select_sort(&mut self, order: SortOrder) -> Result<()>;

    /// Follow a link whose `href` came off the current page.
    async fn follow_next(&mut self, href: &str) -> Result<()>;

    /// The currently rendered page, or [`Error::NoPage`] before the first
    /// navigation.
    fn page(&self) -> Result<&PageSnapshot>;
}

/// [`BrowserSession`] over a shared `reqwest` client.
pub struct HttpBrowserSession {
    client: Client,
    base: Url,
    current: Option<PageSnapshot>,
}

impl HttpBrowserSession {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("apnews_search/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base: Url::parse(base_url)?,
            current: None,
        })
    }

    /// The session's HTTP client, shared with collaborators that download
    /// artifacts so the whole run uses one connection pool.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    async fn load(&mut self, url: Url) -> Result<()> {
        debug!(%url, "Loading page");
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "Page loaded");
        self.current = Some(PageSnapshot { url, body });
        Ok(())
    }
}

impl BrowserSession for HttpBrowserSession {
    async fn submit_search(&mut self, keyword: &str) -> Result<()> {
        let url = search_url(&self.base, keyword)?;
        self.load(url).await
    }

    async fn select_sort(&mut self, order: SortOrder) -> Result<()> {
        let url = with_sort(&self.page()?.url, order);
        self.load(url).await
    }

    async fn follow_next(&mut self, href: &str) -> Result<()> {
        let url = self.page()?.url.join(href)?;
        self.load(url).await
    }

    fn page(&self) -> Result<&PageSnapshot> {
        self.current.as_ref().ok_or(Error::NoPage)
    }
}

fn search_url(base: &Url, keyword: &str) -> Result<Url> {
    let mut url = base.join("search")?;
    url.query_pairs_mut().append_pair("q", keyword);
    Ok(url)
}

/// The current URL with the sort parameter applied, replacing any previous
/// one and keeping the rest of the query intact.
fn with_sort(current: &Url, order: SortOrder) -> Url {
    let kept: Vec<(String, String)> = current
        .query_pairs()
        .filter(|(name, _)| name != "s")
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    let mut url = current.clone();
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (name, value) in &kept {
            query.append_pair(name, value);
        }
        query.append_pair("s", order.query_value());
    }
    url
}
