use std::sync::Arc;

use crate::app::Result;
use crate::config::FeedConfig;
use crate::domain::Earthquake;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::loader::{fetch_earthquakes, Loader, LoaderHandle};
use crate::fetcher::Fetcher;
use crate::parser::FeedParser;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub parser: FeedParser,
    pub feed_url: String,
}

impl AppContext {
    pub fn new(feed: &FeedConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_timeouts(feed.connect_timeout(), feed.read_timeout())?;
        Ok(Self::with_fetcher(Arc::new(fetcher), feed.url.clone()))
    }

    /// Wire up an arbitrary fetcher, e.g. a canned one in tests.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher + Send + Sync>, feed_url: String) -> Self {
        Self {
            fetcher,
            parser: FeedParser::new(),
            feed_url,
        }
    }

    /// Fetch and parse the feed once, in the caller's task.
    pub async fn fetch_earthquakes(&self) -> Vec<Earthquake> {
        fetch_earthquakes(self.fetcher.as_ref(), &self.parser, &self.feed_url).await
    }

    /// Background loader for the configured feed.
    pub fn loader(&self) -> (Loader, LoaderHandle) {
        Loader::new(self.fetcher.clone(), self.parser.clone(), self.feed_url.clone())
    }
}
