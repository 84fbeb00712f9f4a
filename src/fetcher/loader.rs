use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::Earthquake;
use crate::fetcher::Fetcher;
use crate::parser::FeedParser;

/// Shared, immutable snapshot of one completed load.
pub type Earthquakes = Arc<Vec<Earthquake>>;

/// Fetch the feed and parse it. Failures on either side collapse to an
/// empty list.
pub async fn fetch_earthquakes(
    fetcher: &(dyn Fetcher + Send + Sync),
    parser: &FeedParser,
    url: &str,
) -> Vec<Earthquake> {
    let body = fetcher.fetch(url).await;
    parser.parse(&body)
}

/// Runs fetch + parse on a background task and publishes each result into a
/// single slot. A newer result always replaces the older one.
pub struct Loader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parser: FeedParser,
    url: String,
    tx: Arc<watch::Sender<Earthquakes>>,
    task: Option<JoinHandle<()>>,
}

/// Receiving side of a [`Loader`], polled from the UI loop.
pub struct LoaderHandle {
    rx: watch::Receiver<Earthquakes>,
}

impl Loader {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        parser: FeedParser,
        url: impl Into<String>,
    ) -> (Self, LoaderHandle) {
        let (tx, rx) = watch::channel(Arc::new(Vec::new()));
        let loader = Self {
            fetcher,
            parser,
            url: url.into(),
            tx: Arc::new(tx),
            task: None,
        };
        (loader, LoaderHandle { rx })
    }

    pub fn is_loading(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start a load unless one is already running. Returns whether a new
    /// load was started.
    pub fn load(&mut self) -> bool {
        if self.is_loading() {
            debug!("Load already in flight for {}", self.url);
            return false;
        }

        let fetcher = self.fetcher.clone();
        let parser = self.parser.clone();
        let url = self.url.clone();
        let tx = self.tx.clone();

        self.task = Some(tokio::spawn(async move {
            let quakes = fetch_earthquakes(fetcher.as_ref(), &parser, &url).await;
            info!("Loaded {} earthquakes from {}", quakes.len(), url);
            tx.send_replace(Arc::new(quakes));
        }));

        true
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl LoaderHandle {
    /// The latest result, if one arrived since the previous call.
    pub fn take_update(&mut self) -> Option<Earthquakes> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Wait for the next result.
    pub async fn next_update(&mut self) -> Option<Earthquakes> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
