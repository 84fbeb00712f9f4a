pub mod http_fetcher;
pub mod loader;

use async_trait::async_trait;

/// Retrieves the raw feed body for a URL.
///
/// Implementations never fail past this boundary: any problem is logged and
/// reported as an empty string.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> String;
}
