use async_trait::async_trait;

use crate::gif::{CatalogResult, GifEntry};
use crate::ids::{GifId, UserId};

/// Remote GIF catalog.
///
/// 远程 GIF 目录端口。
///
/// # Contract
///
/// No method returns an error or panics on a transport problem. Non-2xx
/// statuses, network failures and malformed bodies all come back as
/// `CatalogResult { succeeded: false, error_message: Some(..) }`.
///
/// `user` is optional and additive: `None` broadens the request to all
/// users instead of failing it.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list(&self, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>>;

    async fn search(&self, query: &str, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>>;

    /// Creates an entry from raw GIF bytes. The implementation transcodes the
    /// bytes before building the request body.
    async fn upload(
        &self,
        title: &str,
        tags: &[String],
        payload: &[u8],
        user: Option<&UserId>,
    ) -> CatalogResult<GifEntry>;

    /// Deletes one entry. The payload, when present, is the deleted entry.
    async fn remove(&self, id: &GifId, user: Option<&UserId>) -> CatalogResult<GifEntry>;

    /// Liveness probe. The payload is the server's status message.
    async fn health(&self) -> CatalogResult<String>;

    /// Turns a catalog-relative entry url into an absolute one.
    fn resolve_url(&self, url: &str) -> String;
}
