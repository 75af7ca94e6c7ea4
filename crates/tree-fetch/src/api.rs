use crate::entry::Entry;
use crate::error::FetchError;

/// The two remote operations a tree fetch needs.
///
/// Implementations hold the repository coordinates and credential; the
/// traversal only passes repository paths and download URLs.
#[async_trait::async_trait]
pub trait ContentsApi: Send + Sync {
    /// List the children of `path` at the configured branch.
    ///
    /// When `path` is a file the implementation returns a one-element list
    /// holding that file.
    async fn list(&self, path: &str) -> Result<Vec<Entry>, FetchError>;

    /// Download a file's raw text from its direct-download URL.
    async fn download(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<T: ContentsApi + ?Sized> ContentsApi for std::sync::Arc<T> {
    async fn list(&self, path: &str) -> Result<Vec<Entry>, FetchError> {
        (**self).list(path).await
    }

    async fn download(&self, url: &str) -> Result<String, FetchError> {
        (**self).download(url).await
    }
}
