use std::collections::HashMap;
use std::sync::Mutex;

use crate::{ContentSource, ContentsApi, Entry, FetchError};

/// In-memory contents API for testing. Holds directory listings keyed by
/// path and raw file bodies keyed by download URL, and records every path
/// it was asked to list.
#[derive(Default)]
pub struct InMemoryContents {
    listings: HashMap<String, Vec<Entry>>,
    downloads: HashMap<String, String>,
    failures: HashMap<String, u16>,
    listed: Mutex<Vec<String>>,
}

impl InMemoryContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as a listable directory with no children.
    pub fn add_empty_dir(&mut self, path: &str) {
        self.listings.entry(path.to_owned()).or_default();
    }

    /// Append `entry` to the listing of `parent`.
    pub fn add_entry(&mut self, parent: &str, entry: Entry) {
        self.listings
            .entry(parent.to_owned())
            .or_default()
            .push(entry);
    }

    pub fn add_dir(&mut self, parent: &str, path: &str) {
        self.add_entry(
            parent,
            Entry::Directory {
                path: path.to_owned(),
            },
        );
        self.add_empty_dir(path);
    }

    pub fn add_inline_file(&mut self, parent: &str, path: &str, base64: &str) {
        self.add_entry(
            parent,
            Entry::File {
                path: path.to_owned(),
                source: Some(ContentSource::InlineBase64(base64.to_owned())),
            },
        );
    }

    pub fn add_download_file(&mut self, parent: &str, path: &str, url: &str, body: &str) {
        self.add_entry(
            parent,
            Entry::File {
                path: path.to_owned(),
                source: Some(ContentSource::DownloadUrl(url.to_owned())),
            },
        );
        self.downloads.insert(url.to_owned(), body.to_owned());
    }

    /// Make listing `path` fail with the given HTTP status.
    pub fn fail_listing(&mut self, path: &str, status: u16) {
        self.failures.insert(path.to_owned(), status);
    }

    /// Every path passed to `list`, in call order.
    pub fn listed_paths(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContentsApi for InMemoryContents {
    async fn list(&self, path: &str) -> Result<Vec<Entry>, FetchError> {
        self.listed.lock().unwrap().push(path.to_owned());

        if let Some(status) = self.failures.get(path) {
            return Err(FetchError::from_status(path, *status));
        }

        self.listings
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::from_status(path, 404))
    }

    async fn download(&self, url: &str) -> Result<String, FetchError> {
        self.downloads
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::from_status(url, 404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let api = InMemoryContents::new();
        let result = api.list("nowhere").await;
        assert!(matches!(result, Err(FetchError::NotFound { .. })));
        assert_eq!(api.listed_paths(), vec!["nowhere"]);
    }

    #[tokio::test]
    async fn add_dir_registers_child_listing() {
        let mut api = InMemoryContents::new();
        api.add_dir("", "src");

        let root = api.list("").await.unwrap();
        assert_eq!(root, vec![Entry::Directory { path: "src".into() }]);
        assert!(api.list("src").await.unwrap().is_empty());
    }
}
