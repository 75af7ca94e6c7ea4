use serde::Deserialize;
use tree_fetch::Entry;

/// Response from GitHub's Contents API.
/// `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`
///
/// A directory path yields an array of entries; a file path yields the
/// file's own record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing {
    Many(Vec<ContentEntry>),
    Single(ContentEntry),
}

impl Listing {
    pub fn into_entries(self) -> Vec<Entry> {
        let raw = match self {
            Self::Many(entries) => entries,
            Self::Single(entry) => vec![entry],
        };
        raw.into_iter().map(ContentEntry::into_entry).collect()
    }
}

/// A single record in a contents listing.
#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub path: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl ContentEntry {
    pub fn into_entry(self) -> Entry {
        Entry::from_parts(
            &self.entry_type,
            self.path,
            self.download_url,
            self.content,
            self.encoding.as_deref(),
        )
    }
}
