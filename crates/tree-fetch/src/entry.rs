/// Where a file's content can be obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Direct link to the raw bytes. Preferred over inline content.
    DownloadUrl(String),
    /// Base64 content embedded in the listing response.
    InlineBase64(String),
}

/// One child of a listed directory, or the single record returned when the
/// listed path is itself a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File {
        path: String,
        /// `None` when the listing carried neither a download URL nor
        /// base64 content.
        source: Option<ContentSource>,
    },
    Directory {
        path: String,
    },
    /// Symlinks, submodules, and anything else the traversal ignores.
    Other,
}

impl Entry {
    /// Build a typed entry from the loosely-typed fields of a listing record.
    ///
    /// A non-empty download URL wins over inline content. Inline content only
    /// counts when it is non-empty and tagged `base64`.
    pub fn from_parts(
        kind: &str,
        path: String,
        download_url: Option<String>,
        content: Option<String>,
        encoding: Option<&str>,
    ) -> Self {
        match kind {
            "dir" => Self::Directory { path },
            "file" => {
                let source = match (download_url, content) {
                    (Some(url), _) if !url.is_empty() => Some(ContentSource::DownloadUrl(url)),
                    (_, Some(content)) if !content.is_empty() && encoding == Some("base64") => {
                        Some(ContentSource::InlineBase64(content))
                    }
                    _ => None,
                };
                Self::File { path, source }
            }
            _ => Self::Other,
        }
    }
}
