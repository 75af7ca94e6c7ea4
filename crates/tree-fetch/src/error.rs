/// Errors that abort a tree fetch, or that a single file retrieval can hit.
///
/// When returned from [`ContentsApi::list`](crate::ContentsApi::list) every
/// variant is fatal to the run. When returned from
/// [`ContentsApi::download`](crate::ContentsApi::download) the traversal
/// downgrades it to a warning and skips the file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("path not found: '{path}'")]
    NotFound { path: String },

    #[error("authentication failed or access denied (HTTP {status})")]
    Auth { status: u16 },

    #[error("HTTP {status} while fetching '{path}'")]
    Http { path: String, status: u16 },

    #[error("network error: {0}")]
    Transport(String),

    #[error("malformed response for '{path}': {message}")]
    MalformedResponse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FetchError {
    /// Classify a non-success status for `path`.
    pub fn from_status(path: &str, status: u16) -> Self {
        match status {
            404 => Self::NotFound {
                path: path.to_owned(),
            },
            401 | 403 => Self::Auth { status },
            _ => Self::Http {
                path: path.to_owned(),
                status,
            },
        }
    }
}
