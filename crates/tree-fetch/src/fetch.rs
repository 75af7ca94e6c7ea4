use std::collections::{HashMap, VecDeque};

use crate::api::ContentsApi;
use crate::coordinates::normalize_path;
use crate::decode::decode_base64_text;
use crate::entry::{ContentSource, Entry};
use crate::error::FetchError;
use crate::feedback::Feedback;

/// Outcome of a tree fetch.
#[derive(Debug, Clone, Default)]
pub struct TreeSnapshot {
    /// Repository-relative file path to decoded text.
    pub files: HashMap<String, String>,
    /// Skipped files and the run summary.
    pub feedback: Vec<Feedback>,
    /// Set when a listing failed and `files` was discarded.
    pub failure: Option<FetchError>,
}

impl TreeSnapshot {
    /// True when the run was aborted and `files` was discarded.
    pub fn aborted(&self) -> bool {
        self.failure.is_some()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Feedback> {
        self.feedback.iter().filter(|f| f.is_skip())
    }

    /// An empty snapshot recording a run-fatal error.
    pub fn from_failure(failure: FetchError) -> Self {
        Self {
            files: HashMap::new(),
            feedback: Vec::new(),
            failure: Some(failure),
        }
    }

    /// Human-readable diagnostic for the fatal error, if any.
    pub fn failure_message(&self) -> Option<String> {
        self.failure.as_ref().map(abort_message)
    }
}

/// Fetch every file reachable from `start_path`.
///
/// Any listing failure aborts the run: the partial mapping is discarded and
/// the snapshot comes back with no files and the error in `failure`. Use
/// [`try_fetch_tree`] to get the error as a value instead.
pub async fn fetch_tree(api: &dyn ContentsApi, start_path: &str) -> TreeSnapshot {
    match try_fetch_tree(api, start_path).await {
        Ok(snapshot) => snapshot,
        Err(failure) => TreeSnapshot::from_failure(failure),
    }
}

/// Breadth-first traversal from `start_path`.
///
/// Directories are listed one at a time in the order they were discovered.
/// File-level failures become warnings on the snapshot; listing failures are
/// returned as the error.
pub async fn try_fetch_tree(
    api: &dyn ContentsApi,
    start_path: &str,
) -> Result<TreeSnapshot, FetchError> {
    let mut queue = VecDeque::from([normalize_path(start_path).to_owned()]);
    let mut files = HashMap::new();
    let mut feedback = Vec::new();
    let mut listings = 0usize;
    let mut skipped = 0usize;

    while let Some(current) = queue.pop_front() {
        let entries = api.list(&current).await?;
        listings += 1;

        for entry in entries {
            match entry {
                Entry::Directory { path } => queue.push_back(path),
                Entry::File { path, source } => match retrieve(api, source).await {
                    Ok(content) => {
                        files.entry(path).or_insert(content);
                    }
                    Err(reason) => {
                        skipped += 1;
                        feedback.push(Feedback::skipped(path, reason));
                    }
                },
                Entry::Other => {}
            }
        }
    }

    feedback.push(Feedback::Completed {
        files: files.len(),
        listings,
        skipped,
    });

    Ok(TreeSnapshot {
        files,
        feedback,
        failure: None,
    })
}

async fn retrieve(api: &dyn ContentsApi, source: Option<ContentSource>) -> Result<String, String> {
    match source {
        Some(ContentSource::DownloadUrl(url)) => api
            .download(&url)
            .await
            .map_err(|e| format!("download from {url} failed: {e}")),
        Some(ContentSource::InlineBase64(encoded)) => {
            decode_base64_text(&encoded).map_err(|e| e.to_string())
        }
        None => Err("no download URL or base64 content in listing".to_owned()),
    }
}

fn abort_message(failure: &FetchError) -> String {
    match failure {
        FetchError::NotFound { path } if path.is_empty() => {
            "repository or branch not found; aborting fetch".to_owned()
        }
        FetchError::NotFound { path } => {
            format!("repository or path '{path}' not found; aborting fetch")
        }
        FetchError::Auth { status } => format!(
            "authentication failed or access denied (HTTP {status}); check the token and its permissions"
        ),
        FetchError::Http { path, status } => {
            format!("failed to list '{path}': HTTP {status}; aborting fetch")
        }
        FetchError::Transport(message) => {
            format!("could not reach the contents API: {message}")
        }
        FetchError::MalformedResponse { path, message } => {
            format!("could not decode listing for '{path}': {message}")
        }
        FetchError::Config(message) => format!("invalid configuration: {message}"),
    }
}
