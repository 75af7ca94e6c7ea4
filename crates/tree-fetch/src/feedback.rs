/// Non-fatal events from a tree fetch.
///
/// The fetcher never prints. Callers decide how to present these (the CLI
/// writes them to stderr). A fatal error is not feedback; it is carried in
/// [`TreeSnapshot::failure`](crate::TreeSnapshot::failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A file was left out of the mapping; the run continued.
    Skipped { path: String, reason: String },
    /// The traversal drained its queue.
    Completed {
        files: usize,
        listings: usize,
        skipped: usize,
    },
}

impl Feedback {
    pub fn skipped(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Skipped {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped { path, reason } => write!(f, "warning: skipping {path}: {reason}"),
            Self::Completed {
                files,
                listings,
                skipped,
            } => write!(
                f,
                "fetched {files} files from {listings} listings ({skipped} skipped)"
            ),
        }
    }
}
