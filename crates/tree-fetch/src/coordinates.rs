/// Branch used when the caller does not name one.
pub const DEFAULT_BRANCH: &str = "main";

/// Identifies the tree to fetch: which repository, which branch, and where
/// inside it the traversal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Starting path, already normalized. Empty means the repository root.
    pub path: String,
}

impl RepoCoordinates {
    /// Coordinates for the root of `owner/repo` on the default branch.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_owned(),
            path: String::new(),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Set the starting path. Leading and trailing separators are stripped.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = normalize_path(path).to_owned();
        self
    }

    /// `owner/repo`, for diagnostics.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Strip leading and trailing `/` from a repository path.
/// `"/"` and `""` both normalize to the root, `""`.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}
