use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use tree_fetch::{ContentsApi, Entry, FetchError, RepoCoordinates, TreeSnapshot};

use crate::content::Listing;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const GITHUB_JSON: &str = "application/vnd.github.v3+json";
const APP_USER_AGENT: &str = "repo-tree-fetch";

/// Configuration for fetching one repository tree.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub coordinates: RepoCoordinates,
    pub token: String,
    pub api_base_url: Option<String>,
    /// Per-request timeout. `None` lets a request block indefinitely.
    pub timeout: Option<Duration>,
}

impl GitHubClientConfig {
    pub fn new(coordinates: RepoCoordinates, token: impl Into<String>) -> Self {
        Self {
            coordinates,
            token: token.into(),
            api_base_url: None,
            timeout: None,
        }
    }
}

/// GitHub Contents API client.
///
/// One `reqwest::Client` is built per instance and reused for every listing
/// and download. The `Authorization: token …` header is sent on every request.
pub struct GitHubContentsClient {
    client: reqwest::Client,
    api_base: Url,
    coordinates: RepoCoordinates,
}

impl GitHubContentsClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, FetchError> {
        let api_base_str = config.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE);
        let api_base = Url::parse(api_base_str)
            .map_err(|e| FetchError::Config(format!("invalid API base URL {api_base_str}: {e}")))?;

        if api_base.cannot_be_a_base() {
            return Err(FetchError::Config(format!(
                "API base URL {api_base_str} cannot carry a path"
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("token {}", config.token))
            .map_err(|e| FetchError::Config(format!("token is not a valid header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base,
            coordinates: config.coordinates,
        })
    }

    /// `{api_base}/repos/{owner}/{repo}/contents/{path}?ref={branch}`, with
    /// each path segment percent-encoded.
    fn contents_url(&self, path: &str) -> Url {
        let mut url = self.api_base.clone();

        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([
                    "repos",
                    self.coordinates.owner.as_str(),
                    self.coordinates.repo.as_str(),
                    "contents",
                ])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }

        url.query_pairs_mut()
            .append_pair("ref", &self.coordinates.branch);
        url
    }
}

#[async_trait::async_trait]
impl ContentsApi for GitHubContentsClient {
    async fn list(&self, path: &str) -> Result<Vec<Entry>, FetchError> {
        let response = self
            .client
            .get(self.contents_url(path))
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(path, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read listing body: {e}")))?;

        let listing: Listing =
            serde_json::from_slice(&body).map_err(|e| FetchError::MalformedResponse {
                path: path.to_owned(),
                message: e.to_string(),
            })?;

        Ok(listing.into_entries())
    }

    async fn download(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(url, status.as_u16()));
        }

        // Decode by hand: `Response::text` strips a leading byte-order mark
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read file body: {e}")))?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Fetch every file under the configured starting path.
///
/// Returns an empty snapshot with an error diagnostic when the client cannot
/// be built or the traversal aborts.
pub async fn fetch_repository_tree(config: GitHubClientConfig) -> TreeSnapshot {
    let start = config.coordinates.path.clone();

    match GitHubContentsClient::new(config) {
        Ok(client) => tree_fetch::fetch_tree(&client, &start).await,
        Err(e) => TreeSnapshot::from_failure(e),
    }
}
