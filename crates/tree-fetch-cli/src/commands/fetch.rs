use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tree_fetch::{Feedback, RepoCoordinates, TreeSnapshot};
use tree_fetch_github::{GitHubClientConfig, fetch_repository_tree};

use super::format::{self, OutputFormat};
use crate::config::AppConfig;

/// Everything the caller supplied for one run.
pub struct FetchRequest {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
    pub token: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Print feedback items to stderr.
pub fn print_feedback(feedback: &[Feedback]) {
    for item in feedback {
        eprintln!("{item}");
    }
}

fn client_config(request: &FetchRequest, app_config: &AppConfig) -> GitHubClientConfig {
    let coordinates = RepoCoordinates::new(&request.owner, &request.repo)
        .with_branch(&request.branch)
        .with_path(&request.path);

    let mut config = GitHubClientConfig::new(coordinates, &request.token);
    config.api_base_url = app_config.api_base_url.clone();
    config.timeout = app_config.timeout();
    config
}

/// Fetch the tree and write it out.
///
/// The rendered mapping is always written, empty when the fetch aborted, so
/// downstream consumers see the same contract as library callers. An
/// aborted fetch still exits with an error.
pub async fn run(request: FetchRequest, app_config: &AppConfig) -> Result<()> {
    let config = client_config(&request, app_config);
    let slug = config.coordinates.slug();

    eprintln!(
        "Fetching {slug}@{} from /{}...",
        config.coordinates.branch, config.coordinates.path
    );

    let snapshot = fetch_repository_tree(config).await;
    print_feedback(&snapshot.feedback);
    if let Some(message) = snapshot.failure_message() {
        eprintln!("error: {message}");
    }

    write_output(&snapshot, &request)?;

    if snapshot.aborted() {
        anyhow::bail!("fetch of {slug} aborted");
    }

    Ok(())
}

fn write_output(snapshot: &TreeSnapshot, request: &FetchRequest) -> Result<()> {
    let rendered = format::render(&snapshot.files, request.format)?;

    match &request.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")
        }
    }
}
