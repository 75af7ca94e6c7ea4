mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands::format::OutputFormat;

#[derive(Parser)]
#[command(name = "repo-tree-fetch")]
#[command(about = "Download the text of every file under a path in a GitHub repository")]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// Branch to read (defaults to the configured default branch, then "main")
    #[arg(long)]
    branch: Option<String>,
    /// Starting path inside the repository (defaults to the root)
    #[arg(long, default_value = "")]
    path: String,
    /// Access token (defaults to $GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,
    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = config::load_config();

    let token = cli
        .token
        .or_else(github_token)
        .ok_or_else(|| anyhow::anyhow!("no token given; pass --token or set GITHUB_TOKEN"))?;

    let request = commands::fetch::FetchRequest {
        owner: cli.owner,
        repo: cli.repo,
        branch: cli.branch.unwrap_or_else(|| app_config.default_branch.clone()),
        path: cli.path,
        token,
        output: cli.output,
        format: cli.format,
    };

    commands::fetch::run(request, &app_config).await
}
