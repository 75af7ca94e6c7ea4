pub mod client;
pub mod content;

pub use client::{GitHubClientConfig, GitHubContentsClient, fetch_repository_tree};
