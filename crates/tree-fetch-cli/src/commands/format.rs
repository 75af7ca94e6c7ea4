use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object mapping each path to its content
    Json,
    /// One file path per line
    Paths,
}

/// Render fetched files in the requested format. Keys are sorted so repeated
/// runs against the same tree produce identical output.
pub fn render(files: &HashMap<String, String>, format: OutputFormat) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = files
        .iter()
        .map(|(path, content)| (path.as_str(), content.as_str()))
        .collect();

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&sorted)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Paths => Ok(sorted.keys().map(|p| format!("{p}\n")).collect()),
    }
}
