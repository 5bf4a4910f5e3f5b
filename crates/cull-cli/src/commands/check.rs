use anyhow::bail;
use clap::Args;

use cull_rules::{MatcherManager, IGNORE_FILE};

use crate::commands::read_paths;

#[derive(Args)]
pub struct CheckArgs {
    /// Directory whose ignore file is consulted
    #[arg(long, default_value = ".")]
    root: String,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Paths relative to the root; read from stdin when omitted
    paths: Vec<String>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let manager = MatcherManager::new(&args.root);
    if !manager.found_match() {
        bail!("no {IGNORE_FILE} found in {}", args.root);
    }

    let paths = read_paths(args.paths)?;
    tracing::debug!(root = %manager.path(), count = paths.len(), "checking paths");

    if args.json {
        let entries: Vec<serde_json::Value> = paths
            .iter()
            .map(|path| {
                serde_json::json!({
                    "path": path,
                    "ignored": manager.matches(path),
                })
            })
            .collect();
        let output = serde_json::json!({
            "root": manager.path(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for path in &paths {
        let verdict = if manager.matches(path) { "ignored" } else { "kept" };
        println!("{verdict:>8}  {path}");
    }
    Ok(())
}
