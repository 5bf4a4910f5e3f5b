pub mod check;
pub mod glob;
pub mod rules;

use std::io::BufRead;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Test candidate paths against a directory's ignore file
    Check(check::CheckArgs),
    /// Show the parsed rule list for a directory
    Rules(rules::RulesArgs),
    /// Match paths against a single glob pattern
    Glob(glob::GlobArgs),
}

impl Commands {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Check(args) => check::run(args),
            Commands::Rules(args) => rules::run(args),
            Commands::Glob(args) => glob::run(args),
        }
    }
}

/// Positional paths, or one path per stdin line when none were given.
pub fn read_paths(args: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let stdin = std::io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.is_empty() {
            paths.push(line);
        }
    }
    Ok(paths)
}
