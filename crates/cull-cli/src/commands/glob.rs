use clap::Args;

use cull_glob::{glob_match_with, MatchOptions};

use crate::commands::read_paths;

#[derive(Args)]
pub struct GlobArgs {
    /// The glob pattern to match against
    pattern: String,
    /// Fold ASCII case before comparing
    #[arg(long)]
    case_insensitive: bool,
    /// Keep wildcards from matching hidden entries
    #[arg(long)]
    protect_hidden: bool,
    /// Paths to test; read from stdin when omitted
    paths: Vec<String>,
}

pub fn run(args: GlobArgs) -> anyhow::Result<()> {
    let opts = MatchOptions {
        case_insensitive: args.case_insensitive,
        protect_hidden: args.protect_hidden,
    };
    for path in read_paths(args.paths)? {
        if glob_match_with(&path, &args.pattern, opts) {
            println!("{path}");
        }
    }
    Ok(())
}
