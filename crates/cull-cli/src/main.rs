use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "cull", version, about = "Gitignore-style ignore-rule matching")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    cli.command.run()
}
