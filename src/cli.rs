// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: The tool is single purpose, so there are only global flags.

use clap::Parser;

#[derive(Parser)]
#[command(name = "ghcr-prune")]
#[command(about = "Delete the previous container image tag after a new one is published")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
