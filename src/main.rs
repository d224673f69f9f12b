// ABOUTME: Entry point for the ghcr-prune CLI application.
// ABOUTME: Runs the list / select / delete pipeline against one container.

mod cli;

use clap::Parser;
use cli::Cli;
use ghcr_prune::config::Config;
use ghcr_prune::error::Result;
use ghcr_prune::registry::RegistryClient;
use ghcr_prune::select::find_previous_version;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// List the container's versions, pick the previous tag, delete it.
async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = RegistryClient::new(&config.user, &config.token)?;

    println!("Fetching all versions of {}...", config.container_path());
    let versions = client
        .list_versions(&config.org, &config.container_name)
        .await?;
    println!("  → Found {} version(s)", versions.len());

    println!("Looking for the previous tag...");
    let Some(previous) = find_previous_version(&versions, &config.unique_tag) else {
        // Only the current tag exists, e.g. on the first push of a branch.
        println!(
            "  ✓ No previous tag for {}; nothing to clean up",
            config.container_path()
        );
        return Ok(());
    };

    println!(
        "Deleting the previous image with tag {} (version id {})...",
        previous.tag, previous.id
    );
    client
        .delete_version(&config.org, &config.container_name, previous.id)
        .await?;
    println!("  ✓ Previous container deleted");

    Ok(())
}
