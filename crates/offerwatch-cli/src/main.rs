mod notify;
mod pipeline;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "offerwatch")]
#[command(about = "Watches a storefront catalog for limited-time offer changes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog, diff against the stored snapshot, persist and
    /// notify on change, and print the report.
    Run,
    /// Print the report for the stored snapshot without fetching.
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = offerwatch_core::load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Show) => pipeline::show(&config),
        Some(Commands::Run) | None => pipeline::run(&config).await,
    }
}
