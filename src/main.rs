mod sync;

use clap::{Parser, Subcommand};
use plansync_asana::AsanaClient;
use plansync_core::config::{Config, Overrides};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "plansync",
    version,
    about = "Post daily task summaries onto the week's plan record"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the weekly comment sync.
    Run {
        /// Week start date (YYYY-MM-DD); overrides PLANSYNC_WEEK_START.
        #[arg(long)]
        week_start: Option<String>,
        /// Pause between daily writes, in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Show the resolved configuration without writing anything.
    Status {
        /// Week start date (YYYY-MM-DD); overrides PLANSYNC_WEEK_START.
        #[arg(long)]
        week_start: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Run {
            week_start,
            delay_ms,
        } => {
            let cfg = Config::from_env(&Overrides {
                week_start,
                delay_ms,
            })?;
            let client = Arc::new(AsanaClient::new(cfg.token.clone()));
            let report = sync::SyncJob::new(client, &cfg).run().await?;
            println!(
                "Synced week of {}: {} comment(s) created, {} updated.",
                cfg.window.start, report.created, report.updated
            );
        }
        Commands::Status { week_start } => {
            let cfg = Config::from_env(&Overrides {
                week_start,
                delay_ms: None,
            })?;
            println!("plansync — resolved configuration\n");
            println!("  workspace: {}", cfg.workspace_id);
            println!("  week:      {} → {} (exclusive)", cfg.window.start, cfg.window.end);
            println!("  delay:     {} ms between daily writes", cfg.delay_ms);
            println!("  token:     set ({} chars)", cfg.token.len());
        }
    }

    Ok(())
}
