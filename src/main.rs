/// Main entry point for the Habit Tracker server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use habit_tracker::{default_database_path, HabitTrackerServer, ServerConfig, SuccessRatePolicy};

/// Command line arguments for the Habit Tracker server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// How success rates are computed: "calendar" or "frequency"
    #[arg(long, default_value = "calendar")]
    success_rate: SuccessRatePolicy,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    // RUST_LOG wins over the command line flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("habit_tracker={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries the protocol
        .init();

    info!("Starting Habit Tracker server");

    let db_path = match args.database {
        Some(path) => path,
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let config = ServerConfig::new(db_path).with_success_rate_policy(args.success_rate);
    let server = HabitTrackerServer::new(config).await?;

    server.run().await?;

    info!("Habit Tracker server shutdown complete");
    Ok(())
}
