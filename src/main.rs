use clap::{Parser, Subcommand};
use core_types::Side;
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the meta-exchange application.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Plan(args) => handle_plan(args).await,
        Commands::Serve(args) => handle_serve(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A cross-venue best-execution planner for a single buy or sell request.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an execution plan from a folder of exchange snapshots.
    Plan(PlanArgs),
    /// Run the HTTP planning service.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct PlanArgs {
    /// Folder containing one JSON order book snapshot per exchange.
    #[arg(long)]
    orderbooks: PathBuf,

    /// The trade side: BUY or SELL (any casing).
    #[arg(long)]
    side: String,

    /// The base-asset quantity to buy or sell.
    #[arg(long)]
    quantity: Decimal,

    /// Optional path to write the plan JSON to instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides the port from config.toml.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the one-shot planning command: validate the request, load the
/// snapshot, run the engine, emit the plan as pretty JSON.
async fn handle_plan(args: PlanArgs) -> anyhow::Result<()> {
    // Reject bad requests before touching the filesystem.
    let side = Side::from_str(&args.side)?;
    if args.quantity <= Decimal::ZERO {
        anyhow::bail!("Invalid quantity: must be greater than 0, got {}", args.quantity);
    }

    let exchanges = snapshot::load_exchanges(&args.orderbooks).await?;
    let plan = planner::compute_plan(&exchanges, side, args.quantity)?;

    let json = serde_json::to_string_pretty(&plan)?;
    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &json).await?;
            println!("Plan written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Handles the `serve` subcommand: load the configuration and hand off to
/// the web-server crate.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    web_server::run_server(addr, config).await
}
