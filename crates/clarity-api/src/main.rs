//! Clarity Relay entry point.
//!
//! Binary name: `clarity`
//!
//! Parses CLI arguments, loads configuration, wires the storage and
//! inference collaborators, then starts the HTTP server.

mod http;
mod state;

use clap::Parser;
use clap_complete::{generate, Shell};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Relay chat requests to a hosted inference model.
#[derive(Parser)]
#[command(name = "clarity", version, about, long_about = None)]
struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the HTTP relay server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,clarity=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "clarity", &mut std::io::stdout());
            Ok(())
        }

        Commands::Serve { port, host } => serve(port, host).await,
    }
}

async fn serve(port: Option<u16>, host: Option<String>) -> anyhow::Result<()> {
    let data_dir = clarity_infra::config::resolve_data_dir();
    let config = clarity_infra::config::load_global_config(&data_dir).await;

    let api_token = std::env::var("CLARITY_API_TOKEN")
        .or_else(|_| std::env::var("CLOUDFLARE_API_TOKEN"))
        .map(SecretString::from)
        .map_err(|_| {
            anyhow::anyhow!(
                "no API token found: set CLARITY_API_TOKEN or CLOUDFLARE_API_TOKEN"
            )
        })?;

    let state = AppState::init(&config, api_token).await?;

    let host = host.unwrap_or_else(|| config.host.clone());
    let port = port.unwrap_or(config.port);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Clarity relay listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
