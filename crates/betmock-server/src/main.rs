//! betmock - local stand-in for a betting platform's mobile API

use anyhow::Context;
use betmock_core::{EnvelopeStrategy, Settings};
use betmock_server::{create_app, load_gateway, ServerState};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[derive(Parser)]
#[command(name = "betmock")]
#[command(about = "Mock betting backend for running the mobile client locally")]
#[command(version)]
struct Cli {
    /// Settings file (YAML, JSON or JSONC)
    #[arg(short, long, env = "BETMOCK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory holding users.json, games.json and bets.json
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Response envelope strategy: per-route, legacy or modern
    #[arg(short, long)]
    envelope: Option<EnvelopeStrategy>,

    /// Seed for bet settlement
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Command-line values win over the settings file.
    fn apply(self, settings: &mut Settings) {
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(data_dir) = self.data_dir {
            settings.data_dir = data_dir;
        }
        if let Some(envelope) = self.envelope {
            settings.envelope = envelope;
        }
        if let Some(seed) = self.seed {
            settings.rng_seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).await?;
    cli.apply(&mut settings);

    let (gateway, counts) = load_gateway(&settings)
        .await
        .context("failed to load fixtures")?;
    let app = create_app(ServerState::new(gateway));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        users = counts.users,
        games = counts.games,
        bets = counts.bets,
        envelope = ?settings.envelope,
        "betmock listening"
    );
    info!("local:    http://localhost:{}", settings.port);
    info!("emulator: http://10.0.2.2:{}", settings.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from([
            "betmock",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--data-dir",
            "fixtures",
            "--envelope",
            "modern",
            "--seed",
            "5",
        ]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.bind_addr(), "127.0.0.1:8080");
        assert_eq!(settings.data_dir, PathBuf::from("fixtures"));
        assert_eq!(settings.envelope, EnvelopeStrategy::Modern);
        assert_eq!(settings.rng_seed, Some(5));
    }

    #[rstest]
    fn test_cli_rejects_unknown_envelope() {
        assert!(Cli::try_parse_from(["betmock", "--envelope", "xml"]).is_err());
    }
}
