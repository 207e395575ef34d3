//! Taskboard HTTP server.
//!
//! ```text
//! taskboard [--config <path>] [--bind <addr>]
//! ```
//!
//! Settings come from `taskboard.toml` and `TASKBOARD_*` environment
//! variables; see [`taskboard::config`].

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use taskboard::{config::Settings, server, telemetry};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Task-management REST API")]
struct Cli {
    /// Configuration file to read instead of `taskboard.toml`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.bind`.
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let mut settings = Settings::load_with_dotenv(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        settings.server.bind = bind;
    }

    telemetry::init(&settings.log)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting taskboard");

    if let Err(error) = server::run(settings).await {
        tracing::error!(%error, "server stopped with an error");
        return Err(error.into());
    }
    Ok(())
}
