//! multiform - Multi-step form demo

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};
use multiform_web::ServerConfig;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "multiform",
    version,
    about = "Multi-step form demo",
    long_about = "Serves the Leptos multi-step form frontend and checks saved form payloads.\n\
                  \n\
                  Examples:\n\
                    multiform serve                    # Serve crates/multiform-web/dist on :3000\n\
                    multiform serve --port 8080        # Custom port\n\
                    multiform check form.json          # Validate a payload\n\
                    multiform check form.json --json   # Machine-readable result\n\
                  \n\
                  Frontend Workflow:\n\
                    cd crates/multiform-web && trunk build --release\n\
                    multiform serve\n\
                  \n\
                  Environment Variables:\n\
                    MULTIFORM_HOST / MULTIFORM_PORT / MULTIFORM_DIST\n\
                    MULTIFORM_NO_COLOR                 # Disable ANSI colors\n\
                    RUST_LOG                           # Log filter (default: multiform=info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "MULTIFORM_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the compiled web frontend
    Serve {
        /// Address to bind
        #[arg(long, env = "MULTIFORM_HOST", default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port for web server
        #[arg(long, env = "MULTIFORM_PORT", default_value = "3000")]
        port: u16,
        /// Trunk output directory
        #[arg(long, env = "MULTIFORM_DIST", default_value = "crates/multiform-web/dist")]
        dist: PathBuf,
    },
    /// Validate a JSON form payload and print the errors
    Check {
        /// Path to the payload file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.no_color);

    match cli.command {
        Command::Serve { host, port, dist } => {
            let config = ServerConfig {
                host,
                port,
                dist_dir: dist,
            };
            multiform_web::run(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file, json } => {
            let (output, valid) = check::run_check(&file, json, cli.no_color)?;
            println!("{}", output);
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Logs go to stderr so `check --json` output stays parseable
fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("multiform=info,multiform_core=info,multiform_web=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color),
        )
        .with(filter)
        .init();
}
