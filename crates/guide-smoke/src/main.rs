//! smoke-test - end-to-end smoke tests for the Chiang Mai Guide app
//!
//! Checks a running frontend/backend pair on a handful of routes and API
//! endpoints, optionally auto-starting the dev server first. Exits 0 when
//! every check passed, 1 otherwise.

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use colored::Colorize;

use guide_smoke::config::{DEFAULT_API_URL, DEFAULT_FRONTEND_URL};
use guide_smoke::{Harness, HarnessConfig};

#[derive(Parser, Debug)]
#[command(name = "smoke-test")]
#[command(about = "Smoke tests for the Chiang Mai Guide frontend/backend pair")]
struct Args {
    /// Skip the data-consistency check
    #[arg(long)]
    fast: bool,

    /// Do not auto-start the dev server when the services are unreachable
    #[arg(long)]
    no_start: bool,

    /// Frontend base URL
    #[arg(long, env = "FRONTEND_URL", default_value = DEFAULT_FRONTEND_URL)]
    frontend_url: String,

    /// Backend API base URL
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory for run logs
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = HarnessConfig {
        frontend_url: args.frontend_url,
        api_url: args.api_url,
        log_dir: args.log_dir,
        fast: args.fast,
        auto_start: !args.no_start,
        ..Default::default()
    };

    let banner = "═".repeat(58);
    println!("{}", format!("╔{banner}╗").blue().bold());
    println!(
        "{}",
        "║      🏝️  Chiang Mai Guide - smoke tests                 ║"
            .blue()
            .bold()
    );
    println!("{}", format!("╚{banner}╝").blue().bold());

    let harness = Harness::new(config.clone())?;
    let log = harness.log();
    log.info(&format!("started: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    log.info(&format!("frontend: {}", config.frontend_url));
    log.info(&format!("backend: {}", config.api_url));
    log.info(&format!("log file: {}", log.path().display()));

    match harness.run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("❌ {e}").red());
            std::process::exit(1);
        }
    }
}
