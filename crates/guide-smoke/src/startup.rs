//! Service startup - probing the frontend/backend pair and optionally
//! launching the dev server

use std::process::{Command, Stdio};

use tokio::time::sleep;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{SmokeError, SmokeResult};
use crate::log::RunLog;

/// Whether a URL answers HTTP 200 within the probe timeout
pub async fn probe(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(resp) => resp.status() == reqwest::StatusCode::OK,
        Err(e) => {
            debug!("probe {} failed: {}", url, e);
            false
        }
    }
}

/// Make sure both services are reachable, launching the dev server once if
/// allowed. Returns an error when the run cannot proceed.
pub async fn ensure_running(config: &HarnessConfig, log: &RunLog) -> SmokeResult<()> {
    log.header("🚀 service startup");

    let client = reqwest::Client::builder()
        .timeout(config.probe_timeout)
        .build()?;

    let frontend_up = probe(&client, &config.frontend_url).await;
    let backend_up = probe(&client, &config.health_url()).await;

    if frontend_up && backend_up {
        log.info("services already running");
        return Ok(());
    }

    if !config.auto_start {
        return Err(SmokeError::Startup(
            "services are not reachable and auto-start is disabled (--no-start)".to_string(),
        ));
    }

    log.warning("services not running, attempting auto-start...");
    spawn_dev_server(config, log)?;

    log.info("waiting for services to settle...");
    sleep(config.settle_delay).await;

    let frontend_up = probe(&client, &config.frontend_url).await;
    let backend_up = probe(&client, &config.health_url()).await;

    if frontend_up && backend_up {
        log.success("services started");
        Ok(())
    } else {
        Err(SmokeError::Startup(format!(
            "services did not come up; start them manually with: {}",
            config.start_command.join(" ")
        )))
    }
}

/// Launch the dev server as a detached background process. The child is
/// intentionally left running when the harness exits.
fn spawn_dev_server(config: &HarnessConfig, log: &RunLog) -> SmokeResult<()> {
    let (program, args) = config
        .start_command
        .split_first()
        .ok_or_else(|| SmokeError::Startup("start command is empty".to_string()))?;

    log.info(&format!("launching: {}", config.start_command.join(" ")));

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| SmokeError::Startup(format!("failed to launch {program}: {e}")))?;

    Ok(())
}
