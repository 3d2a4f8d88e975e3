//! Harness orchestration - startup, fixed check sequence, report

use crate::checks::{CheckResult, Checker};
use crate::config::HarnessConfig;
use crate::error::SmokeResult;
use crate::log::RunLog;
use crate::{report, startup};

/// One smoke-test run against a frontend/backend pair
pub struct Harness {
    config: HarnessConfig,
    log: RunLog,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> SmokeResult<Self> {
        let log = RunLog::create(&config.log_dir)?;
        Ok(Self { config, log })
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    /// Full run: make sure the services are up, execute the checks, print
    /// the report. Returns whether every check passed.
    pub async fn run(&self) -> SmokeResult<bool> {
        startup::ensure_running(&self.config, &self.log).await?;
        let results = self.run_checks().await?;
        Ok(report::generate_report(&results, &self.log))
    }

    /// The fixed check sequence. Checks are independent: a failing check
    /// never skips the ones after it. Fast mode drops the data-consistency
    /// check.
    pub async fn run_checks(&self) -> SmokeResult<Vec<CheckResult>> {
        let checker = Checker::new(&self.config, &self.log)?;

        let mut results = vec![
            checker.homepage().await,
            checker.calendar().await,
            checker.admin().await,
            checker.api_endpoints().await,
        ];
        if !self.config.fast {
            results.push(checker.data_consistency().await);
        }

        Ok(results)
    }
}
