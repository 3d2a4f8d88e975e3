//! Smoke-test harness for the Chiang Mai Guide web app
//!
//! Verifies black-box availability of a running frontend/backend pair:
//! - optionally launches the dev server when the services are unreachable
//! - runs a fixed sequence of HTTP checks (homepage, calendar route, admin
//!   page, API endpoints, data consistency)
//! - aggregates pass/fail per check and prints a summary report with
//!   remediation hints
//!
//! Every check is independent; a failing check never skips the rest. All
//! console output is duplicated into a timestamped log file under the
//! configured log directory.

pub mod checks;
pub mod config;
pub mod envelope;
pub mod error;
pub mod log;
pub mod report;
pub mod runner;
pub mod startup;

pub use checks::{CheckResult, Checker};
pub use config::HarnessConfig;
pub use error::{SmokeError, SmokeResult};
pub use log::RunLog;
pub use runner::Harness;
