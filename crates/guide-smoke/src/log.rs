//! Run log - console output duplicated into a timestamped file
//!
//! The log is an explicit value handed to the startup code, the checks and
//! the reporter, not process-global state. Each run creates its own file
//! under the configured directory; lines are appended one at a time.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;

use crate::error::SmokeResult;

/// Console + file logger for one harness run
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Create the log directory and pick a timestamped file name for this
    /// run.
    pub fn create(dir: &Path) -> SmokeResult<Self> {
        std::fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("smoke-{stamp}.log"));
        Ok(Self { path })
    }

    /// Path of this run's log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Print a line to stdout and append it, timestamped, to the log file.
    /// Log-file write failures never abort a run.
    pub fn line(&self, message: &str) {
        println!("{message}");
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "[{stamp}] {message}");
        }
    }

    pub fn header(&self, text: &str) {
        let bar = "=".repeat(60);
        self.line(&format!("\n{}", bar.blue().bold()));
        self.line(&format!("{}", text.blue().bold()));
        self.line(&format!("{}\n", bar.blue().bold()));
    }

    pub fn success(&self, text: &str) {
        self.line(&format!("✅ {text}").green().to_string());
    }

    pub fn error(&self, text: &str) {
        self.line(&format!("❌ {text}").red().to_string());
    }

    pub fn warning(&self, text: &str) {
        self.line(&format!("⚠️  {text}").yellow().to_string());
    }

    pub fn info(&self, text: &str) {
        self.line(&format!("ℹ️  {text}").cyan().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_appended_with_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::create(dir.path()).unwrap();

        log.line("first");
        log.line("second");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_each_run_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::create(dir.path()).unwrap();
        assert!(log.path().starts_with(dir.path()));
        assert!(log
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("smoke-"));
    }
}
