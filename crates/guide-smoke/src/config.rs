//! Harness configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default frontend base URL (Vite dev server)
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Default backend API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Configuration for a single harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Frontend base URL (env: FRONTEND_URL)
    pub frontend_url: String,

    /// Backend API base URL (env: API_URL)
    pub api_url: String,

    /// Per-request timeout for the checks
    pub timeout: Duration,

    /// Shorter timeout used for the startup reachability probes
    pub probe_timeout: Duration,

    /// Attempts for the homepage check (the only retried check)
    pub retry_count: u32,

    /// Fixed sleep between homepage retry attempts (no backoff)
    pub retry_delay: Duration,

    /// Unconditional wait after launching the dev server before re-probing
    pub settle_delay: Duration,

    /// Directory for timestamped run logs
    pub log_dir: PathBuf,

    /// Command used to launch the application when unreachable
    pub start_command: Vec<String>,

    /// Skip the data-consistency check
    pub fast: bool,

    /// Launch the application when the services are unreachable
    pub auto_start: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(3),
            retry_count: 3,
            retry_delay: Duration::from_secs(2),
            settle_delay: Duration::from_secs(8),
            log_dir: PathBuf::from("logs"),
            start_command: vec!["npm".to_string(), "run".to_string(), "dev".to_string()],
            fast: false,
            auto_start: true,
        }
    }
}

impl HarnessConfig {
    /// Backend health endpoint used by the startup probes and the API check
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_url)
    }

    /// Join a path onto the API base URL
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Join a path onto the frontend base URL
    pub fn frontend_route(&self, path: &str) -> String {
        format!("{}{}", self.frontend_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins() {
        let config = HarnessConfig::default();
        assert_eq!(config.health_url(), "http://localhost:3000/api/health");
        assert_eq!(
            config.api_endpoint("/activities"),
            "http://localhost:3000/api/activities"
        );
        assert_eq!(
            config.frontend_route("/schedule"),
            "http://localhost:5173/schedule"
        );
    }

    #[test]
    fn test_frontend_route_strips_trailing_slash() {
        let config = HarnessConfig {
            frontend_url: "http://localhost:5173/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.frontend_route("/admin.html"),
            "http://localhost:5173/admin.html"
        );
    }
}
