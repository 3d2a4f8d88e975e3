//! The fixed check sequence
//!
//! Each check issues HTTP GETs against the running application, logs what
//! it finds, and returns a [`CheckResult`]. Structural shortfalls are
//! recorded as issues without aborting the rest of the check; only the
//! homepage check retries, with a fixed delay between attempts.

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::config::HarnessConfig;
use crate::envelope::ApiEnvelope;
use crate::error::SmokeResult;
use crate::log::RunLog;

/// Markers accepted as the app's root container
const ROOT_MARKERS: &[&str] = &[
    r#"<div id="root">"#,
    r#"<div id='root'>"#,
    r#"id='root'"#,
    r#"id="root""#,
];

/// Vite dev-server markers accepted in place of a root container
const VITE_MARKERS: &[&str] = &["@vite/client", "/@react-refresh"];

/// Outcome of one check: a name, a verdict and the issues found along the
/// way. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub issues: Vec<String>,
}

impl CheckResult {
    fn new(name: &str, issues: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: issues.is_empty(),
            issues,
        }
    }
}

/// Runs the individual checks against one frontend/backend pair
pub struct Checker<'a> {
    client: reqwest::Client,
    config: &'a HarnessConfig,
    log: &'a RunLog,
}

impl<'a> Checker<'a> {
    pub fn new(config: &'a HarnessConfig, log: &'a RunLog) -> SmokeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config,
            log,
        })
    }

    /// Homepage: structural markers plus a cross-check against the backend
    /// listing endpoint. Retries non-200 responses and timeouts up to the
    /// configured count, sleeping a fixed delay in between.
    pub async fn homepage(&self) -> CheckResult {
        self.log.header("🏠 homepage check");
        let mut issues = Vec::new();

        // A zero retry budget still means one attempt
        let attempts = self.config.retry_count.max(1);
        for attempt in 1..=attempts {
            let last = attempt == attempts;

            match self.client.get(&self.config.frontend_url).send().await {
                Ok(resp) if resp.status() == StatusCode::OK => {
                    self.log.success("homepage reachable (HTTP 200)");
                    let html = resp.text().await.unwrap_or_default();
                    self.inspect_homepage(&html, &mut issues).await;
                    return CheckResult::new("homepage", issues);
                }
                Ok(resp) => {
                    let issue =
                        format!("homepage request failed: HTTP {}", resp.status().as_u16());
                    self.log.error(&issue);
                    issues.push(issue);
                    if last {
                        return CheckResult::new("homepage", issues);
                    }
                    self.log.info(&format!("retry {attempt}/{attempts}..."));
                    sleep(self.config.retry_delay).await;
                }
                Err(e) if e.is_timeout() => {
                    if last {
                        let issue = "homepage request timeout".to_string();
                        self.log.error(&issue);
                        issues.push(issue);
                        return CheckResult::new("homepage", issues);
                    }
                    self.log
                        .warning(&format!("request timeout, retry {attempt}/{attempts}..."));
                    sleep(self.config.retry_delay).await;
                }
                Err(e) => {
                    let issue = format!("homepage check error: {e}");
                    self.log.error(&issue);
                    issues.push(issue);
                    return CheckResult::new("homepage", issues);
                }
            }
        }

        CheckResult::new("homepage", issues)
    }

    async fn inspect_homepage(&self, html: &str, issues: &mut Vec<String>) {
        if html.contains("<title>") {
            self.log.success("page title present");
        } else {
            issues.push("missing page title".to_string());
            self.log.error("missing page title");
        }

        let has_root = ROOT_MARKERS.iter().any(|m| html.contains(m));
        let has_vite = VITE_MARKERS.iter().any(|m| html.contains(m));
        if has_root || has_vite {
            self.log.success("app root container present");
        } else {
            issues.push("missing app root container".to_string());
            self.log.error("missing app root container");
        }

        if html.contains("<script")
            && (html.contains(r#"type="module""#) || html.contains(".jsx") || html.contains(".js"))
        {
            self.log.success("scripts loading");
        } else {
            issues.push("scripts may not be loading".to_string());
            self.log.warning("scripts may not be loading");
        }

        // Cross-validate against the backend listing endpoint
        let url = self.config.api_endpoint("/activities");
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => {
                let body = resp.text().await.unwrap_or_default();
                match ApiEnvelope::parse(&body) {
                    Ok(envelope) if envelope.success => {
                        self.log.success(&format!(
                            "backend data API reachable ({} activities)",
                            envelope.item_count()
                        ));
                    }
                    _ => {
                        issues.push("backend API returned failure".to_string());
                        self.log.error("backend API returned failure");
                    }
                }
            }
            Ok(_) => {
                issues.push("backend data API unreachable".to_string());
                self.log.error("backend data API unreachable");
            }
            Err(e) => {
                let issue = format!("cannot reach backend API: {e}");
                self.log.error(&issue);
                issues.push(issue);
            }
        }
    }

    /// Calendar route: the client-side router serves the same shell, so a
    /// body with real content counts even without the root marker.
    pub async fn calendar(&self) -> CheckResult {
        self.log.header("📅 calendar route check");
        let mut issues = Vec::new();

        let url = self.config.frontend_route("/schedule");
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => {
                self.log.success("calendar page reachable");
                let html = resp.text().await.unwrap_or_default();

                if ROOT_MARKERS.iter().any(|m| html.contains(m)) {
                    self.log.success("app root container present");
                } else if html.len() > 100 {
                    self.log.success("page content present (client-side routing)");
                } else {
                    issues.push("calendar page content looks empty".to_string());
                    self.log.error("calendar page content looks empty");
                }

                if html.contains("<script") {
                    self.log.success("scripts loading");
                } else {
                    issues.push("scripts may not be loading".to_string());
                    self.log.warning("scripts may not be loading");
                }
            }
            Ok(resp) => {
                let issue =
                    format!("calendar page failed: HTTP {}", resp.status().as_u16());
                self.log.error(&issue);
                issues.push(issue);
            }
            Err(e) => {
                let issue = format!("calendar check error: {e}");
                self.log.error(&issue);
                issues.push(issue);
            }
        }

        CheckResult::new("calendar route", issues)
    }

    /// Admin page: a standalone HTML document with form elements
    pub async fn admin(&self) -> CheckResult {
        self.log.header("🔧 admin page check");
        let mut issues = Vec::new();

        let url = self.config.frontend_route("/admin.html");
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => {
                self.log.success("admin page reachable");
                let html = resp.text().await.unwrap_or_default();

                if html.contains("<!DOCTYPE html>") || html.contains("<html") {
                    self.log.success("standalone HTML page");
                } else {
                    issues.push("not a standalone HTML page".to_string());
                    self.log.warning("not a standalone HTML page");
                }

                let lower = html.to_lowercase();
                if lower.contains("<form") || lower.contains("<input") || lower.contains("<button")
                {
                    self.log.success("form elements present");
                } else {
                    issues.push("missing form elements".to_string());
                    self.log.error("missing form elements");
                }

                if html.contains("<script") {
                    self.log.success("scripts loading");
                } else {
                    issues.push("scripts may not be loading".to_string());
                    self.log.warning("scripts may not be loading");
                }
            }
            Ok(resp) => {
                let issue = format!("admin page failed: HTTP {}", resp.status().as_u16());
                self.log.error(&issue);
                issues.push(issue);
            }
            Err(e) => {
                let issue = format!("admin check error: {e}");
                self.log.error(&issue);
                issues.push(issue);
            }
        }

        CheckResult::new("admin page", issues)
    }

    /// API endpoints: each one is probed in order; a failing endpoint never
    /// skips the remaining ones.
    pub async fn api_endpoints(&self) -> CheckResult {
        self.log.header("🔌 API endpoint check");
        let mut issues = Vec::new();

        let endpoints = [
            ("/health", "health"),
            ("/activities", "activities"),
            ("/items", "items"),
        ];

        for (path, name) in endpoints {
            let url = self.config.api_endpoint(path);
            match self.client.get(&url).send().await {
                Ok(resp) if resp.status() == StatusCode::OK => {
                    let body = resp.text().await.unwrap_or_default();
                    match ApiEnvelope::parse(&body) {
                        Ok(envelope) if envelope.success => {
                            self.log
                                .success(&format!("{name}: ok ({} items)", envelope.item_count()));
                        }
                        Ok(_) => {
                            let issue = format!("{name}: API returned failure");
                            self.log.error(&issue);
                            issues.push(issue);
                        }
                        Err(reason) => {
                            let issue = format!("{name}: {reason}");
                            self.log.error(&issue);
                            issues.push(issue);
                        }
                    }
                }
                Ok(resp) => {
                    let issue = format!("{name}: HTTP {}", resp.status().as_u16());
                    self.log.error(&issue);
                    issues.push(issue);
                }
                Err(e) => {
                    let issue = format!("{name}: {e}");
                    self.log.error(&issue);
                    issues.push(issue);
                }
            }
        }

        CheckResult::new("API endpoints", issues)
    }

    /// Data consistency: required fields on the first three activities, a
    /// non-empty listing, and at least one distinct category. Envelope
    /// failures record a single issue and skip the remaining sub-checks.
    pub async fn data_consistency(&self) -> CheckResult {
        self.log.header("🔄 data consistency check");
        let mut issues = Vec::new();

        let url = self.config.api_endpoint("/activities");
        let body = match self.client.get(&url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => {
                resp.text().await.unwrap_or_default()
            }
            Ok(resp) => {
                let issue = format!(
                    "cannot fetch activity data: HTTP {}",
                    resp.status().as_u16()
                );
                self.log.error(&issue);
                issues.push(issue);
                return CheckResult::new("data consistency", issues);
            }
            Err(e) => {
                let issue = format!("data consistency check error: {e}");
                self.log.error(&issue);
                issues.push(issue);
                return CheckResult::new("data consistency", issues);
            }
        };

        // A missing or non-list `data` is a format error, not an empty
        // listing; the remaining sub-checks are skipped.
        let activities = match ApiEnvelope::parse(&body) {
            Ok(ApiEnvelope {
                success: true,
                data: Some(data),
            }) => data,
            _ => {
                issues.push("API response format invalid".to_string());
                self.log.error("API response format invalid");
                return CheckResult::new("data consistency", issues);
            }
        };
        let required_fields = ["id", "title", "category"];
        let mut field_checks_passed = 0;
        for activity in activities.iter().take(3) {
            if required_fields.iter().all(|f| activity.get(f).is_some()) {
                field_checks_passed += 1;
            } else {
                let id = activity
                    .get("id")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown");
                issues.push(format!("activity missing required fields: {id}"));
            }
        }
        self.log.success(&format!(
            "field check passed for {field_checks_passed} sampled activities"
        ));

        if activities.is_empty() {
            issues.push("activity data empty".to_string());
            self.log.error("activity data empty");
        } else {
            self.log
                .success(&format!("data volume ok ({} activities)", activities.len()));
        }

        let categories: std::collections::HashSet<&str> = activities
            .iter()
            .map(|a| a.get("category").and_then(|v| v.as_str()).unwrap_or("unknown"))
            .collect();
        if categories.is_empty() {
            issues.push("missing category data".to_string());
            self.log.error("missing category data");
        } else {
            self.log
                .success(&format!("categories ok ({} distinct)", categories.len()));
        }

        CheckResult::new("data consistency", issues)
    }
}
