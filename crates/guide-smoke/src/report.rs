//! Run report - aggregate counts, remediation hints, exit verdict

use chrono::Local;
use colored::Colorize;

use crate::checks::CheckResult;
use crate::log::RunLog;

/// Success rate as a percentage with one decimal place
pub fn success_rate(passed: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", passed as f64 / total as f64 * 100.0)
}

/// Print the summary report. Returns true when every check passed.
pub fn generate_report(results: &[CheckResult], log: &RunLog) -> bool {
    log.header("📊 test report");

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    let all_issues: Vec<&str> = results
        .iter()
        .flat_map(|r| r.issues.iter().map(String::as_str))
        .collect();

    log.line(&format!("total checks: {total}"));
    log.line(&format!("passed: {passed}").green().to_string());
    log.line(&format!("failed: {failed}").red().to_string());
    log.line(&format!("success rate: {}", success_rate(passed, total)));

    if failed == 0 {
        log.success("all checks passed, the app looks healthy");
    } else {
        log.error(&format!("{failed} check(s) failed"));
        suggest_fixes(&all_issues, log);
    }

    log.line(&format!("\n{}", "=".repeat(60)));
    log.line(&format!(
        "finished: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    log.line(&format!("log file: {}", log.path().display()));
    log.line(&"=".repeat(60));

    failed == 0
}

/// Remediation hints keyed by substring matching on issue text
pub fn suggest_fixes(issues: &[&str], log: &RunLog) {
    log.header("💡 suggested fixes");

    for issue in issues {
        let lower = issue.to_lowercase();
        log.info(&format!("• {issue}"));
        if issue.contains("500") || issue.contains("Internal Server Error") {
            log.info("  -> check the Vite build and dev-server output");
            log.info("  -> run: npm run dev");
        } else if lower.contains("timeout") || lower.contains("timed out") {
            log.info("  -> check that the services are running");
            log.info("  -> run: lsof -i:5173 -i:3000");
        } else if issue.contains("API") {
            log.info("  -> check the backend service");
            log.info("  -> run: curl http://localhost:3000/api/health");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate_one_decimal() {
        assert_eq!(success_rate(5, 5), "100.0%");
        assert_eq!(success_rate(3, 5), "60.0%");
        assert_eq!(success_rate(2, 3), "66.7%");
        assert_eq!(success_rate(0, 4), "0.0%");
    }

    #[test]
    fn test_success_rate_empty_run() {
        assert_eq!(success_rate(0, 0), "0.0%");
    }

    #[test]
    fn test_generate_report_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::create(dir.path()).unwrap();

        let pass = CheckResult {
            name: "homepage".to_string(),
            passed: true,
            issues: vec![],
        };
        let fail = CheckResult {
            name: "API endpoints".to_string(),
            passed: false,
            issues: vec!["health: HTTP 500".to_string()],
        };

        assert!(generate_report(&[pass.clone()], &log));
        assert!(!generate_report(&[pass, fail], &log));
    }
}
