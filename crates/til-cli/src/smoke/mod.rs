//! Post-build validation of the generated site.
//!
//! Every check runs even when an earlier one failed; the report carries each
//! outcome and [`SmokeReport::passed`] decides the exit status.

mod checks;

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use til_config::SmokeConfig;

use checks::{CSS_CHECKS, HTML_CHECKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub group: &'static str,
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckResult {
    fn new(group: &'static str, name: impl Into<String>, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            group,
            name: name.into(),
            status,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl SmokeReport {
    fn from_checks(checks: Vec<CheckResult>) -> Self {
        let passed = !checks.iter().any(|check| check.status == CheckStatus::Fail);
        Self { passed, checks }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|check| check.status == status).count()
    }
}

pub struct SmokeRunner {
    root: PathBuf,
    config: SmokeConfig,
    skip_build: bool,
}

impl SmokeRunner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: SmokeConfig, skip_build: bool) -> Self {
        Self {
            root: root.into(),
            config,
            skip_build,
        }
    }

    fn site_dir(&self) -> PathBuf {
        self.root.join(&self.config.site_dir)
    }

    /// Run all six checks in order.
    pub fn run(&self) -> SmokeReport {
        let site = self.site_dir();
        let index = site.join("index.html");
        let stylesheet = site.join("css").join("style.css");

        let mut checks = vec![self.build()];
        checks.extend(self.critical_files(&[index.as_path(), stylesheet.as_path()]));
        checks.push(posts(&site.join("posts")));
        checks.extend(checks::patterns("html", &index, HTML_CHECKS));
        checks.extend(checks::patterns("css", &stylesheet, CSS_CHECKS));
        checks.extend(checks::scripts(&self.root.join(&self.config.manifest)));

        let report = SmokeReport::from_checks(checks);
        tracing::debug!(
            passed = report.passed,
            failed = report.count(CheckStatus::Fail),
            "smoke test finished"
        );
        report
    }

    fn build(&self) -> CheckResult {
        let command = &self.config.build_command;
        if self.skip_build {
            return CheckResult::new("build", command.as_str(), CheckStatus::Skipped, "--skip-build");
        }

        tracing::debug!(%command, root = %self.root.display(), "running build");
        match Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.root)
            .output()
        {
            Ok(output) if output.status.success() => {
                CheckResult::new("build", command.as_str(), CheckStatus::Pass, "build completed")
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let detail = stderr
                    .lines()
                    .rev()
                    .find(|line| !line.trim().is_empty())
                    .map_or_else(|| format!("build failed ({})", output.status), str::to_string);
                CheckResult::new("build", command.as_str(), CheckStatus::Fail, detail)
            }
            Err(error) => CheckResult::new(
                "build",
                command.as_str(),
                CheckStatus::Fail,
                format!("could not run build: {error}"),
            ),
        }
    }

    fn critical_files(&self, files: &[&Path]) -> Vec<CheckResult> {
        files
            .iter()
            .map(|&path| {
                let name = path
                    .strip_prefix(&self.root)
                    .unwrap_or(path)
                    .display()
                    .to_string();
                if path.is_file() {
                    CheckResult::new("files", name, CheckStatus::Pass, "exists")
                } else {
                    CheckResult::new("files", name, CheckStatus::Fail, "missing")
                }
            })
            .collect()
    }
}

/// An empty posts directory is fine for a new site.
fn posts(dir: &Path) -> CheckResult {
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let count = entries.filter_map(Result::ok).count();
            if count == 0 {
                CheckResult::new("posts", "posts", CheckStatus::Warn, "no posts found")
            } else {
                CheckResult::new("posts", "posts", CheckStatus::Pass, format!("found {count} post(s)"))
            }
        }
        Err(_) => CheckResult::new("posts", "posts", CheckStatus::Fail, "posts directory missing"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Home | TiL Microblog</title>
  <link rel="stylesheet" href="/css/style.css">
</head>
<body>
  <button class="theme-toggle">◐</button>
  <ul class="post-list"></ul>
  <script>document.documentElement.dataset.theme = "dark";</script>
</body>
</html>
"#;

    const STYLE_CSS: &str = r#":root { --bg-primary: #111; }
[data-theme="light"] { --bg-primary: #fff; }
.post-list { list-style: none; }
.theme-toggle { border: 0; }
"#;

    const PACKAGE_JSON: &str = r#"{
  "scripts": {
    "start": "eleventy --serve",
    "build": "eleventy",
    "fetch-latest": "til fetch-latest",
    "fetch-notes": "til fetch-notes",
    "import-notes": "til import-notes",
    "publish": "npm run build && git push"
  }
}"#;

    fn healthy_site() -> TempDir {
        let temp = TempDir::new().expect("tempdir should create");
        let site = temp.path().join("_site");
        fs::create_dir_all(site.join("css")).expect("css dir");
        fs::create_dir_all(site.join("posts").join("2025-10-22-hello")).expect("post dir");
        fs::write(site.join("index.html"), INDEX_HTML).expect("index");
        fs::write(site.join("css").join("style.css"), STYLE_CSS).expect("css");
        fs::write(temp.path().join("package.json"), PACKAGE_JSON).expect("manifest");
        temp
    }

    fn runner(root: &Path, build_command: &str, skip_build: bool) -> SmokeRunner {
        SmokeRunner::new(
            root,
            SmokeConfig {
                build_command: build_command.to_string(),
                ..SmokeConfig::default()
            },
            skip_build,
        )
    }

    #[cfg(unix)]
    #[test]
    fn healthy_site_passes_every_check() {
        let site = healthy_site();
        let report = runner(site.path(), "true", false).run();

        assert!(report.passed(), "{:#?}", report.checks);
        assert_eq!(report.count(CheckStatus::Pass), report.checks.len());
        // build + 2 files + posts + 6 html + 5 css + 6 scripts
        assert_eq!(report.checks.len(), 21);
    }

    #[cfg(unix)]
    #[test]
    fn failed_build_fails_but_other_checks_still_run() {
        let site = healthy_site();
        let report = runner(site.path(), "echo broken >&2; exit 3", false).run();

        assert!(!report.passed());
        assert_eq!(report.checks[0].status, CheckStatus::Fail);
        assert_eq!(report.checks[0].detail, "broken");
        assert_eq!(report.count(CheckStatus::Fail), 1);
    }

    #[cfg(unix)]
    #[test]
    fn build_runs_in_project_root() {
        let site = healthy_site();
        let report = runner(site.path(), "test -f package.json", false).run();
        assert_eq!(report.checks[0].status, CheckStatus::Pass);
    }

    #[test]
    fn skip_build_records_skipped() {
        let site = healthy_site();
        let report = runner(site.path(), "false", true).run();

        assert_eq!(report.checks[0].status, CheckStatus::Skipped);
        assert!(report.passed());
    }

    #[test]
    fn empty_posts_directory_is_only_a_warning() {
        let site = healthy_site();
        let posts = site.path().join("_site").join("posts");
        fs::remove_dir_all(&posts).expect("remove posts");
        fs::create_dir(&posts).expect("recreate empty posts");

        let report = runner(site.path(), "false", true).run();
        assert!(report.passed());
        assert_eq!(report.count(CheckStatus::Warn), 1);
    }

    #[test]
    fn missing_posts_directory_fails() {
        let site = healthy_site();
        fs::remove_dir_all(site.path().join("_site").join("posts")).expect("remove posts");

        let report = runner(site.path(), "false", true).run();
        assert!(!report.passed());
    }

    #[test]
    fn missing_site_fails_file_pattern_checks() {
        let temp = TempDir::new().expect("tempdir should create");
        fs::write(temp.path().join("package.json"), PACKAGE_JSON).expect("manifest");

        let report = runner(temp.path(), "false", true).run();

        assert!(!report.passed());
        let failed_groups = report
            .checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .map(|check| check.group)
            .collect::<Vec<_>>();
        assert_eq!(failed_groups, vec!["files", "files", "posts", "html", "css"]);
    }
}
