//! Content checks over the built site and the project manifest.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::{CheckResult, CheckStatus};

/// A named regular expression that must match somewhere in a file.
pub struct PatternCheck {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const HTML_CHECKS: &[PatternCheck] = &[
    PatternCheck {
        name: "DOCTYPE",
        pattern: r"(?i)<!DOCTYPE html>",
    },
    PatternCheck {
        name: "Title tag",
        pattern: r"(?i)<title>.*TiL Microblog.*</title>",
    },
    PatternCheck {
        name: "CSS link",
        pattern: r#"<link.*href="/css/style\.css""#,
    },
    PatternCheck {
        name: "Post list",
        pattern: r#"class="post-list""#,
    },
    PatternCheck {
        name: "Theme toggle",
        pattern: r#"class="theme-toggle""#,
    },
    PatternCheck {
        name: "JavaScript",
        pattern: r"<script>",
    },
];

pub const CSS_CHECKS: &[PatternCheck] = &[
    PatternCheck {
        name: "CSS variables",
        pattern: r"--bg-primary",
    },
    PatternCheck {
        name: "Dark theme",
        pattern: r":root",
    },
    PatternCheck {
        name: "Light theme",
        pattern: r#"\[data-theme="light"\]"#,
    },
    PatternCheck {
        name: "Feed styles",
        pattern: r"\.post-list",
    },
    PatternCheck {
        name: "Theme toggle styles",
        pattern: r"\.theme-toggle",
    },
];

pub const REQUIRED_SCRIPTS: &[&str] = &[
    "start",
    "build",
    "fetch-latest",
    "fetch-notes",
    "import-notes",
    "publish",
];

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// One result per pattern, or a single failure when `path` can't be read.
pub fn patterns(group: &'static str, path: &Path, checks: &[PatternCheck]) -> Vec<CheckResult> {
    let Ok(content) = fs::read_to_string(path) else {
        return vec![CheckResult::new(
            group,
            file_label(path),
            CheckStatus::Fail,
            format!("could not read {}", file_label(path)),
        )];
    };

    checks
        .iter()
        .map(|check| match Regex::new(check.pattern) {
            Ok(regex) if regex.is_match(&content) => {
                CheckResult::new(group, check.name, CheckStatus::Pass, "found")
            }
            Ok(_) => CheckResult::new(group, check.name, CheckStatus::Fail, "missing"),
            Err(error) => CheckResult::new(group, check.name, CheckStatus::Fail, error.to_string()),
        })
        .collect()
}

/// One result per required npm script, or a single failure when the manifest
/// can't be read or parsed.
pub fn scripts(manifest: &Path) -> Vec<CheckResult> {
    let parsed = fs::read_to_string(manifest)
        .map_err(|error| error.to_string())
        .and_then(|json| serde_json::from_str::<serde_json::Value>(&json).map_err(|error| error.to_string()));

    let manifest_json = match parsed {
        Ok(json) => json,
        Err(error) => {
            return vec![CheckResult::new(
                "scripts",
                file_label(manifest),
                CheckStatus::Fail,
                format!("could not read {}: {error}", file_label(manifest)),
            )];
        }
    };

    let scripts = manifest_json.get("scripts");
    REQUIRED_SCRIPTS
        .iter()
        .map(|name| {
            let declared = scripts
                .and_then(|scripts| scripts.get(*name))
                .and_then(serde_json::Value::as_str)
                .is_some_and(|command| !command.is_empty());
            if declared {
                CheckResult::new("scripts", *name, CheckStatus::Pass, "exists")
            } else {
                CheckResult::new("scripts", *name, CheckStatus::Fail, "missing")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn statuses(results: &[CheckResult]) -> Vec<(&str, CheckStatus)> {
        results
            .iter()
            .map(|result| (result.name.as_str(), result.status))
            .collect()
    }

    #[test]
    fn every_pattern_compiles() {
        for check in HTML_CHECKS.iter().chain(CSS_CHECKS) {
            assert!(Regex::new(check.pattern).is_ok(), "{}", check.name);
        }
    }

    #[rstest]
    #[case("<title>TiL Microblog</title>", true)]
    #[case("<TITLE>Posts - til microblog</TITLE>", true)]
    #[case("<title>Other blog</title>", false)]
    fn title_check_is_case_insensitive(#[case] html: &str, #[case] expected: bool) {
        let regex = Regex::new(HTML_CHECKS[1].pattern).expect("pattern compiles");
        assert_eq!(regex.is_match(html), expected);
    }

    #[test]
    fn html_reports_each_missing_pattern() {
        let temp = TempDir::new().expect("tempdir should create");
        let index = temp.path().join("index.html");
        fs::write(&index, "<!doctype html><script></script>").expect("index");

        let results = patterns("html", &index, HTML_CHECKS);
        assert_eq!(
            statuses(&results),
            vec![
                ("DOCTYPE", CheckStatus::Pass),
                ("Title tag", CheckStatus::Fail),
                ("CSS link", CheckStatus::Fail),
                ("Post list", CheckStatus::Fail),
                ("Theme toggle", CheckStatus::Fail),
                ("JavaScript", CheckStatus::Pass),
            ]
        );
    }

    #[test]
    fn unreadable_file_is_a_single_failure() {
        let temp = TempDir::new().expect("tempdir should create");
        let results = patterns("css", &temp.path().join("style.css"), CSS_CHECKS);
        assert_eq!(statuses(&results), vec![("style.css", CheckStatus::Fail)]);
    }

    #[test]
    fn manifest_missing_scripts_are_failures() {
        let temp = TempDir::new().expect("tempdir should create");
        let manifest = temp.path().join("package.json");
        fs::write(&manifest, r#"{"scripts":{"start":"x","build":"y","publish":""}}"#).expect("manifest");

        let results = scripts(&manifest);
        assert_eq!(
            statuses(&results),
            vec![
                ("start", CheckStatus::Pass),
                ("build", CheckStatus::Pass),
                ("fetch-latest", CheckStatus::Fail),
                ("fetch-notes", CheckStatus::Fail),
                ("import-notes", CheckStatus::Fail),
                ("publish", CheckStatus::Fail),
            ]
        );
    }

    #[test]
    fn invalid_manifest_is_a_single_failure() {
        let temp = TempDir::new().expect("tempdir should create");
        let manifest = temp.path().join("package.json");
        fs::write(&manifest, "{ not json").expect("manifest");

        let results = scripts(&manifest);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Fail);
    }
}
