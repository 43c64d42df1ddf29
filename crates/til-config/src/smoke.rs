//! Build smoke test settings.

use serde::{Deserialize, Serialize};

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_site_dir() -> String {
    "_site".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SmokeConfig {
    /// Shell command that builds the site, run with `sh -c`.
    #[serde(default = "default_build_command")]
    pub build_command: String,

    /// Build output directory, relative to the project root.
    #[serde(default = "default_site_dir")]
    pub site_dir: String,

    /// Project manifest declaring the npm scripts.
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            build_command: default_build_command(),
            site_dir: default_site_dir(),
            manifest: default_manifest(),
        }
    }
}
