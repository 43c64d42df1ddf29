//! Notes source configuration.

use serde::{Deserialize, Serialize};

fn default_folder() -> String {
    "TiL".to_string()
}

const fn default_fetch_limit() -> u32 {
    10
}

fn default_osascript_bin() -> String {
    "osascript".to_string()
}

/// 10 MiB, enough for large note bodies.
const fn default_max_output_bytes() -> usize {
    10 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// Preferred Notes folder. Missing folders fall back to the default account.
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Maximum notes pulled by `fetch-notes`.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,

    /// AppleScript interpreter to invoke.
    #[serde(default = "default_osascript_bin")]
    pub osascript_bin: String,

    /// Output ceiling for one interpreter run.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            fetch_limit: default_fetch_limit(),
            osascript_bin: default_osascript_bin(),
            max_output_bytes: default_max_output_bytes(),
        }
    }
}
