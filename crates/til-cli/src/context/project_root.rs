use std::path::{Path, PathBuf};

use til_config::PROJECT_CONFIG_FILE;

/// Files that mark a blog project root.
const ROOT_MARKERS: &[&str] = &[PROJECT_CONFIG_FILE, "package.json"];

/// Walk upwards from `start` until a directory with `til.toml` or
/// `package.json` is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()))
        .map(Path::to_path_buf)
}
