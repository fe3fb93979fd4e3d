//! Reference directory resolution.

use std::path::{Path, PathBuf};

use genemap_model::Species;

/// Environment variable for overriding the reference table directory.
pub const REFERENCE_ENV_VAR: &str = "GENEMAP_REFERENCE_DIR";

const BUNDLED_DIR_NAME: &str = "reference";

/// Get the default reference root directory.
///
/// Resolution order:
/// 1. `GENEMAP_REFERENCE_DIR` environment variable
/// 2. `reference/` next to the running executable, if it exists
/// 3. `reference/` relative to the workspace root
pub fn reference_root() -> PathBuf {
    if let Ok(root) = std::env::var(REFERENCE_ENV_VAR) {
        return PathBuf::from(root);
    }
    if let Some(bundled) = bundled_dir() {
        return bundled;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../reference")
}

/// Use `explicit` when given, otherwise [`reference_root`].
pub fn resolve_reference_dir(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(reference_root, Path::to_path_buf)
}

/// Path of the table file for `species` under `dir`.
pub fn reference_table_path(dir: &Path, species: Species) -> PathBuf {
    dir.join(species.table_file_name())
}

fn bundled_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?.join(BUNDLED_DIR_NAME);
    dir.is_dir().then_some(dir)
}
