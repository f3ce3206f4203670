//! @ai:module:intent Find blueprint files under a directory
//! @ai:module:layer application
//! @ai:module:public_api discover_blueprints, is_blueprint_file
//! @ai:module:stateless true

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Markdown files that live next to blueprints but are not blueprints.
const EXCLUDED_FILES: [&str; 3] = ["README.md", "CLAUDE.md", "BLUEPRINTS_SPEC.md"];

/// @ai:intent Check whether a path names a blueprint file
/// @ai:pre extensions include the leading dot, e.g. ".md"
/// @ai:example ("models/user.md", [".md"]) -> true
/// @ai:example ("README.md", [".md"]) -> false
/// @ai:effects pure
pub fn is_blueprint_file(path: &Path, extensions: &[String]) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if EXCLUDED_FILES.contains(&file_name) {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
        .unwrap_or(false)
}

/// @ai:intent Recursively list blueprint files, sorted by path
/// @ai:effects fs:read
pub fn discover_blueprints(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_blueprint_file(p, extensions))
        .collect();

    found.sort();
    debug!(dir = %dir.display(), count = found.len(), "discovered blueprints");
    found
}
