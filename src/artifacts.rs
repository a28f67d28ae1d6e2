//! Cleanup of previously generated pyramid artifacts.
//!
//! Slicing is destructive to prior output: stale tiles generated at a
//! different tile size or overlap would otherwise linger alongside fresh
//! ones and silently corrupt the pyramid a viewer reconstructs. Every
//! generation run starts with [`clean_artifacts`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SliceError;

/// Remove the descriptor file and the level tree if they exist.
///
/// Returns `true` iff either artifact existed before the call. Safe to call
/// when neither exists; that invocation is a no-op returning `false`.
pub fn clean_artifacts(descriptor_path: &Path, levels_root: &Path) -> Result<bool, SliceError> {
    let had_descriptor = descriptor_path.is_file();
    let had_levels = levels_root.is_dir();

    if had_descriptor {
        debug!("removing descriptor {}", descriptor_path.display());
        fs::remove_file(descriptor_path)?;
    }
    if had_levels {
        debug!("removing level tree {}", levels_root.display());
        fs::remove_dir_all(levels_root)?;
    }

    Ok(had_descriptor || had_levels)
}
