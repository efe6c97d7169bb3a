use std::fs;
use std::path::{Path, PathBuf};

use crate::io::workspace_io::WorkspaceError;
use crate::model::config::WorkspaceConfig;
use crate::model::workspace::Workspace;

pub const CONFIG_FILE: &str = "plaindeck.toml";

/// Walk up from `start` looking for a plaindeck.toml
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load a workspace from an explicit config file.
///
/// The root defaults to the config file's directory; a relative `root`
/// resolves against that directory.
pub fn load_config(config_path: &Path) -> Result<Workspace, WorkspaceError> {
    let text = fs::read_to_string(config_path).map_err(|e| WorkspaceError::ReadError {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    let config: WorkspaceConfig = toml::from_str(&text)?;

    let config_dir = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let root = match &config.workspace.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => config_dir.join(root),
        None => config_dir,
    };

    tracing::debug!(config = %config_path.display(), root = %root.display(), "loaded config");
    Ok(Workspace {
        root,
        config,
        config_path: Some(config_path.to_path_buf()),
    })
}

/// Load the workspace for `start`: the nearest plaindeck.toml at or above it,
/// or built-in defaults rooted at `start` when there is none.
pub fn load_or_default(start: &Path) -> Result<Workspace, WorkspaceError> {
    match discover_config(start) {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!(root = %start.display(), "no config found, using defaults");
            Ok(Workspace {
                root: start.to_path_buf(),
                config: WorkspaceConfig::default(),
                config_path: None,
            })
        }
    }
}
