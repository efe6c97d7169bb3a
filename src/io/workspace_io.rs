use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

use tempfile::NamedTempFile;

use crate::model::file_entry::WorkspaceFile;

/// Error type for workspace file operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("path escapes the workspace: {path}")]
    PathEscapesWorkspace { path: String },
    #[error("workspace root not found: {}", path.display())]
    RootNotFound { path: PathBuf },
    #[error("file not found: {path}")]
    NotFound { path: String },
    #[error("could not read {}: {source}", path.display())]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not delete {}: {source}", path.display())]
    DeleteError { path: PathBuf, source: io::Error },
    #[error("could not list {}: {source}", path.display())]
    ListError { path: PathBuf, source: io::Error },
    #[error("could not parse plaindeck.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// Resolve a logical path (workspace-relative, `/` or `\` separated) to a
/// path under `root`. An empty logical path is the root itself.
pub fn resolve(root: &Path, logical: &str) -> Result<PathBuf, WorkspaceError> {
    let normalized = logical.replace('\\', "/");
    let escapes = || WorkspaceError::PathEscapesWorkspace {
        path: logical.to_string(),
    };

    let mut full = root.to_path_buf();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => full.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(escapes());
            }
        }
    }
    Ok(full)
}

fn ensure_root(root: &Path) -> Result<(), WorkspaceError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(WorkspaceError::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// Read the full text of a workspace file
pub fn read_file(root: &Path, logical: &str) -> Result<String, WorkspaceError> {
    ensure_root(root)?;
    let full_path = resolve(root, logical)?;
    if !full_path.exists() {
        return Err(WorkspaceError::NotFound {
            path: logical.to_string(),
        });
    }

    tracing::debug!(path = logical, "reading workspace file");
    fs::read_to_string(&full_path).map_err(|e| WorkspaceError::ReadError {
        path: full_path,
        source: e,
    })
}

/// Replace a workspace file's contents, creating parent directories as needed
pub fn write_file(root: &Path, logical: &str, content: &str) -> Result<(), WorkspaceError> {
    ensure_root(root)?;
    let full_path = resolve(root, logical)?;

    if let Some(parent) = full_path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| WorkspaceError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    atomic_write(&full_path, content.as_bytes()).map_err(|e| WorkspaceError::WriteError {
        path: full_path.clone(),
        source: e,
    })?;
    tracing::info!(path = logical, bytes = content.len(), "wrote workspace file");
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "target is a directory",
        ));
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// List the entries of a workspace directory. A missing directory lists as
/// empty. Entries whose metadata can't be read are skipped.
pub fn list_files(root: &Path, logical: &str) -> Result<Vec<WorkspaceFile>, WorkspaceError> {
    let dir = resolve(root, logical)?;
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&dir).map_err(|e| WorkspaceError::ListError {
        path: dir.clone(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "skipping entry without metadata");
                continue;
            }
        };

        // Logical path relative to the root, always `/`-separated
        let path = entry.path();
        let rel_path = match path.strip_prefix(root) {
            Ok(p) => p.to_string_lossy().replace('\\', "/"),
            Err(_) => continue,
        };

        let modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);

        files.push(WorkspaceFile {
            name: entry.file_name().to_string_lossy().to_string(),
            path: rel_path,
            size: meta.len(),
            modified,
            is_dir: meta.is_dir(),
        });
    }

    Ok(files)
}

/// Delete a workspace file, or a directory with everything in it
pub fn delete_file(root: &Path, logical: &str) -> Result<(), WorkspaceError> {
    let full_path = resolve(root, logical)?;
    if full_path == root {
        return Err(WorkspaceError::PathEscapesWorkspace {
            path: logical.to_string(),
        });
    }
    if !full_path.exists() {
        return Err(WorkspaceError::NotFound {
            path: logical.to_string(),
        });
    }

    let result = if full_path.is_dir() {
        fs::remove_dir_all(&full_path)
    } else {
        fs::remove_file(&full_path)
    };
    result.map_err(|e| WorkspaceError::DeleteError {
        path: full_path,
        source: e,
    })?;
    tracing::info!(path = logical, "deleted workspace path");
    Ok(())
}
