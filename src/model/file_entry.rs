use serde::Serialize;

/// A directory-listing record for a workspace path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceFile {
    pub name: String,
    /// Logical path, `/`-separated and relative to the workspace root
    pub path: String,
    pub size: u64,
    /// Seconds since the UNIX epoch (0 when unknown)
    pub modified: u64,
    pub is_dir: bool,
}
