use std::cmp::Ordering;

use crate::model::file_entry::WorkspaceFile;

/// Directories first, then by name (case-insensitive, ties broken by the
/// raw name so the order is total)
pub fn sort_listing(entries: &mut [WorkspaceFile]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

/// Human-readable byte size: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Logical path one level up; the root's parent is the root
pub fn parent_path(logical: &str) -> String {
    let mut parts: Vec<&str> = logical.split('/').filter(|p| !p.is_empty()).collect();
    parts.pop();
    parts.join("/")
}
