//! Single-responsibility module-key derivation for deterministic grouping.

/// Compute a module key from a path relative to the scan root.
///
/// Rules:
/// - The module is the first directory segment of the relative path.
/// - Root-level files (no directory segment) become `"-"`.
///
/// Accepts raw paths: backslashes are normalized to forward slashes and
/// leading `./` or `/` are stripped before the segment is taken.
#[must_use]
pub fn module_key(path: &str) -> String {
    let mut p = path.replace('\\', "/");
    if let Some(stripped) = p.strip_prefix("./") {
        p = stripped.to_string();
    }
    p = p.trim_start_matches('/').to_string();

    module_key_from_normalized(&p)
}

/// Compute a module key from a normalized relative path.
///
/// Expected input format:
/// - forward slashes only
/// - no leading `./`
/// - no leading `/`
#[must_use]
pub fn module_key_from_normalized(path: &str) -> String {
    let Some((dir_part, _file_part)) = path.split_once('/') else {
        return "-".to_string();
    };

    if dir_part.is_empty() || dir_part == "." {
        return "-".to_string();
    }

    dir_part.to_string()
}
