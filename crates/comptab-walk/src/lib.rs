//! # comptab-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Filesystem traversal producing one [`FileRecord`] per regular file. The
//! scan is an inventory, not a build: hidden files are included and ignore
//! files are not respected. Traversal is sorted by path so two scans of an
//! unchanged tree emit identical tables.
//!
//! ## What belongs here
//! * Directory traversal
//! * Line counting
//! * Record assembly (classification, module key, change state)
//!
//! ## What does NOT belong here
//! * Aggregation (use comptab-model)
//! * Rendering (use comptab-format)

use std::path::Path;

use anyhow::Result;
use ignore::WalkBuilder;

use comptab_classify::classify;
use comptab_config::Config;
use comptab_git::StatusResolver;
use comptab_module_key::module_key_from_normalized;
use comptab_types::FileRecord;

/// Scan `root` and produce one record per regular file, in sorted path
/// order.
///
/// Per-file failures never abort the walk: unreadable content yields a zero
/// line count and resolver failures yield an empty change state. Errors from
/// the traversal itself (for example an unreadable directory) propagate.
pub fn walk(
    root: &Path,
    resolver: &dyn StatusResolver,
    config: &Config,
) -> Result<Vec<FileRecord>> {
    let mut records: Vec<FileRecord> = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_path(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            config.debug(&format!("Scanning directory: {}", entry.path().display()));
            continue;
        }
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel_str = rel.to_string_lossy().replace('\\', "/");
        config.debug(&format!("Processing file: {rel_str}"));

        let filename = rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let classification = classify(&filename);

        records.push(FileRecord {
            state: resolver.resolve(root, rel),
            module: module_key_from_normalized(&rel_str),
            component_type: classification.component_type,
            name: classification.name,
            lines: count_lines(path),
            path: rel_str,
        });

        if records.len() % 100 == 0 {
            config.debug(&format!("Processed {} files", records.len()));
        }
    }

    Ok(records)
}

/// Count the lines of a file read as text.
///
/// Undecodable byte sequences are replaced rather than failing; a file that
/// cannot be opened at all counts as zero lines. A trailing line without a
/// terminator still counts, so only empty or unreadable files yield 0.
#[must_use]
pub fn count_lines(path: &Path) -> usize {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).lines().count(),
        Err(_) => 0,
    }
}
