//! # comptab-types
//!
//! **Tier 1 (Types)**
//!
//! Core data types shared by every comptab crate.
//!
//! ## What belongs here
//! * The per-file scan record
//! * The version-control change state
//!
//! ## What does NOT belong here
//! * Classification rules (use comptab-classify)
//! * Aggregation logic (use comptab-model)
//! * I/O of any kind

/// Version-control status of a scanned file.
///
/// `Unmodified` is the neutral value: it is what every failure mode of the
/// status lookup degrades to, and it renders as an empty table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeState {
    Created,
    Changed,
    #[default]
    Unmodified,
}

impl ChangeState {
    /// Label used in the detailed table. `Unmodified` is intentionally blank.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ChangeState::Created => "Created",
            ChangeState::Changed => "Changed",
            ChangeState::Unmodified => "",
        }
    }
}

/// One scanned file. Immutable once produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub state: ChangeState,
    /// First directory segment of the relative path, or `"-"` for files
    /// sitting directly at the scan root.
    pub module: String,
    /// Classifier output, or the raw-extension fallback. Empty only for
    /// extensionless filenames that match no rule.
    pub component_type: String,
    /// Filename with the matched suffix removed; the full filename when the
    /// classifier fell back to the raw extension.
    pub name: String,
    pub lines: usize,
    /// Path relative to the scan root, forward-slashed.
    pub path: String,
}
