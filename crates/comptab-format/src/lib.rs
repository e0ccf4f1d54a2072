//! # comptab-format
//!
//! **Tier 3 (Formatting)**
//!
//! Renders the two Markdown tables and writes the summary report file.
//!
//! ## What belongs here
//! * Markdown template rendering
//! * Report file writing
//!
//! ## What does NOT belong here
//! * Business logic (use comptab-model)
//! * CLI arg parsing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use comptab_model::SummaryReport;
use comptab_types::FileRecord;

/// Name of the summary report file inside the docs directory.
pub const SUMMARY_FILE_NAME: &str = "component-table-summary.md";

/// Directory the summary report lands in, created as a sibling of the
/// scanned root.
pub const DOCS_DIR: &str = "docs";

/// Render the detailed per-file table. Row order is input order.
#[must_use]
pub fn render_detailed(records: &[FileRecord]) -> String {
    let mut s = String::new();
    s.push_str("| State | Module | Type | Name | Line Count | Path |\n");
    s.push_str("|---|---|---|---|---|---|\n");
    for r in records {
        s.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            r.state.label(),
            r.module,
            r.component_type,
            r.name,
            r.lines,
            r.path
        ));
    }
    s
}

/// Render the type-by-module summary table.
///
/// Module columns come straight from the report axis, followed by a
/// synthetic `Summary` column. Cells render `lines / files`, or `-` when the
/// pair never occurred; the Summary column and the `TOTAL` row are bold.
#[must_use]
pub fn render_summary(report: &SummaryReport) -> String {
    let mut s = String::new();

    s.push_str("| Component Type |");
    for module in &report.modules {
        s.push_str(&format!(" {module} |"));
    }
    s.push_str(" Summary |\n");

    s.push_str("|----------------|");
    for _ in 0..=report.modules.len() {
        s.push_str("------------|");
    }
    s.push('\n');

    for row in &report.rows {
        s.push_str(&format!("| {} |", row.component_type));
        for cell in &row.cells {
            if cell.files > 0 {
                s.push_str(&format!(" {} / {} |", cell.lines, cell.files));
            } else {
                s.push_str(" - |");
            }
        }
        s.push_str(&format!(
            " **{} / {}** |\n",
            row.total.lines, row.total.files
        ));
    }

    s.push_str("| **TOTAL** |");
    for total in &report.module_totals {
        s.push_str(&format!(" **{} / {}** |", total.lines, total.files));
    }
    s.push_str(&format!(
        " **{} / {}** |\n",
        report.grand_total.lines, report.grand_total.files
    ));

    s
}

/// Write the summary report to `<parent-of-root>/docs/component-table-summary.md`.
///
/// The docs directory is created if absent; creation or write failures are
/// fatal and propagate. Returns the written path.
pub fn write_summary_report(root: &Path, report: &SummaryReport) -> Result<PathBuf> {
    let abs = std::path::absolute(root)
        .with_context(|| format!("Failed to resolve {}", root.display()))?;
    let parent = abs
        .parent()
        .context("Scan root has no parent directory")?;

    let docs_dir = parent.join(DOCS_DIR);
    std::fs::create_dir_all(&docs_dir)
        .with_context(|| format!("Failed to create {}", docs_dir.display()))?;

    let path = docs_dir.join(SUMMARY_FILE_NAME);
    let mut content = String::from("# Component Table Summary\n\n");
    content.push_str("This table summarizes the number of components by type and module.\n");
    content.push_str("Each cell shows: LINE COUNT / FILE COUNT\n\n");
    content.push_str(&render_summary(report));

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
