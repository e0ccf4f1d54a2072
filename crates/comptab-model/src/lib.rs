//! # comptab-model
//!
//! **Tier 2 (Model)**
//!
//! Folds the walker's records into the type-by-module cross-tabulation
//! behind the summary table. Axes are sorted ascending; records with an
//! empty component type are excluded (they still appear in the detailed
//! table, which consumes records directly).
//!
//! ## What belongs here
//! * Aggregation into cells and totals
//!
//! ## What does NOT belong here
//! * Rendering (use comptab-format)
//! * Filesystem access

use std::collections::{BTreeMap, BTreeSet};

use comptab_types::FileRecord;

/// Accumulated counters for one (type, module) pair.
///
/// `files == 0` means the pair never occurred; the renderer shows those
/// cells as a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub lines: usize,
    pub files: usize,
}

impl Cell {
    fn add_file(&mut self, lines: usize) {
        self.lines += lines;
        self.files += 1;
    }

    fn add_cell(&mut self, other: Cell) {
        self.lines += other.lines;
        self.files += other.files;
    }
}

/// One summary row: a component type with its per-module cells.
///
/// `cells` is parallel to [`SummaryReport::modules`]; `total` is the row sum
/// across all real modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub component_type: String,
    pub cells: Vec<Cell>,
    pub total: Cell,
}

/// The full cross-tabulation: sorted module axis, sorted type rows, and the
/// per-module and grand totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Real modules only, sorted ascending. The trailing "Summary" column is
    /// a rendering concern, not part of the axis.
    pub modules: Vec<String>,
    /// One row per component type, sorted ascending.
    pub rows: Vec<SummaryRow>,
    /// Column totals, parallel to `modules`.
    pub module_totals: Vec<Cell>,
    pub grand_total: Cell,
}

/// Fold all records into a [`SummaryReport`].
///
/// Modules are collected from classified records only, so a tree containing
/// nothing but extensionless files produces an empty axis.
#[must_use]
pub fn summarize(records: &[FileRecord]) -> SummaryReport {
    let mut cells: BTreeMap<String, BTreeMap<String, Cell>> = BTreeMap::new();
    let mut modules: BTreeSet<String> = BTreeSet::new();

    for record in records {
        if record.component_type.is_empty() {
            continue;
        }
        cells
            .entry(record.component_type.clone())
            .or_default()
            .entry(record.module.clone())
            .or_default()
            .add_file(record.lines);
        modules.insert(record.module.clone());
    }

    let modules: Vec<String> = modules.into_iter().collect();

    let mut rows: Vec<SummaryRow> = Vec::new();
    for (component_type, by_module) in cells {
        let mut row_cells: Vec<Cell> = Vec::with_capacity(modules.len());
        let mut total = Cell::default();
        for module in &modules {
            let cell = by_module.get(module).copied().unwrap_or_default();
            total.add_cell(cell);
            row_cells.push(cell);
        }
        rows.push(SummaryRow {
            component_type,
            cells: row_cells,
            total,
        });
    }

    let mut module_totals = vec![Cell::default(); modules.len()];
    let mut grand_total = Cell::default();
    for row in &rows {
        for (slot, cell) in module_totals.iter_mut().zip(&row.cells) {
            slot.add_cell(*cell);
        }
        grand_total.add_cell(row.total);
    }

    SummaryReport {
        modules,
        rows,
        module_totals,
        grand_total,
    }
}
