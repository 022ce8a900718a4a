//! Anchor extractor: label-located single reference point.

use crate::conf::{N_SCAN_ANCHOR_COLS_MAX, N_SCAN_ANCHOR_ROWS_MAX};
use crate::grid::{CellGrid, EnumCellValue, SpecCellAddress};
use crate::spec::{ConvertError, SpecAnchorPoint, SpecConvertOptions};
use crate::util::parse_numeric_cell;

/// Find the cell whose text starts with the anchor label.
fn locate_anchor_label(
    grid: &dyn CellGrid,
    options: &SpecConvertOptions,
) -> Option<SpecCellAddress> {
    let n_rows = grid.height().min(options.n_scan_rows_max);
    let n_cols = grid.width().min(options.n_scan_cols_max);
    for n_row in 0..n_rows {
        for n_col in 0..n_cols {
            if let EnumCellValue::Text(text) = grid.read(n_row, n_col)
                && text.trim().starts_with(options.label_anchor.as_str())
            {
                return Some(SpecCellAddress::new(n_row, n_col));
            }
        }
    }
    None
}

/// Read an adjacent numeric pair at `(row, col)`/`(row, col + 1)`.
fn read_coordinate_pair(
    grid: &dyn CellGrid,
    row: usize,
    col: usize,
) -> Option<SpecAnchorPoint> {
    let x = parse_numeric_cell(&grid.read(row, col))?;
    let y = parse_numeric_cell(&grid.read(row, col + 1))?;
    Some(SpecAnchorPoint {
        x,
        y,
        source_address: SpecCellAddress::new(row, col),
    })
}

/// Extract the reference point near the anchor label.
///
/// The pair is searched on the label row to the right of the label, then on
/// the rows directly below it.
pub fn extract_anchor(
    grid: &dyn CellGrid,
    options: &SpecConvertOptions,
) -> Result<SpecAnchorPoint, ConvertError> {
    let label = locate_anchor_label(grid, options).ok_or_else(|| ConvertError::AnchorNotFound {
        label: options.label_anchor.clone(),
    })?;

    for n_col in (label.col + 1)..grid.width() {
        if let Some(point) = read_coordinate_pair(grid, label.row, n_col) {
            return Ok(point);
        }
    }
    // Below the label only the label's own column block holds the pair;
    // scanning wider would pick up unrelated tables.
    for n_row in (label.row + 1)..=(label.row + N_SCAN_ANCHOR_ROWS_MAX) {
        if n_row >= grid.height() {
            break;
        }
        for n_col in label.col..=(label.col + N_SCAN_ANCHOR_COLS_MAX) {
            if let Some(point) = read_coordinate_pair(grid, n_row, n_col) {
                return Ok(point);
            }
        }
    }

    Err(ConvertError::AnchorError {
        address: label,
        message: "No adjacent numeric pair near the label.".to_string(),
    })
}
