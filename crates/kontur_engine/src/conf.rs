//! Engine constants and default option presets.

use crate::spec::SpecConvertOptions;

/// Maximum rows inspected by the automatic start scan.
pub const N_SCAN_ROWS_MAX: usize = 2_048;
/// Maximum columns inspected by the automatic start scan.
pub const N_SCAN_COLS_MAX: usize = 64;
/// Minimum distinct points for a non-degenerate ring.
pub const N_RING_VERTICES_MIN: usize = 3;
/// Rows below the anchor label inspected for the coordinate pair.
pub const N_SCAN_ANCHOR_ROWS_MAX: usize = 8;
/// Columns right of the label column inspected on the rows below it.
pub const N_SCAN_ANCHOR_COLS_MAX: usize = 2;
/// Per-ordinal gap issues materialized for one numbering gap; wider gaps
/// collapse into a single ranged issue.
pub const N_GAP_ISSUES_MAX: usize = 16;
/// Default geometric tolerance for first/last ring closure.
pub const THR_RING_CLOSURE_DEFAULT: f64 = 1e-9;
/// Label marking the reference-point block in the document template.
pub const C_LABEL_ANCHOR_DEFAULT: &str = "Привязка";

/// Build default conversion options.
pub fn derive_default_convert_options() -> SpecConvertOptions {
    SpecConvertOptions::default()
}
