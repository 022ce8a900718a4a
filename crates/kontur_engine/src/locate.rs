//! Start-cell locator: explicit address validation or row-major grid scan.

use crate::grid::{CellGrid, SpecCellAddress};
use crate::spec::{ConvertError, SpecConvertOptions};
use crate::walk::parse_coordinate_row;

/// How the start cell is determined for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumStartStrategy {
    /// Use the caller-supplied address, validated against the row grammar.
    Explicit(SpecCellAddress),
    /// Scan the grid row-major for the first row matching the grammar.
    Scan,
}

impl EnumStartStrategy {
    /// Derive the strategy from conversion options.
    pub fn from_options(options: &SpecConvertOptions) -> Self {
        match options.start_cell {
            Some(address) => Self::Explicit(address),
            None => Self::Scan,
        }
    }
}

/// Locate the start cell of the coordinate sequence.
///
/// An explicit start cell must itself parse as a coordinate row; the scan is
/// bounded by the options' row/column limits intersected with the grid's used
/// range.
pub fn locate_start(
    grid: &dyn CellGrid,
    options: &SpecConvertOptions,
) -> Result<SpecCellAddress, ConvertError> {
    match EnumStartStrategy::from_options(options) {
        EnumStartStrategy::Explicit(address) => {
            match parse_coordinate_row(grid, &address, &options.column_layout) {
                Ok(_) => Ok(address),
                Err(failure) => Err(ConvertError::StartCellInvalid {
                    address,
                    message: format!(
                        "Row member {:?} does not parse under the coordinate grammar.",
                        failure.member()
                    ),
                }),
            }
        }
        EnumStartStrategy::Scan => {
            let n_rows = grid.height().min(options.n_scan_rows_max);
            let n_cols = grid.width().min(options.n_scan_cols_max);
            for n_row in 0..n_rows {
                for n_col in 0..n_cols {
                    let candidate = SpecCellAddress::new(n_row, n_col);
                    if parse_coordinate_row(grid, &candidate, &options.column_layout).is_ok() {
                        return Ok(candidate);
                    }
                }
            }
            Err(ConvertError::StartNotFound {
                rows_scanned: n_rows,
            })
        }
    }
}
