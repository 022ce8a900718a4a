//! Shared conversion models, options, and top-level error types.

use std::fmt;

use crate::conf::{
    C_LABEL_ANCHOR_DEFAULT, N_SCAN_COLS_MAX, N_SCAN_ROWS_MAX, THR_RING_CLOSURE_DEFAULT,
};
use crate::grid::SpecCellAddress;
use crate::report::ReportValidation;

////////////////////////////////////////////////////////////////////////////////
// #region CoordinateModels

/// One walked coordinate row.
///
/// `ordinal` is the document-declared point number as printed in the sheet,
/// not a derived index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCoordinateRecord {
    /// Document-declared point number.
    pub ordinal: u64,
    /// X position, passed through without CRS transform.
    pub x: f64,
    /// Y position, passed through without CRS transform.
    pub y: f64,
    /// Address of the row's ordinal cell.
    pub source_address: SpecCellAddress,
}

impl SpecCoordinateRecord {
    /// Position as `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Auxiliary reference coordinate, unrelated to the polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecAnchorPoint {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Address of the X cell.
    pub source_address: SpecCellAddress,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutAndOptions

/// Column offsets of the ordinal/X/Y cells relative to the start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecColumnLayout {
    /// Signed column offset of the ordinal cell.
    pub offset_col_ordinal: i64,
    /// Signed column offset of the X cell.
    pub offset_col_x: i64,
    /// Signed column offset of the Y cell.
    pub offset_col_y: i64,
}

impl Default for SpecColumnLayout {
    fn default() -> Self {
        Self {
            offset_col_ordinal: 0,
            offset_col_x: 1,
            offset_col_y: 2,
        }
    }
}

/// Per-document conversion options.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecConvertOptions {
    /// Run the cycle validator (advisory numbering/closure checks).
    pub if_cycle_check: bool,
    /// Forced start cell; `None` enables the automatic scan.
    pub start_cell: Option<SpecCellAddress>,
    /// Extract the reference anchor point.
    pub if_enable_anchor: bool,
    /// Row grammar column offsets.
    pub column_layout: SpecColumnLayout,
    /// Automatic scan row bound.
    pub n_scan_rows_max: usize,
    /// Automatic scan column bound.
    pub n_scan_cols_max: usize,
    /// Geometric first/last closure tolerance.
    pub thr_ring_closure: f64,
    /// Anchor label prefix in the document template.
    pub label_anchor: String,
}

impl Default for SpecConvertOptions {
    fn default() -> Self {
        Self {
            if_cycle_check: true,
            start_cell: None,
            if_enable_anchor: false,
            column_layout: SpecColumnLayout::default(),
            n_scan_rows_max: N_SCAN_ROWS_MAX,
            n_scan_cols_max: N_SCAN_COLS_MAX,
            thr_ring_closure: THR_RING_CLOSURE_DEFAULT,
            label_anchor: C_LABEL_ANCHOR_DEFAULT.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ResultAndErrors

/// Assembled output for one document.
///
/// Owned by the caller; the engine keeps no state across documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecConversionResult {
    /// Closed boundary ring (first position repeats as last).
    pub ring: Vec<SpecCoordinateRecord>,
    /// Optional reference point.
    pub anchor: Option<SpecAnchorPoint>,
    /// Advisory validation outcome.
    pub report: ReportValidation,
    /// Originating document identifier.
    pub source_document: String,
    /// Originating worksheet name.
    pub sheet_name: String,
}

/// Document-scoped conversion failures. Never fatal to a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Explicit start cell does not parse as the first coordinate row.
    StartCellInvalid {
        /// Caller-supplied address.
        address: SpecCellAddress,
        /// Which grammar member failed and why.
        message: String,
    },
    /// Automatic scan exhausted without a matching coordinate row.
    StartNotFound {
        /// Rows inspected before giving up.
        rows_scanned: usize,
    },
    /// Walk produced zero coordinate records.
    EmptySequence {
        /// Start cell the walk began at.
        start: SpecCellAddress,
    },
    /// Anchor extraction requested but the label is absent.
    AnchorNotFound {
        /// Label that was searched for.
        label: String,
    },
    /// Anchor label present but no coordinate pair follows it.
    AnchorError {
        /// Label cell address.
        address: SpecCellAddress,
        /// Failure description.
        message: String,
    },
}

impl ConvertError {
    /// Stable kind string matching the error taxonomy, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartCellInvalid { .. } => "StartCellInvalid",
            Self::StartNotFound { .. } => "StartNotFound",
            Self::EmptySequence { .. } => "EmptySequence",
            Self::AnchorNotFound { .. } => "AnchorNotFound",
            Self::AnchorError { .. } => "AnchorError",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartCellInvalid { address, message } => {
                write!(f, "Start cell {} is invalid: {message}", address.to_a1())
            }
            Self::StartNotFound { rows_scanned } => write!(
                f,
                "No coordinate row found within the first {rows_scanned} rows."
            ),
            Self::EmptySequence { start } => write!(
                f,
                "No coordinate rows parsed starting at {}.",
                start.to_a1()
            ),
            Self::AnchorNotFound { label } => {
                write!(f, "Anchor label {label:?} not found in sheet.")
            }
            Self::AnchorError { address, message } => write!(
                f,
                "Anchor label at {} has no usable coordinates: {message}",
                address.to_a1()
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
