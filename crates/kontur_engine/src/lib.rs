//! `kontur_engine` v1: core engine turning spreadsheet cell grids into
//! closed polygon boundary rings.
//!
//! The engine is I/O-free. Hosts supply a [`grid::CellGrid`] view over a
//! worksheet and a [`diag::DiagnosticSink`] for document-scoped events, and
//! receive a [`spec::SpecConversionResult`] per document.

pub mod anchor;
pub mod assemble;
pub mod conf;
pub mod convert;
pub mod diag;
pub mod grid;
pub mod locate;
pub mod report;
pub mod spec;
pub mod util;
pub mod validate;
pub mod walk;

pub use convert::convert_document;
pub use grid::{CellGrid, EnumCellValue, MemoryGrid, SpecCellAddress};
pub use report::{EnumValidationIssueKind, ReportValidation, SpecValidationIssue};
pub use spec::{
    ConvertError, SpecAnchorPoint, SpecColumnLayout, SpecConversionResult, SpecConvertOptions,
    SpecCoordinateRecord,
};
