//! `kontur_io_xlsx` v1: workbook loading for the conversion engine.
//!
//! Loads one worksheet of an `.xlsx` workbook into a dense
//! [`kontur_engine::MemoryGrid`] with absolute cell coordinates, so A1-style
//! addresses in options and diagnostics line up with what the spreadsheet
//! application shows.

pub mod loader;

pub use loader::{SpecSheetGrid, XlsxReadError, cast_cell_value, grid_from_range, load_sheet_grid};
