//! `.xlsx` worksheet loading into an in-memory cell grid.

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use thiserror::Error;

use kontur_engine::{EnumCellValue, MemoryGrid};

/// Workbook-scoped loading failures.
#[derive(Debug, Error)]
pub enum XlsxReadError {
    /// Workbook failed to open or a worksheet failed to read.
    #[error("failed to read workbook {path:?}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },
    /// Workbook contains no worksheets at all.
    #[error("workbook {path:?} has no worksheets")]
    NoSheets { path: PathBuf },
    /// A worksheet was requested by name but is absent.
    #[error("worksheet {sheet:?} not found in workbook {path:?}")]
    SheetNotFound { path: PathBuf, sheet: String },
}

/// One loaded worksheet: the materialized grid plus the resolved sheet name.
#[derive(Debug, Clone)]
pub struct SpecSheetGrid {
    /// Dense grid with absolute sheet coordinates.
    pub grid: MemoryGrid,
    /// Name of the worksheet the grid was read from.
    pub sheet_name: String,
}

/// Map one calamine cell into the engine's cell model.
///
/// Booleans keep their text form; error cells read as empty, matching how a
/// blank template cell would.
pub fn cast_cell_value(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::Empty,
        Data::Bool(v) => EnumCellValue::Text(v.to_string()),
        Data::Int(v) => EnumCellValue::Number(*v as f64),
        Data::Float(v) => EnumCellValue::Number(*v),
        Data::String(v) => EnumCellValue::Text(v.clone()),
        Data::Error(_) => EnumCellValue::Empty,
        Data::DateTime(v) => EnumCellValue::Number(v.as_f64()),
        Data::DateTimeIso(v) => EnumCellValue::Text(v.clone()),
        Data::DurationIso(v) => EnumCellValue::Text(v.clone()),
    }
}

/// Densify a calamine range into an absolute-coordinate grid.
///
/// calamine range iterators yield coordinates relative to `range.start()`;
/// the grid re-adds that offset so cell addresses match the sheet.
pub fn grid_from_range(range: &Range<Data>) -> MemoryGrid {
    if range.is_empty() {
        return MemoryGrid::default();
    }
    let (n_row0, n_col0) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut l_rows: Vec<Vec<EnumCellValue>> = vec![Vec::new(); n_row0 + range.height()];
    for (n_row_rel, n_col_rel, value) in range.used_cells() {
        let n_row = n_row0 + n_row_rel;
        let n_col = n_col0 + n_col_rel;
        let l_row = &mut l_rows[n_row];
        if l_row.len() <= n_col {
            l_row.resize(n_col + 1, EnumCellValue::Empty);
        }
        l_row[n_col] = cast_cell_value(value);
    }
    MemoryGrid::from_rows(l_rows)
}

/// Load one worksheet of an `.xlsx` workbook as a grid.
///
/// `sheet` selects a worksheet by exact name; `None` takes the first one.
pub fn load_sheet_grid(
    path: impl AsRef<Path>,
    sheet: Option<&str>,
) -> Result<SpecSheetGrid, XlsxReadError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| XlsxReadError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let l_sheet_names = workbook.sheet_names().to_owned();
    let sheet_name = match sheet {
        Some(requested) => {
            if !l_sheet_names.iter().any(|name| name == requested) {
                return Err(XlsxReadError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: requested.to_string(),
                });
            }
            requested.to_string()
        }
        None => l_sheet_names
            .first()
            .cloned()
            .ok_or_else(|| XlsxReadError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| XlsxReadError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(SpecSheetGrid {
        grid: grid_from_range(&range),
        sheet_name,
    })
}
