//! Downward sequence walker over the coordinate-row grammar.

use crate::grid::{CellGrid, SpecCellAddress};
use crate::spec::{ConvertError, SpecColumnLayout, SpecCoordinateRecord};
use crate::util::{parse_numeric_cell, parse_ordinal_cell};

/// Which grammar member failed to parse on a candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumRowParseFailure {
    Ordinal,
    X,
    Y,
}

impl EnumRowParseFailure {
    pub(crate) fn member(&self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Parse one candidate row anchored at `base` under `layout`.
///
/// Members are checked in ordinal/X/Y order; the first failing member is
/// reported. An off-sheet column offset counts as that member failing.
pub(crate) fn parse_coordinate_row(
    grid: &dyn CellGrid,
    base: &SpecCellAddress,
    layout: &SpecColumnLayout,
) -> Result<SpecCoordinateRecord, EnumRowParseFailure> {
    let ordinal = base
        .with_col_offset(layout.offset_col_ordinal)
        .and_then(|address| parse_ordinal_cell(&grid.read_at(&address)))
        .ok_or(EnumRowParseFailure::Ordinal)?;
    let x = base
        .with_col_offset(layout.offset_col_x)
        .and_then(|address| parse_numeric_cell(&grid.read_at(&address)))
        .ok_or(EnumRowParseFailure::X)?;
    let y = base
        .with_col_offset(layout.offset_col_y)
        .and_then(|address| parse_numeric_cell(&grid.read_at(&address)))
        .ok_or(EnumRowParseFailure::Y)?;

    Ok(SpecCoordinateRecord {
        ordinal,
        x,
        y,
        source_address: *base,
    })
}

/// Walk rows downward from `start`, collecting every row that parses under
/// the grammar, stopping at the first row that does not.
pub fn walk_sequence(
    grid: &dyn CellGrid,
    start: &SpecCellAddress,
    layout: &SpecColumnLayout,
) -> Result<Vec<SpecCoordinateRecord>, ConvertError> {
    let mut l_records = Vec::new();
    let mut base = *start;
    loop {
        match parse_coordinate_row(grid, &base, layout) {
            Ok(record) => l_records.push(record),
            Err(_) => break,
        }
        base.row += 1;
    }

    if l_records.is_empty() {
        return Err(ConvertError::EmptySequence { start: *start });
    }
    Ok(l_records)
}

#[cfg(test)]
mod tests {
    use super::{EnumRowParseFailure, parse_coordinate_row, walk_sequence};
    use crate::grid::{EnumCellValue, MemoryGrid, SpecCellAddress};
    use crate::spec::{ConvertError, SpecColumnLayout};

    fn row(ordinal: f64, x: f64, y: f64) -> Vec<EnumCellValue> {
        vec![
            EnumCellValue::Number(ordinal),
            EnumCellValue::Number(x),
            EnumCellValue::Number(y),
        ]
    }

    #[test]
    fn walk_collects_until_first_non_parsing_row() {
        let grid = MemoryGrid::from_rows(vec![
            row(1.0, 64.1, 67.1),
            row(2.0, 64.2, 67.2),
            row(3.0, 64.3, 67.3),
            vec![EnumCellValue::Text("Привязка".to_string())],
            row(9.0, 64.9, 67.9),
        ]);

        let l_records = walk_sequence(
            &grid,
            &SpecCellAddress::new(0, 0),
            &SpecColumnLayout::default(),
        )
        .expect("walk succeeds");

        assert_eq!(l_records.len(), 3);
        assert_eq!(l_records[0].ordinal, 1);
        assert_eq!(l_records[2].position(), (64.3, 67.3));
        assert_eq!(l_records[1].source_address, SpecCellAddress::new(1, 0));
    }

    #[test]
    fn walk_stops_at_grid_end() {
        let grid = MemoryGrid::from_rows(vec![row(1.0, 0.0, 0.0), row(2.0, 1.0, 1.0)]);
        let l_records = walk_sequence(
            &grid,
            &SpecCellAddress::new(0, 0),
            &SpecColumnLayout::default(),
        )
        .expect("walk succeeds");
        assert_eq!(l_records.len(), 2);
    }

    #[test]
    fn empty_walk_is_an_error() {
        let grid = MemoryGrid::from_rows(vec![vec![EnumCellValue::Text("title".to_string())]]);
        let start = SpecCellAddress::new(0, 0);
        let err = walk_sequence(&grid, &start, &SpecColumnLayout::default())
            .expect_err("nothing parses");
        assert_eq!(err, ConvertError::EmptySequence { start });
    }

    #[test]
    fn row_failure_names_first_failing_member() {
        let grid = MemoryGrid::from_rows(vec![vec![
            EnumCellValue::Number(1.0),
            EnumCellValue::Text("oops".to_string()),
            EnumCellValue::Number(67.1),
        ]]);
        let err = parse_coordinate_row(
            &grid,
            &SpecCellAddress::new(0, 0),
            &SpecColumnLayout::default(),
        )
        .expect_err("x fails");
        assert_eq!(err, EnumRowParseFailure::X);
        assert_eq!(err.member(), "x");
    }

    #[test]
    fn negative_layout_offset_off_sheet_fails_that_member() {
        let grid = MemoryGrid::from_rows(vec![row(1.0, 64.1, 67.1)]);
        let layout = SpecColumnLayout {
            offset_col_ordinal: -1,
            offset_col_x: 0,
            offset_col_y: 1,
        };
        let err = parse_coordinate_row(&grid, &SpecCellAddress::new(0, 0), &layout)
            .expect_err("ordinal column is off-sheet");
        assert_eq!(err, EnumRowParseFailure::Ordinal);
    }
}
