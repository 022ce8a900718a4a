//! Abstract read-only cell grid and A1-style cell addressing.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region CellValueAndAddress

/// Resolved spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank cell. Also returned for out-of-range reads.
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
}

/// Zero-based cell position with A1-style parsing and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCellAddress {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl SpecCellAddress {
    /// Create an address from zero-based row/column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference such as `"F19"` (case-insensitive).
    pub fn parse(reference: &str) -> Result<Self, String> {
        let reference = reference.trim();
        let Some(n_split) = reference.find(|chr: char| chr.is_ascii_digit()) else {
            return Err(format!("Missing row number in cell reference {reference:?}."));
        };
        let (c_col_part, c_row_part) = reference.split_at(n_split);
        if c_col_part.is_empty() {
            return Err(format!(
                "Missing column letters in cell reference {reference:?}."
            ));
        }

        let mut n_col: usize = 0;
        for chr in c_col_part.chars() {
            let chr_upper = chr.to_ascii_uppercase();
            if !chr_upper.is_ascii_uppercase() {
                return Err(format!(
                    "Invalid column letter {chr:?} in cell reference {reference:?}."
                ));
            }
            n_col = n_col
                .checked_mul(26)
                .and_then(|v| v.checked_add((chr_upper as usize) - ('A' as usize) + 1))
                .ok_or_else(|| format!("Column overflow in cell reference {reference:?}."))?;
        }

        let n_row: usize = c_row_part
            .parse()
            .map_err(|_| format!("Invalid row number in cell reference {reference:?}."))?;
        if n_row == 0 {
            return Err(format!(
                "Row number must be >= 1 in cell reference {reference:?}."
            ));
        }

        Ok(Self {
            row: n_row - 1,
            col: n_col - 1,
        })
    }

    /// Format back to A1 style (`row=18, col=5` -> `"F19"`).
    pub fn to_a1(&self) -> String {
        let mut n_col = self.col + 1;
        let mut l_letters = Vec::new();
        while n_col > 0 {
            let n_rem = (n_col - 1) % 26;
            l_letters.push((b'A' + n_rem as u8) as char);
            n_col = (n_col - 1) / 26;
        }
        let c_letters: String = l_letters.iter().rev().collect();
        format!("{}{}", c_letters, self.row + 1)
    }

    /// Address shifted by a signed column offset; `None` when off-sheet.
    pub fn with_col_offset(&self, offset: i64) -> Option<Self> {
        let n_col = i64::try_from(self.col).ok()?.checked_add(offset)?;
        if n_col < 0 {
            return None;
        }
        Some(Self {
            row: self.row,
            col: n_col as usize,
        })
    }
}

impl fmt::Display for SpecCellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridAccess

/// Read-only view over one worksheet's cells.
///
/// All reads are total: out-of-range access returns [`EnumCellValue::Empty`]
/// instead of failing.
pub trait CellGrid {
    /// Read the cell at zero-based `row`/`col`.
    fn read(&self, row: usize, col: usize) -> EnumCellValue;

    /// Number of rows in the used range.
    fn height(&self) -> usize;

    /// Number of columns in the used range.
    fn width(&self) -> usize;

    /// Read by parsed address.
    fn read_at(&self, address: &SpecCellAddress) -> EnumCellValue {
        self.read(address.row, address.col)
    }

    /// Read by A1-style reference; unparseable references read as empty.
    fn read_a1(&self, reference: &str) -> EnumCellValue {
        match SpecCellAddress::parse(reference) {
            Ok(address) => self.read_at(&address),
            Err(_) => EnumCellValue::Empty,
        }
    }
}

/// Dense in-memory grid, used by workbook loaders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    rows: Vec<Vec<EnumCellValue>>,
    n_width: usize,
}

impl MemoryGrid {
    /// Build a grid from row-major cell values. Rows may be ragged; the grid
    /// width is the widest row.
    pub fn from_rows(rows: Vec<Vec<EnumCellValue>>) -> Self {
        let n_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, n_width }
    }
}

impl CellGrid for MemoryGrid {
    fn read(&self, row: usize, col: usize) -> EnumCellValue {
        self.rows
            .get(row)
            .and_then(|l_row| l_row.get(col))
            .cloned()
            .unwrap_or(EnumCellValue::Empty)
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn width(&self) -> usize {
        self.n_width
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CellGrid, EnumCellValue, MemoryGrid, SpecCellAddress};

    #[test]
    fn parse_and_format_cell_address() {
        let address = SpecCellAddress::parse("C12").expect("valid address");
        assert_eq!(address.row, 11);
        assert_eq!(address.col, 2);
        assert_eq!(address.to_a1(), "C12");

        let address = SpecCellAddress::parse("f19").expect("lowercase accepted");
        assert_eq!(address, SpecCellAddress::new(18, 5));

        let address = SpecCellAddress::parse("AA1").expect("two-letter column");
        assert_eq!(address.col, 26);
        assert_eq!(address.to_a1(), "AA1");
    }

    #[test]
    fn invalid_cell_address_is_rejected() {
        assert!(SpecCellAddress::parse("12A").is_err());
        assert!(SpecCellAddress::parse("").is_err());
        assert!(SpecCellAddress::parse("F0").is_err());
        assert!(SpecCellAddress::parse("F1x").is_err());
        assert!(SpecCellAddress::parse("19").is_err());
    }

    #[test]
    fn col_offset_is_checked() {
        let address = SpecCellAddress::new(3, 2);
        assert_eq!(
            address.with_col_offset(-2),
            Some(SpecCellAddress::new(3, 0))
        );
        assert_eq!(address.with_col_offset(-3), None);
        assert_eq!(
            address.with_col_offset(4),
            Some(SpecCellAddress::new(3, 6))
        );
    }

    #[test]
    fn memory_grid_reads_are_total() {
        let grid = MemoryGrid::from_rows(vec![
            vec![
                EnumCellValue::Number(1.0),
                EnumCellValue::Text("a".to_string()),
            ],
            vec![EnumCellValue::Number(2.0)],
        ]);

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.read(0, 0), EnumCellValue::Number(1.0));
        assert_eq!(grid.read(1, 1), EnumCellValue::Empty);
        assert_eq!(grid.read(99, 99), EnumCellValue::Empty);
        assert_eq!(grid.read_a1("A1"), EnumCellValue::Number(1.0));
        assert_eq!(grid.read_a1("not-an-address"), EnumCellValue::Empty);
    }
}
