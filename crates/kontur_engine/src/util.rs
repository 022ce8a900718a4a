//! Cell-level parsing helpers shared by the locator, walker, and anchor scan.

use std::sync::OnceLock;

use regex::Regex;

use crate::grid::EnumCellValue;

/// Coordinate text with a leading north/east hemisphere letter, as printed in
/// the document template (`N64.062788`, `E67.503584`).
fn regex_hemisphere_coordinate() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[NE](\d+(?:\.\d+)?)$").expect("fixed pattern"))
}

/// Parse a cell as a finite coordinate value.
///
/// Numbers pass through; text accepts a plain decimal or a hemisphere-prefixed
/// form. South/west prefixes and locale decimal commas are rejected.
pub fn parse_numeric_cell(value: &EnumCellValue) -> Option<f64> {
    let parsed = match value {
        EnumCellValue::Empty => return None,
        EnumCellValue::Number(number) => *number,
        EnumCellValue::Text(text) => {
            let text = text.trim();
            let c_digits = match regex_hemisphere_coordinate().captures(text) {
                Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(text),
                None => text,
            };
            c_digits.parse::<f64>().ok()?
        }
    };
    parsed.is_finite().then_some(parsed)
}

/// Parse a cell as a positive integer point ordinal.
pub fn parse_ordinal_cell(value: &EnumCellValue) -> Option<u64> {
    let n_ordinal = match value {
        EnumCellValue::Empty => return None,
        EnumCellValue::Number(number) => {
            if !number.is_finite() || number.fract() != 0.0 || *number < 1.0 {
                return None;
            }
            *number as u64
        }
        EnumCellValue::Text(text) => text.trim().parse::<u64>().ok()?,
    };
    (n_ordinal >= 1).then_some(n_ordinal)
}

/// Euclidean distance between two positions.
pub fn calculate_point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
