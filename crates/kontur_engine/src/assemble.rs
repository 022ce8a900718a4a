//! Geometry assembler: walked sequence into an always-closed ring.

use crate::report::ReportValidation;
use crate::spec::{SpecAnchorPoint, SpecConversionResult, SpecCoordinateRecord};

/// Assemble the conversion result for one document.
///
/// The ring is closed unconditionally: when the last position differs from
/// the first, a copy of the first record is appended. Validation issues are
/// carried through, never enforced here.
pub fn assemble_result(
    sequence: Vec<SpecCoordinateRecord>,
    anchor: Option<SpecAnchorPoint>,
    report: ReportValidation,
    source_document: impl Into<String>,
    sheet_name: impl Into<String>,
) -> SpecConversionResult {
    let mut l_ring = sequence;
    let if_needs_closing = match (l_ring.first(), l_ring.last()) {
        (Some(first), Some(last)) => first.position() != last.position(),
        _ => false,
    };
    if if_needs_closing {
        l_ring.push(l_ring[0].clone());
    }

    SpecConversionResult {
        ring: l_ring,
        anchor,
        report,
        source_document: source_document.into(),
        sheet_name: sheet_name.into(),
    }
}
