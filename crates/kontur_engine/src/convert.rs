//! Per-document conversion pipeline: locate, walk, validate, anchor, assemble.

use crate::anchor::extract_anchor;
use crate::assemble::assemble_result;
use crate::diag::{DiagnosticSink, SpecDiagEvent};
use crate::grid::CellGrid;
use crate::locate::locate_start;
use crate::report::ReportValidation;
use crate::spec::{ConvertError, SpecConversionResult, SpecConvertOptions};
use crate::validate::validate_sequence;
use crate::walk::walk_sequence;

/// Convert one document grid into a closed boundary ring.
///
/// All failures are document-scoped: the error is recorded to `sink` and
/// returned, leaving the caller free to continue a batch. A failed anchor
/// extraction is downgraded to a warning and the result carries no anchor.
pub fn convert_document(
    grid: &dyn CellGrid,
    document_id: &str,
    sheet_name: &str,
    options: &SpecConvertOptions,
    sink: &dyn DiagnosticSink,
) -> Result<SpecConversionResult, ConvertError> {
    let start = locate_start(grid, options).map_err(|err| {
        sink.record(document_id, SpecDiagEvent::error(err.kind(), err.to_string()));
        err
    })?;

    let l_sequence = walk_sequence(grid, &start, &options.column_layout).map_err(|err| {
        sink.record(document_id, SpecDiagEvent::error(err.kind(), err.to_string()));
        err
    })?;

    let report = if options.if_cycle_check {
        let report = validate_sequence(&l_sequence, options.thr_ring_closure);
        for issue in &report.issues {
            sink.record(
                document_id,
                SpecDiagEvent::warning(
                    issue.kind.as_str(),
                    format!("{} (at {})", issue.message, issue.at),
                ),
            );
        }
        report
    } else {
        ReportValidation::passed()
    };

    let anchor = if options.if_enable_anchor {
        match extract_anchor(grid, options) {
            Ok(point) => Some(point),
            Err(err) => {
                sink.record(
                    document_id,
                    SpecDiagEvent::warning(err.kind(), err.to_string()),
                );
                None
            }
        }
    } else {
        None
    };

    Ok(assemble_result(
        l_sequence,
        anchor,
        report,
        document_id,
        sheet_name,
    ))
}

#[cfg(test)]
mod tests {
    use super::convert_document;
    use crate::diag::{EnumDiagSeverity, MemoryDiagnosticSink, NullDiagnosticSink};
    use crate::grid::{EnumCellValue, MemoryGrid, SpecCellAddress};
    use crate::report::EnumValidationIssueKind;
    use crate::spec::{ConvertError, SpecConvertOptions};

    fn text(value: &str) -> EnumCellValue {
        EnumCellValue::Text(value.to_string())
    }

    fn num(value: f64) -> EnumCellValue {
        EnumCellValue::Number(value)
    }

    /// Template-shaped sheet: title, header, four coordinate rows with an
    /// explicit closing row, then the anchor block.
    fn grid_template() -> MemoryGrid {
        MemoryGrid::from_rows(vec![
            vec![text("Каталог координат границы участка")],
            vec![text("№"), text("X"), text("Y")],
            vec![num(1.0), num(64.062788), num(67.503584)],
            vec![num(2.0), num(64.063901), num(67.505112)],
            vec![num(3.0), num(64.061544), num(67.506200)],
            vec![num(1.0), num(64.062788), num(67.503584)],
            vec![],
            vec![text("Привязка:"), num(64.060000), num(67.500000)],
        ])
    }

    #[test]
    fn full_conversion_of_template_sheet() {
        let grid = grid_template();
        let sink = MemoryDiagnosticSink::default();
        let mut options = SpecConvertOptions::default();
        options.if_enable_anchor = true;

        let result = convert_document(&grid, "doc.xlsx", "Лист1", &options, &sink)
            .expect("template converts");

        assert_eq!(result.ring.len(), 4);
        assert_eq!(result.ring[0].position(), result.ring[3].position());
        assert!(result.report.ok);
        let anchor = result.anchor.expect("anchor extracted");
        assert_eq!(anchor.x, 64.060000);
        assert_eq!(result.source_document, "doc.xlsx");
        assert_eq!(result.sheet_name, "Лист1");
        assert_eq!(sink.error_count(), 0);
    }

    #[test]
    fn conversion_is_idempotent() {
        let grid = grid_template();
        let options = SpecConvertOptions::default();
        let first = convert_document(&grid, "doc.xlsx", "Лист1", &options, &NullDiagnosticSink)
            .expect("first pass");
        let second = convert_document(&grid, "doc.xlsx", "Лист1", &options, &NullDiagnosticSink)
            .expect("second pass");
        assert_eq!(first, second);
    }

    #[test]
    fn open_ring_with_gap_still_converts_with_issues() {
        let grid = MemoryGrid::from_rows(vec![
            vec![num(1.0), num(0.0), num(0.0)],
            vec![num(2.0), num(1.0), num(0.0)],
            vec![num(4.0), num(0.0), num(1.0)],
        ]);
        let sink = MemoryDiagnosticSink::default();
        let result = convert_document(
            &grid,
            "gap.xlsx",
            "Лист1",
            &SpecConvertOptions::default(),
            &sink,
        )
        .expect("advisory issues never block");

        assert!(!result.report.ok);
        let l_kinds: Vec<_> = result.report.issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(
            l_kinds,
            vec![
                EnumValidationIssueKind::NumberingGap,
                EnumValidationIssueKind::RingNotClosed,
            ]
        );
        // Ring is closed regardless of the advisory outcome.
        assert_eq!(result.ring.len(), 4);
        assert_eq!(result.ring[3].position(), (0.0, 0.0));
        // Issues surface on the sink as warnings.
        let l_events = sink.events();
        assert_eq!(l_events.len(), 2);
        assert!(l_events
            .iter()
            .all(|(_, event)| event.severity == EnumDiagSeverity::Warning));
    }

    #[test]
    fn short_walk_closes_ring_and_flags_degeneracy() {
        // Block cut short by a blank row: only two records walk.
        let grid = MemoryGrid::from_rows(vec![
            vec![num(1.0), num(10.0), num(20.0)],
            vec![num(2.0), num(10.0), num(30.0)],
            vec![],
            vec![num(3.0), num(20.0), num(30.0)],
        ]);
        let sink = MemoryDiagnosticSink::default();
        let result = convert_document(
            &grid,
            "short.xlsx",
            "Лист1",
            &SpecConvertOptions::default(),
            &sink,
        )
        .expect("two records still convert");

        assert!(!result.report.ok);
        assert!(result
            .report
            .issues
            .iter()
            .any(|issue| issue.kind == EnumValidationIssueKind::DegenerateRing));
        assert_eq!(result.ring.len(), 3);
        assert_eq!(result.ring[2].position(), (10.0, 20.0));
    }

    #[test]
    fn cycle_check_can_be_disabled() {
        let grid = MemoryGrid::from_rows(vec![
            vec![num(1.0), num(0.0), num(0.0)],
            vec![num(4.0), num(1.0), num(0.0)],
            vec![num(9.0), num(0.0), num(1.0)],
        ]);
        let mut options = SpecConvertOptions::default();
        options.if_cycle_check = false;
        let sink = MemoryDiagnosticSink::default();

        let result = convert_document(&grid, "doc.xlsx", "Лист1", &options, &sink)
            .expect("converts without checks");
        assert!(result.report.ok);
        assert_eq!(result.report.issue_count(), 0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn start_not_found_is_recorded_and_returned() {
        let grid = MemoryGrid::from_rows(vec![
            vec![text("только")],
            vec![text("текст")],
        ]);
        let sink = MemoryDiagnosticSink::default();
        let err = convert_document(
            &grid,
            "bad.xlsx",
            "Лист1",
            &SpecConvertOptions::default(),
            &sink,
        )
        .expect_err("no coordinate rows");

        assert_eq!(err, ConvertError::StartNotFound { rows_scanned: 2 });
        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.events()[0].1.kind, "StartNotFound");
    }

    #[test]
    fn explicit_start_cell_overrides_the_scan() {
        // Two coordinate blocks; the explicit start picks the second one.
        let grid = MemoryGrid::from_rows(vec![
            vec![num(1.0), num(0.0), num(0.0)],
            vec![num(2.0), num(1.0), num(0.0)],
            vec![num(3.0), num(0.0), num(1.0)],
            vec![],
            vec![num(1.0), num(9.0), num(9.0)],
            vec![num(2.0), num(9.5), num(9.0)],
            vec![num(3.0), num(9.0), num(9.5)],
        ]);
        let mut options = SpecConvertOptions::default();
        options.start_cell = Some(SpecCellAddress::new(4, 0));

        let result = convert_document(
            &grid,
            "doc.xlsx",
            "Лист1",
            &options,
            &NullDiagnosticSink,
        )
        .expect("explicit start converts");
        assert_eq!(result.ring[0].position(), (9.0, 9.0));
        assert_eq!(result.ring.len(), 4);
    }

    #[test]
    fn invalid_explicit_start_fails_the_document() {
        let grid = grid_template();
        let mut options = SpecConvertOptions::default();
        options.start_cell = Some(SpecCellAddress::parse("A1").unwrap());
        let sink = MemoryDiagnosticSink::default();

        let err = convert_document(&grid, "doc.xlsx", "Лист1", &options, &sink)
            .expect_err("title row is not a coordinate row");
        assert!(matches!(err, ConvertError::StartCellInvalid { .. }));
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn anchor_failure_is_a_warning_not_an_error() {
        let grid = MemoryGrid::from_rows(vec![
            vec![num(1.0), num(0.0), num(0.0)],
            vec![num(2.0), num(1.0), num(0.0)],
            vec![num(3.0), num(0.0), num(1.0)],
            vec![num(1.0), num(0.0), num(0.0)],
        ]);
        let mut options = SpecConvertOptions::default();
        options.if_enable_anchor = true;
        let sink = MemoryDiagnosticSink::default();

        let result = convert_document(&grid, "doc.xlsx", "Лист1", &options, &sink)
            .expect("missing anchor never fails the document");
        assert!(result.anchor.is_none());
        assert_eq!(sink.error_count(), 0);
        let l_events = sink.events();
        assert_eq!(l_events.len(), 1);
        assert_eq!(l_events[0].1.kind, "AnchorNotFound");
    }
}
