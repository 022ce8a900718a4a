//! Cycle validator: advisory numbering, closure, and degeneracy checks.

use std::collections::BTreeSet;

use crate::conf::{N_GAP_ISSUES_MAX, N_RING_VERTICES_MIN};
use crate::report::{EnumValidationIssueKind, ReportValidation, ReportValidationBuilder};
use crate::spec::SpecCoordinateRecord;
use crate::util::calculate_point_distance;

/// Validate one walked sequence as a cyclic boundary.
///
/// The numbering run starts at the first observed ordinal. A trailing record
/// that repeats the first ordinal is treated as the explicit closing row and
/// is excluded from the continuity checks.
pub fn validate_sequence(
    records: &[SpecCoordinateRecord],
    thr_ring_closure: f64,
) -> ReportValidation {
    let Some(first) = records.first() else {
        return ReportValidation::passed();
    };
    let last = &records[records.len() - 1];
    let if_explicit_closing = records.len() >= 2 && last.ordinal == first.ordinal;
    let l_run = if if_explicit_closing {
        &records[..records.len() - 1]
    } else {
        records
    };

    let mut builder = ReportValidationBuilder::default();

    let mut n_expected = first.ordinal;
    let mut set_seen: BTreeSet<u64> = BTreeSet::new();
    for record in l_run {
        if !set_seen.insert(record.ordinal) {
            builder.add_issue(
                EnumValidationIssueKind::DuplicateOrdinal,
                record.source_address.to_a1(),
                format!("Ordinal {} repeats inside the numbering run.", record.ordinal),
            );
            continue;
        }
        if record.ordinal > n_expected {
            let n_gap = record.ordinal - n_expected;
            if n_gap <= N_GAP_ISSUES_MAX as u64 {
                for n_missing in n_expected..record.ordinal {
                    builder.add_issue(
                        EnumValidationIssueKind::NumberingGap,
                        n_missing.to_string(),
                        format!(
                            "Ordinal {n_missing} is missing from the numbering run (detected at {}).",
                            record.source_address.to_a1()
                        ),
                    );
                }
            } else {
                // A gap this wide is a mis-typed ordinal cell, not a run of
                // dropped rows; one ranged issue keeps the report bounded.
                builder.add_issue(
                    EnumValidationIssueKind::NumberingGap,
                    format!("{}..{}", n_expected, record.ordinal - 1),
                    format!(
                        "Ordinals {}..{} ({n_gap} values) are missing from the numbering run (detected at {}).",
                        n_expected,
                        record.ordinal - 1,
                        record.source_address.to_a1()
                    ),
                );
            }
            n_expected = record.ordinal + 1;
        } else if record.ordinal == n_expected {
            n_expected += 1;
        }
        // An unseen ordinal below the expected one backfills a gap that was
        // already reported; it is not a duplicate.
    }

    let if_geometric_closing =
        calculate_point_distance(first.position(), last.position()) <= thr_ring_closure;
    if !if_explicit_closing && !if_geometric_closing {
        builder.add_issue(
            EnumValidationIssueKind::RingNotClosed,
            last.source_address.to_a1(),
            "First and last points neither coincide nor share an ordinal.".to_string(),
        );
    }

    let set_positions: BTreeSet<(u64, u64)> = records
        .iter()
        .map(|record| (record.x.to_bits(), record.y.to_bits()))
        .collect();
    if set_positions.len() < N_RING_VERTICES_MIN {
        builder.add_issue(
            EnumValidationIssueKind::DegenerateRing,
            first.source_address.to_a1(),
            format!(
                "Only {} distinct point(s); a ring needs at least {N_RING_VERTICES_MIN}.",
                set_positions.len()
            ),
        );
    }

    builder.build()
}
