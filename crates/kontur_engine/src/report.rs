//! Validation report model and mutable report builder.

use std::fmt;

/// Kind of one advisory validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumValidationIssueKind {
    /// A declared ordinal is missing from the run.
    NumberingGap,
    /// A declared ordinal repeats inside the run.
    DuplicateOrdinal,
    /// First and last points neither coincide nor share an ordinal.
    RingNotClosed,
    /// Fewer than the minimum number of distinct points.
    DegenerateRing,
}

impl EnumValidationIssueKind {
    /// Stable kind string used in diagnostics and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberingGap => "NumberingGap",
            Self::DuplicateOrdinal => "DuplicateOrdinal",
            Self::RingNotClosed => "RingNotClosed",
            Self::DegenerateRing => "DegenerateRing",
        }
    }
}

/// One advisory issue recorded by the cycle validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecValidationIssue {
    /// Issue kind.
    pub kind: EnumValidationIssueKind,
    /// Offending ordinal (as text) or A1 cell address.
    pub at: String,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of one cycle-validation pass over a walked sequence.
///
/// Advisory only: a non-ok report never blocks geometry assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportValidation {
    /// True iff no issues were recorded.
    pub ok: bool,
    /// Issues in detection order.
    pub issues: Vec<SpecValidationIssue>,
}

impl Default for ReportValidation {
    fn default() -> Self {
        Self::passed()
    }
}

impl ReportValidation {
    /// Report for a sequence that was not checked or checked clean.
    pub fn passed() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
        }
    }

    /// Number of recorded issues.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!("{prefix} ok={} issues={}", self.ok, self.issue_count())
    }
}

impl fmt::Display for ReportValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[VALIDATE]"))
    }
}

/// Mutable accumulator for validation issues.
#[derive(Debug, Default, Clone)]
pub struct ReportValidationBuilder {
    issues: Vec<SpecValidationIssue>,
}

impl ReportValidationBuilder {
    /// Record one issue.
    pub fn add_issue(
        &mut self,
        kind: EnumValidationIssueKind,
        at: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.issues.push(SpecValidationIssue {
            kind,
            at: at.into(),
            message: message.into(),
        });
    }

    /// Finalize builder into an immutable report.
    pub fn build(self) -> ReportValidation {
        ReportValidation {
            ok: self.issues.is_empty(),
            issues: self.issues,
        }
    }
}
