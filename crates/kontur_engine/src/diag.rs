//! Diagnostic sink seam between the engine and its host.
//!
//! The engine never prints. Everything a document-scoped failure or an
//! advisory issue wants to say goes through a [`DiagnosticSink`] owned by
//! the caller.

use std::sync::Mutex;

/// Severity of one diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDiagSeverity {
    /// Advisory; conversion continued.
    Warning,
    /// Document-scoped failure; conversion of that document stopped.
    Error,
}

impl EnumDiagSeverity {
    /// Stable severity string for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One diagnostic event attributed to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDiagEvent {
    /// Event severity.
    pub severity: EnumDiagSeverity,
    /// Stable machine-readable kind, e.g. an error taxonomy name.
    pub kind: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl SpecDiagEvent {
    /// Build an error-severity event.
    pub fn error(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: EnumDiagSeverity::Error,
            kind,
            message: message.into(),
        }
    }

    /// Build a warning-severity event.
    pub fn warning(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: EnumDiagSeverity::Warning,
            kind,
            message: message.into(),
        }
    }
}

/// Receiver for diagnostic events. `Sync` so batch workers can share one sink.
pub trait DiagnosticSink: Sync {
    /// Record one event for `document_id`.
    fn record(&self, document_id: &str, event: SpecDiagEvent);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn record(&self, _document_id: &str, _event: SpecDiagEvent) {}
}

/// Sink that collects events in memory, used by tests and summaries.
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    events: Mutex<Vec<(String, SpecDiagEvent)>>,
}

impl MemoryDiagnosticSink {
    /// Snapshot of all recorded events in arrival order.
    pub fn events(&self) -> Vec<(String, SpecDiagEvent)> {
        self.events.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Number of error-severity events recorded.
    pub fn error_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|(_, event)| event.severity == EnumDiagSeverity::Error)
            .count()
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn record(&self, document_id: &str, event: SpecDiagEvent) {
        if let Ok(mut l_events) = self.events.lock() {
            l_events.push((document_id.to_string(), event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagnosticSink, EnumDiagSeverity, MemoryDiagnosticSink, SpecDiagEvent};

    #[test]
    fn memory_sink_collects_in_order() {
        let sink = MemoryDiagnosticSink::default();
        sink.record("a.xlsx", SpecDiagEvent::warning("NumberingGap", "ordinal 3 missing"));
        sink.record("b.xlsx", SpecDiagEvent::error("StartNotFound", "no coordinate row"));

        let l_events = sink.events();
        assert_eq!(l_events.len(), 2);
        assert_eq!(l_events[0].0, "a.xlsx");
        assert_eq!(l_events[0].1.severity, EnumDiagSeverity::Warning);
        assert_eq!(l_events[1].1.kind, "StartNotFound");
        assert_eq!(sink.error_count(), 1);
    }
}
