//! Tracing-backed diagnostic sink for batch runs.

use tracing::{error, warn};

use kontur_engine::diag::{DiagnosticSink, EnumDiagSeverity, SpecDiagEvent};

/// Forwards engine diagnostics to the process-wide tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn record(&self, document_id: &str, event: SpecDiagEvent) {
        match event.severity {
            EnumDiagSeverity::Warning => {
                warn!(document = document_id, kind = event.kind, "{}", event.message);
            }
            EnumDiagSeverity::Error => {
                error!(document = document_id, kind = event.kind, "{}", event.message);
            }
        }
    }
}
