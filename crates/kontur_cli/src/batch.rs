//! Batch driver: per-document pipeline and parallel execution.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{error, info, warn};

use kontur_engine::{SpecConvertOptions, convert_document};
use kontur_io_geojson::render_feature_collection;
use kontur_io_xlsx::load_sheet_grid;

use crate::cli::Cli;
use crate::discover::discover_input_files;
use crate::sink::TracingDiagnosticSink;

////////////////////////////////////////////////////////////////////////////////
// #region BatchReport

/// Outcome counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportBatch {
    /// Documents converted and written.
    pub n_converted: usize,
    /// Documents that failed anywhere in the pipeline.
    pub n_failed: usize,
}

impl ReportBatch {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} converted={} failed={}",
            self.n_converted, self.n_failed
        )
    }
}

impl fmt::Display for ReportBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[BATCH]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Pipeline

/// Convert one workbook and write its GeoJSON file. Returns the output path.
fn process_document(
    path: &Path,
    sheet: Option<&str>,
    options: &SpecConvertOptions,
    path_dir_output: &Path,
    sink: &TracingDiagnosticSink,
) -> anyhow::Result<PathBuf> {
    let document_id = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("(unnamed)")
        .to_string();

    let sheet_grid = load_sheet_grid(path, sheet)
        .with_context(|| format!("failed to load workbook {}", path.display()))?;

    let result = convert_document(
        &sheet_grid.grid,
        &document_id,
        &sheet_grid.sheet_name,
        options,
        sink,
    )
    .with_context(|| format!("conversion failed for {}", path.display()))?;

    let c_geojson = render_feature_collection(&result)
        .with_context(|| format!("serialization failed for {}", path.display()))?;

    let c_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    std::fs::create_dir_all(path_dir_output).with_context(|| {
        format!(
            "failed to create output directory {}",
            path_dir_output.display()
        )
    })?;
    let path_output = path_dir_output.join(format!("{c_stem}.geojson"));
    std::fs::write(&path_output, c_geojson)
        .with_context(|| format!("failed to write {}", path_output.display()))?;

    Ok(path_output)
}

/// Run the whole batch described by the command line.
///
/// Per-document failures are counted, never propagated; only argument and
/// input-listing problems abort the run.
pub fn run_batch(cli: &Cli) -> anyhow::Result<ReportBatch> {
    let options = cli.derive_convert_options()?;
    let l_files = discover_input_files(&cli.input_path())?;
    if l_files.is_empty() {
        info!("No .xlsx files to process.");
        return Ok(ReportBatch::default());
    }

    let sink = TracingDiagnosticSink;
    let sheet = cli.sheet.as_deref();
    let run_one = |path: &PathBuf| {
        let res = process_document(path, sheet, &options, &cli.output, &sink);
        (path.clone(), res)
    };

    let l_results: Vec<(PathBuf, anyhow::Result<PathBuf>)> = if l_files.len() == 1
        || cli.jobs == Some(1)
    {
        l_files.iter().map(run_one).collect()
    } else {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(cli.jobs.unwrap_or(0))
            .build();
        match thread_pool {
            Ok(thread_pool) => {
                thread_pool.install(|| l_files.par_iter().map(run_one).collect())
            }
            Err(err) => {
                warn!("Failed to initialize thread pool ({err}); fallback to serial conversion.");
                l_files.iter().map(run_one).collect()
            }
        }
    };

    let mut report = ReportBatch::default();
    for (path_input, res) in l_results {
        match res {
            Ok(path_output) => {
                info!(
                    "GeoJSON written: {} -> {}",
                    path_input.display(),
                    path_output.display()
                );
                report.n_converted += 1;
            }
            Err(err) => {
                error!("Skipping {}: {err:#}", path_input.display());
                report.n_failed += 1;
            }
        }
    }
    Ok(report)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
