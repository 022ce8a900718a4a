//! Command-line surface of the `kontur` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use kontur_engine::conf::derive_default_convert_options;
use kontur_engine::{SpecCellAddress, SpecConvertOptions};

/// Output directory used when `-o` is not given, as in the source template
/// workflows.
pub const C_OUTPUT_DIR_DEFAULT: &str = "result";

#[derive(Parser, Debug)]
#[command(
    name = "kontur",
    version,
    about = "Extract polygon boundaries from spreadsheet documents into GeoJSON"
)]
pub struct Cli {
    /// Input `.xlsx` file or a directory of them (default: current directory).
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = C_OUTPUT_DIR_DEFAULT, help = "Output directory for GeoJSON files")]
    pub output: PathBuf,

    #[arg(long, help = "Worksheet name (default: first worksheet)")]
    pub sheet: Option<String>,

    #[arg(long, help = "A1-style start cell of the coordinate block (e.g. F19)")]
    pub start_cell: Option<String>,

    #[arg(long, help = "Disable the numbering/closure cycle check")]
    pub no_cycle_check: bool,

    #[arg(long, help = "Extract the reference anchor point as a Point feature")]
    pub anchor: bool,

    #[arg(long, help = "Worker threads for batch conversion (default: rayon's)")]
    pub jobs: Option<usize>,
}

impl Cli {
    /// Resolve the input path, defaulting to the current directory.
    pub fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Derive engine options from the parsed arguments.
    pub fn derive_convert_options(&self) -> anyhow::Result<SpecConvertOptions> {
        let start_cell = match &self.start_cell {
            Some(reference) => Some(
                SpecCellAddress::parse(reference)
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("--start-cell {reference:?}"))?,
            ),
            None => None,
        };

        let mut options = derive_default_convert_options();
        options.if_cycle_check = !self.no_cycle_check;
        options.start_cell = start_cell;
        options.if_enable_anchor = self.anchor;
        Ok(options)
    }
}
