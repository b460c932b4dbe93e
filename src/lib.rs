use std::path::{Path, PathBuf};

pub use cli::{prompt_for_input_file, CLIParser};
pub use error::{Error, ErrorKind};
use raster::reader::read_grayscale_image;
use report::{ensure_results_directory, write_report, ReportPaths};
use sweep::{run_sweep, SweepEntry};
use timing::TimingHarness;
use transform::TransformKind;

mod cli;
mod error;
mod logger;
pub mod quantizer;
pub mod raster;
pub mod report;
pub mod spatial;
pub mod sweep;
pub mod timing;
pub mod transform;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: Option<PathBuf>,
    mode: TransformKind,
    parameters: Vec<i64>,
    repetitions: u32,
    results_directory: PathBuf,
}

impl Arguments {
    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    pub fn mode(&self) -> TransformKind {
        self.mode
    }
}

pub struct SweepOutcome {
    pub entries: Vec<SweepEntry>,
    pub report_paths: ReportPaths,
}

/// Loads `input_file`, sweeps the configured transform over all parameters
/// and writes the comparison sheet and performance plot.
pub fn sweep_image_file(arguments: &Arguments, input_file: &Path) -> Result<SweepOutcome> {
    ensure_results_directory(&arguments.results_directory)?;
    let harness = TimingHarness::new(arguments.repetitions)?;
    let image = read_grayscale_image(input_file)?;
    let entries = run_sweep(&image, arguments.mode, &arguments.parameters, &harness)?;
    let report_paths = ReportPaths::new(&arguments.results_directory, input_file, arguments.mode);
    write_report(&report_paths, &image, &entries)?;
    Ok(SweepOutcome {
        entries,
        report_paths,
    })
}
