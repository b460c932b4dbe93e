use crate::{
    raster::Image,
    timing::{TimingHarness, TimingResult},
    transform::TransformKind,
};

pub struct SweepEntry {
    pub timing: TimingResult<i64>,
    pub output: Image,
}

/// Times and applies `kind` for every parameter in order. The first failing
/// parameter aborts the whole sweep.
pub fn run_sweep(
    image: &Image,
    kind: TransformKind,
    parameters: &[i64],
    harness: &TimingHarness,
) -> crate::Result<Vec<SweepEntry>> {
    let mut entries = Vec::with_capacity(parameters.len());
    for parameter in parameters.iter().copied() {
        let mean_latency = harness.measure(|| kind.apply(image, parameter))?;
        let output = kind.apply(image, parameter)?;
        log::info!(
            "{}: {}, mean over {} runs: {:?}, output {}x{}",
            kind.parameter_label(),
            parameter,
            harness.repetitions(),
            mean_latency,
            output.width(),
            output.height()
        );
        entries.push(SweepEntry {
            timing: TimingResult {
                parameter,
                mean_latency,
            },
            output,
        });
    }
    Ok(entries)
}
