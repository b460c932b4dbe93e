use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::Error;

pub const QUANTIZATION_REPETITIONS: u32 = 1000;
pub const SPATIAL_REDUCTION_REPETITIONS: u32 = 100;

/// Runs a transform a fixed number of times back to back and reports the
/// mean wall-clock time of a single call.
#[derive(Clone, Copy, Debug)]
pub struct TimingHarness {
    repetitions: u32,
}

impl TimingHarness {
    pub fn new(repetitions: u32) -> crate::Result<Self> {
        if repetitions == 0 {
            return Err(Error::InvalidRepetitionCount);
        }
        Ok(Self { repetitions })
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Every repetition performs the full transform; results are handed to
    /// `black_box` and dropped so the compiler cannot skip the work.
    pub fn measure<T, F>(&self, mut transform: F) -> crate::Result<Duration>
    where
        F: FnMut() -> crate::Result<T>,
    {
        let start = Instant::now();
        for _ in 0..self.repetitions {
            black_box(transform()?);
        }
        Ok(start.elapsed() / self.repetitions)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingResult<P> {
    pub parameter: P,
    pub mean_latency: Duration,
}

impl<P> TimingResult<P> {
    pub fn seconds(&self) -> f64 {
        self.mean_latency.as_secs_f64()
    }
}

/// Summary over several measurement rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingStatistics {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub std_deviation_micros: u64,
}

impl TimingStatistics {
    pub fn from_rounds(durations: &[Duration]) -> Option<Self> {
        let min = *durations.iter().min()?;
        let max = *durations.iter().max()?;
        let mean = durations.iter().sum::<Duration>() / durations.len() as u32;
        Some(Self {
            min,
            max,
            mean,
            std_deviation_micros: calculate_std_deviation_in_micros(&mean, durations),
        })
    }
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}
