use std::time::{Duration, Instant};

use grayscale_reduction::quantizer::{quantize, BitDepth};
use grayscale_reduction::raster::Image;
use grayscale_reduction::spatial::{reduce_resolution, ReductionFactor};
use grayscale_reduction::timing::TimingStatistics;
use grayscale_reduction::Result;

const IMAGE_WIDTH: u32 = 3840;
const IMAGE_HEIGHT: u32 = 2160;
const NUMBER_OF_ROUNDS: u32 = 10;
const BIT_DEPTH: i64 = 4;
const REDUCTION_FACTOR: i64 = 4;

fn create_test_image() -> Result<Image> {
    Image::from_fn(IMAGE_WIDTH, IMAGE_HEIGHT, |x, y| ((x + y * 8) % 256) as u8)
}

fn time_rounds<F>(name: &str, mut transform: F) -> Result<Vec<Duration>>
where
    F: FnMut() -> Result<Image>,
{
    println!("Starting {}", name);
    let mut durations: Vec<Duration> = Vec::new();
    for round in 1..=NUMBER_OF_ROUNDS {
        let start = Instant::now();
        let output = transform()?;
        let duration = start.elapsed();
        println!(
            "Finished round {} after {} microseconds ({}x{})",
            round,
            duration.as_micros(),
            output.width(),
            output.height(),
        );
        durations.push(duration);
    }
    Ok(durations)
}

fn print_statistics(name: &str, durations: &[Duration]) {
    if let Some(statistics) = TimingStatistics::from_rounds(durations) {
        println!(
            "{} - Min: {}, Max: {}, Average: {}, Std Deviation: {}",
            name,
            statistics.min.as_micros(),
            statistics.max.as_micros(),
            statistics.mean.as_micros(),
            statistics.std_deviation_micros,
        );
    }
}

fn run() -> Result<()> {
    println!("Creating {}x{} test image", IMAGE_WIDTH, IMAGE_HEIGHT);
    let test_image = create_test_image()?;
    let bit_depth = BitDepth::new(BIT_DEPTH)?;
    let reduction_factor = ReductionFactor::new(REDUCTION_FACTOR)?;

    let quantization = time_rounds("quantization", || Ok(quantize(&test_image, bit_depth)))?;
    let spatial_reduction = time_rounds("spatial reduction", || {
        reduce_resolution(&test_image, reduction_factor)
    })?;

    print_statistics("Quantization", &quantization);
    print_statistics("Spatial reduction", &spatial_reduction);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Timing failed because of: {}", e);
    }
}
