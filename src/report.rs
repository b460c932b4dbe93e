//! Rendering of sweep results: a side-by-side comparison sheet and a plot of
//! mean latency against the swept parameter, both written as PNG files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{imageops, GrayImage, Luma};

use crate::{error::Error, raster::Image, sweep::SweepEntry, transform::TransformKind};

const GUTTER_WIDTH: u32 = 8;
const PLOT_WIDTH: u32 = 640;
const PLOT_HEIGHT: u32 = 400;
const PLOT_MARGIN: u32 = 40;
const GRID_LINES: u32 = 4;
const MARKER_RADIUS: i64 = 3;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);
const GRID: Luma<u8> = Luma([220]);
const CURVE: Luma<u8> = Luma([64]);

pub struct ReportPaths {
    pub comparison_image: PathBuf,
    pub performance_plot: PathBuf,
}

impl ReportPaths {
    pub fn new(results_directory: &Path, input_file: &Path, kind: TransformKind) -> Self {
        let stem = output_stem(input_file);
        Self {
            comparison_image: results_directory
                .join(format!("{}_{}.png", stem, kind.comparison_suffix())),
            performance_plot: results_directory.join(format!("{}_performance_plot.png", stem)),
        }
    }
}

/// File name of `input_file` up to its first dot, so `lena.tif.png` yields
/// `lena`.
pub fn output_stem(input_file: &Path) -> String {
    let file_name = input_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_owned(),
        None => file_name,
    }
}

pub fn ensure_results_directory(path: &Path) -> crate::Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::UnableToCreateResultsDirectory(path.display().to_string(), e))
}

pub fn write_report(
    paths: &ReportPaths,
    original: &Image,
    entries: &[SweepEntry],
) -> crate::Result<()> {
    save(&render_comparison_sheet(original, entries), &paths.comparison_image)?;
    save(&render_performance_plot(entries), &paths.performance_plot)
}

fn save(canvas: &GrayImage, path: &Path) -> crate::Result<()> {
    canvas
        .save(path)
        .map_err(|e| Error::UnableToWriteOutputImage(path.display().to_string(), e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Original followed by every sweep output. Outputs are scaled back to the
/// original size with nearest-neighbor sampling so reduced blocks stay
/// visible.
pub fn render_comparison_sheet(original: &Image, entries: &[SweepEntry]) -> GrayImage {
    let tile_width = original.width();
    let tile_height = original.height();
    let number_of_tiles = entries.len() as u32 + 1;
    let sheet_width = number_of_tiles * tile_width + (number_of_tiles - 1) * GUTTER_WIDTH;
    let mut sheet = GrayImage::from_pixel(sheet_width, tile_height, WHITE);
    imageops::replace(&mut sheet, &original.to_gray_image(), 0, 0);
    for (index, entry) in entries.iter().enumerate() {
        let tile = imageops::resize(
            &entry.output.to_gray_image(),
            tile_width,
            tile_height,
            imageops::FilterType::Nearest,
        );
        let offset = (index as u32 + 1) * (tile_width + GUTTER_WIDTH);
        imageops::replace(&mut sheet, &tile, offset as i64, 0);
    }
    sheet
}

/// Line plot of mean latency (y) over the parameter (x), with a light grid.
/// The y axis starts at zero; the x axis spans the parameter range.
pub fn render_performance_plot(entries: &[SweepEntry]) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(PLOT_WIDTH, PLOT_HEIGHT, WHITE);
    let left = PLOT_MARGIN as i64;
    let right = (PLOT_WIDTH - PLOT_MARGIN) as i64;
    let top = PLOT_MARGIN as i64;
    let bottom = (PLOT_HEIGHT - PLOT_MARGIN) as i64;

    for line in 1..=GRID_LINES as i64 {
        let y = bottom - (bottom - top) * line / GRID_LINES as i64;
        draw_line(&mut canvas, (left, y), (right, y), GRID);
    }
    draw_line(&mut canvas, (left, bottom), (right, bottom), BLACK);
    draw_line(&mut canvas, (left, top), (left, bottom), BLACK);

    let points = plot_points(entries, (left, right), (top, bottom));
    for pair in points.windows(2) {
        draw_line(&mut canvas, pair[0], pair[1], CURVE);
    }
    for (x, y) in points.iter().copied() {
        draw_line(&mut canvas, (x, bottom), (x, bottom + MARKER_RADIUS * 2), BLACK);
        draw_marker(&mut canvas, (x, y), BLACK);
    }
    canvas
}

fn plot_points(
    entries: &[SweepEntry],
    (left, right): (i64, i64),
    (top, bottom): (i64, i64),
) -> Vec<(i64, i64)> {
    let parameters = entries.iter().map(|entry| entry.timing.parameter);
    let (Some(min_parameter), Some(max_parameter)) = (parameters.clone().min(), parameters.max())
    else {
        return Vec::new();
    };
    let max_seconds = entries
        .iter()
        .map(|entry| entry.timing.seconds())
        .fold(0.0_f64, f64::max);
    entries
        .iter()
        .map(|entry| {
            let x = if max_parameter == min_parameter {
                (left + right) / 2
            } else {
                left + (right - left) * (entry.timing.parameter - min_parameter)
                    / (max_parameter - min_parameter)
            };
            let y = if max_seconds > 0.0 {
                bottom - ((bottom - top) as f64 * entry.timing.seconds() / max_seconds).round() as i64
            } else {
                bottom
            };
            (x, y)
        })
        .collect()
}

fn put_pixel_clipped(canvas: &mut GrayImage, (x, y): (i64, i64), color: Luma<u8>) {
    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(canvas: &mut GrayImage, from: (i64, i64), to: (i64, i64), color: Luma<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs());
    if steps == 0 {
        put_pixel_clipped(canvas, from, color);
        return;
    }
    for step in 0..=steps {
        let x = from.0 + (to.0 - from.0) * step / steps;
        let y = from.1 + (to.1 - from.1) * step / steps;
        put_pixel_clipped(canvas, (x, y), color);
    }
}

fn draw_marker(canvas: &mut GrayImage, (x, y): (i64, i64), color: Luma<u8>) {
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            put_pixel_clipped(canvas, (x + dx, y + dy), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use super::{
        output_stem, render_comparison_sheet, render_performance_plot, ReportPaths, GUTTER_WIDTH,
        PLOT_HEIGHT, PLOT_MARGIN, PLOT_WIDTH,
    };
    use crate::raster::Image;
    use crate::sweep::SweepEntry;
    use crate::timing::TimingResult;
    use crate::transform::TransformKind;

    fn create_entry(parameter: i64, micros: u64, output: Image) -> SweepEntry {
        SweepEntry {
            timing: TimingResult {
                parameter,
                mean_latency: Duration::from_micros(micros),
            },
            output,
        }
    }

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(output_stem(Path::new("images/Lena-Image.png")), "Lena-Image");
        assert_eq!(output_stem(Path::new("caman.tif.bak")), "caman");
        assert_eq!(output_stem(Path::new("barbara")), "barbara");
    }

    #[test]
    fn report_paths_per_kind() {
        let paths = ReportPaths::new(
            Path::new("results_spatial"),
            Path::new("/data/barbara.bmp"),
            TransformKind::SpatialReduction,
        );
        assert_eq!(
            paths.comparison_image,
            Path::new("results_spatial/barbara_spatial_results.png")
        );
        assert_eq!(
            paths.performance_plot,
            Path::new("results_spatial/barbara_performance_plot.png")
        );
    }

    #[test]
    fn comparison_sheet_places_scaled_tiles_side_by_side() {
        let original = Image::new(4, 2, vec![10; 8]).unwrap();
        let reduced = Image::new(2, 1, vec![90, 200]).unwrap();
        let sheet = render_comparison_sheet(&original, &[create_entry(2, 5, reduced)]);
        assert_eq!(sheet.dimensions(), (8 + GUTTER_WIDTH, 2));
        assert_eq!(sheet.get_pixel(3, 1).0, [10]);
        assert_eq!(sheet.get_pixel(4, 0).0, [255]);
        let tile_start = 4 + GUTTER_WIDTH;
        assert_eq!(sheet.get_pixel(tile_start, 0).0, [90]);
        assert_eq!(sheet.get_pixel(tile_start + 3, 1).0, [200]);
    }

    #[test]
    fn performance_plot_marks_each_measurement() {
        let output = Image::new(1, 1, vec![0]).unwrap();
        let entries = [
            create_entry(1, 100, output.clone()),
            create_entry(6, 200, output),
        ];
        let plot = render_performance_plot(&entries);
        assert_eq!(plot.dimensions(), (PLOT_WIDTH, PLOT_HEIGHT));
        // slowest point sits on the top grid line, the other halfway down
        assert_eq!(plot.get_pixel(PLOT_WIDTH - PLOT_MARGIN, PLOT_MARGIN).0, [0]);
        assert_eq!(plot.get_pixel(PLOT_MARGIN, PLOT_HEIGHT / 2).0, [0]);
    }

    #[test]
    fn performance_plot_without_entries_only_has_axes() {
        let plot = render_performance_plot(&[]);
        assert_eq!(plot.get_pixel(PLOT_MARGIN, PLOT_HEIGHT - PLOT_MARGIN).0, [0]);
        assert_eq!(plot.get_pixel(PLOT_WIDTH / 2, PLOT_HEIGHT / 2 + 1).0, [255]);
    }
}
