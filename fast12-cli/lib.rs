use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fast12_core::{FastConfig, FeaturePoint, IntensityGrid};
use fast12_detect::{Fast12Detector, FastResult};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub use fast12_detect::DetectorConfig;

/// Thresholds swept when none are given
pub const DEFAULT_THRESHOLDS: [i32; 5] = [30, 25, 22, 20, 19];

const MARK_COLOR: Rgb<u8> = Rgb([250, 0, 0]);

/// Grayscale by the plain mean of R, G and B
pub fn gray_average(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        let mean = (r as u32 + g as u32 + b as u32) / 3;
        Luma([mean.min(255) as u8])
    })
}

pub fn to_grid(gray: &GrayImage) -> FastResult<IntensityGrid> {
    Ok(IntensityGrid::from_luma8(
        gray.width() as usize,
        gray.height() as usize,
        gray.as_raw(),
    )?)
}

/// Gray image in RGB with a red 2x2 box at every feature
pub fn draw_features(gray: &GrayImage, features: &[FeaturePoint]) -> RgbImage {
    let mut output = image::DynamicImage::ImageLuma8(gray.clone()).into_rgb8();
    for fp in features {
        draw_hollow_rect_mut(
            &mut output,
            Rect::at(fp.x as i32, fp.y as i32).of_size(2, 2),
            MARK_COLOR,
        );
    }
    output
}

/// `<dir>/<stem>_<tag>_t<threshold>.<ext>` next to the input by default
pub fn overlay_path(input: &Path, out_dir: Option<&Path>, tag: &str, threshold: i32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}_{}_t{}.{}", stem, tag, threshold, ext))
}

/// Settings passed on the command line; `None`/empty/`false` means not given
#[derive(Debug, Clone, Default)]
pub struct SweepOverrides {
    pub thresholds: Vec<i32>,
    pub limit: Option<usize>,
    pub parallel: bool,
}

/// Pipeline settings and thresholds for a run.
///
/// Starts from the config file when present (its threshold is the only one
/// swept), otherwise from defaults with [`DEFAULT_THRESHOLDS`]. Flags given
/// explicitly replace the corresponding setting either way.
pub fn resolve_settings(config: Option<&DetectorConfig>, overrides: &SweepOverrides) -> (FastConfig, Vec<i32>) {
    let (mut base, mut thresholds) = match config {
        Some(cfg) => (cfg.core.clone(), vec![cfg.core.threshold]),
        None => (FastConfig::default(), DEFAULT_THRESHOLDS.to_vec()),
    };

    if !overrides.thresholds.is_empty() {
        thresholds = overrides.thresholds.clone();
    }
    if overrides.limit.is_some() {
        base.max_features = overrides.limit;
    }
    if overrides.parallel {
        base.parallel = true;
    }

    (base, thresholds)
}

/// Timed detection for one pipeline variant
#[derive(Debug, Clone)]
pub struct Run {
    pub features: Vec<FeaturePoint>,
    pub elapsed: Duration,
}

/// Both pipeline variants at one threshold
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub threshold: i32,
    pub with_nonmax: Run,
    pub without_nonmax: Run,
}

impl SweepResult {
    /// Report lines in the `label: B=<threshold>: N=<count>: T=<ms>` layout
    pub fn report(&self) -> String {
        format!(
            "With non-max: B={}: N={}: T={}\nWithout non-max: B={}: N={}: T={}\n-----------------------",
            self.threshold,
            self.with_nonmax.features.len(),
            self.with_nonmax.elapsed.as_millis(),
            self.threshold,
            self.without_nonmax.features.len(),
            self.without_nonmax.elapsed.as_millis(),
        )
    }
}

/// Run suppressed and raw detection for every threshold.
///
/// `base` supplies the limit and parallelism; its threshold and
/// suppression flag are replaced per run.
pub fn run_sweep(grid: &IntensityGrid, base: &FastConfig, thresholds: &[i32]) -> FastResult<Vec<SweepResult>> {
    let (w, h) = grid.dimensions();
    let mut results = Vec::with_capacity(thresholds.len());

    for &threshold in thresholds {
        let cfg = FastConfig { threshold, ..base.clone() };
        let detector = Fast12Detector::new(cfg, w, h)?;

        let t0 = Instant::now();
        let features = detector.detect_with_nonmax(grid)?;
        let with_nonmax = Run { features, elapsed: t0.elapsed() };

        let t0 = Instant::now();
        let features = detector.detect_without_nonmax(grid)?;
        let without_nonmax = Run { features, elapsed: t0.elapsed() };

        results.push(SweepResult { threshold, with_nonmax, without_nonmax });
    }

    Ok(results)
}
