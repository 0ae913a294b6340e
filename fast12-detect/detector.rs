use fast12_core::{FastConfig, FeaturePoint, IntensityGrid, Limit};
use crate::error::{FastError, FastResult};
use crate::scanner::FeatureScanner;
use crate::suppression::NonMaxSuppressor;

/// FAST-12 detector bound to one image size and configuration
#[derive(Debug, Clone)]
pub struct Fast12Detector {
    cfg: FastConfig,
    w: usize,
    h: usize,
}

impl Fast12Detector {
    /// Creates a new detector with validation
    pub fn new(cfg: FastConfig, width: usize, height: usize) -> FastResult<Self> {
        if width == 0 || height == 0 {
            return Err(FastError::InvalidImageSize { width, height });
        }

        if cfg.threshold < 0 {
            return Err(FastError::InvalidThreshold(cfg.threshold));
        }

        Ok(Self {
            cfg,
            w: width,
            h: height,
        })
    }

    fn validate_grid(&self, grid: &IntensityGrid) -> FastResult<()> {
        if grid.dimensions() != (self.w, self.h) {
            return Err(FastError::DimensionMismatch {
                expected_width: self.w,
                expected_height: self.h,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(())
    }

    /// Run the configured pipeline: detection, optional suppression, limit
    pub fn detect(&self, grid: &IntensityGrid) -> FastResult<Vec<FeaturePoint>> {
        if self.cfg.nonmax_suppression {
            self.detect_with_nonmax(grid)
        } else {
            self.detect_without_nonmax(grid)
        }
    }

    /// Ranked corners without suppression
    pub fn detect_without_nonmax(&self, grid: &IntensityGrid) -> FastResult<Vec<FeaturePoint>> {
        self.validate_grid(grid)?;
        Ok(self.ranked(grid, self.cfg.limit()))
    }

    /// Ranked corners after suppression over the complete candidate set
    pub fn detect_with_nonmax(&self, grid: &IntensityGrid) -> FastResult<Vec<FeaturePoint>> {
        self.validate_grid(grid)?;
        let features = self.ranked(grid, Limit::Unbounded);
        let mut survivors = NonMaxSuppressor::suppress(self.w, self.h, &features);
        self.cfg.limit().apply(&mut survivors);
        Ok(survivors)
    }

    /// Detect on a row-major 8-bit buffer of the configured size
    pub fn detect_luma8(&self, pixels: &[u8]) -> FastResult<Vec<FeaturePoint>> {
        let expected_len = self.w * self.h;
        if pixels.len() != expected_len {
            return Err(FastError::InvalidImageData {
                expected_len,
                actual_len: pixels.len(),
            });
        }
        let grid = IntensityGrid::from_luma8(self.w, self.h, pixels)?;
        self.detect(&grid)
    }

    fn ranked(&self, grid: &IntensityGrid, limit: Limit) -> Vec<FeaturePoint> {
        if self.cfg.parallel {
            FeatureScanner::detect_parallel(grid, self.cfg.threshold, limit)
        } else {
            FeatureScanner::detect(grid, self.cfg.threshold, limit)
        }
    }

    /// Get detector configuration
    pub fn config(&self) -> &FastConfig {
        &self.cfg
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
