//! FAST-12 corner detection.
//!
//! A pixel is a corner when at least 12 contiguous samples on the radius-3
//! circle around it are all brighter than `center + threshold` or all darker
//! than `center - threshold`. Corners are scored with the largest threshold
//! at which they still pass, ranked strongest first, and optionally thinned
//! with 3x3 non-maximum suppression.
//!
//! ```
//! use fast12_core::{IntensityGrid, Limit};
//!
//! let grid = IntensityGrid::filled(32, 32, 100).unwrap();
//! let corners = fast12_detect::detect_with_nonmax(&grid, 20, Limit::Unbounded);
//! assert!(corners.is_empty());
//! ```

mod trace;

pub mod builder;
pub mod config;
pub mod detector;
pub mod error;
pub mod scanner;
pub mod score;
pub mod suppression;
pub mod types;

pub use builder::DetectorBuilder;
pub use config::DetectorConfig;
pub use detector::Fast12Detector;
pub use error::{FastError, FastResult};
pub use scanner::FeatureScanner;
pub use score::CornerScorer;
pub use segment_test::SegmentTest;
pub use suppression::NonMaxSuppressor;
pub use types::{Candidate, CornerType};

pub use fast12_core::{FastConfig, FeaturePoint, IntensityGrid, Limit};

/// See [`SegmentTest::is_corner`]
pub fn is_corner(grid: &IntensityGrid, x: usize, y: usize, threshold: i32) -> bool {
    SegmentTest::is_corner(grid, x, y, threshold)
}

/// See [`CornerScorer::score`]
pub fn corner_score(grid: &IntensityGrid, x: usize, y: usize) -> u8 {
    CornerScorer::score(grid, x, y)
}

/// See [`FeatureScanner::scan`]
pub fn scan(grid: &IntensityGrid, threshold: i32) -> Vec<Candidate> {
    FeatureScanner::scan(grid, threshold)
}

/// See [`FeatureScanner::detect`]
pub fn detect(grid: &IntensityGrid, threshold: i32, limit: Limit) -> Vec<FeaturePoint> {
    FeatureScanner::detect(grid, threshold, limit)
}

/// See [`NonMaxSuppressor::suppress`]
pub fn suppress(width: usize, height: usize, features: &[FeaturePoint]) -> Vec<FeaturePoint> {
    NonMaxSuppressor::suppress(width, height, features)
}

/// See [`NonMaxSuppressor::detect_with_nonmax`]
pub fn detect_with_nonmax(grid: &IntensityGrid, threshold: i32, limit: Limit) -> Vec<FeaturePoint> {
    NonMaxSuppressor::detect_with_nonmax(grid, threshold, limit)
}
