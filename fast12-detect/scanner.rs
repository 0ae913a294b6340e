use std::ops::Range;

use fast12_core::{FeaturePoint, IntensityGrid, Limit};
use rayon::prelude::*;

use crate::score::CornerScorer;
use crate::segment_test::SegmentTest;
use crate::trace::{trace_event, trace_span};
use crate::types::Candidate;

/// Grid scan, scoring and ranking of FAST-12 corners
pub struct FeatureScanner;

impl FeatureScanner {
    /// Border excluded from the scan; covers the circle radius plus the
    /// 3x3 neighbourhood read by suppression.
    pub const MARGIN: usize = 4;

    /// Coordinates along one axis that respect the margin
    pub fn margin_range(len: usize) -> Range<usize> {
        Self::MARGIN..len.saturating_sub(Self::MARGIN)
    }

    /// Collect segment-test passes in row-major order
    pub fn scan(grid: &IntensityGrid, threshold: i32) -> Vec<Candidate> {
        let _span = trace_span!("fast12_scan", threshold = threshold).entered();
        let mut candidates = Vec::new();

        for y in Self::margin_range(grid.height()) {
            for x in Self::margin_range(grid.width()) {
                if SegmentTest::is_corner(grid, x, y, threshold) {
                    candidates.push(Candidate::new(x, y));
                }
            }
        }

        trace_event!("fast12_candidates", count = candidates.len());
        candidates
    }

    /// Row-parallel [`FeatureScanner::scan`]; output order is identical
    pub fn scan_parallel(grid: &IntensityGrid, threshold: i32) -> Vec<Candidate> {
        let _span = trace_span!("fast12_scan", threshold = threshold, parallel = true).entered();
        let columns = Self::margin_range(grid.width());

        let candidates: Vec<Candidate> = Self::margin_range(grid.height())
            .into_par_iter()
            .flat_map_iter(|y| {
                columns
                    .clone()
                    .filter(move |&x| SegmentTest::is_corner(grid, x, y, threshold))
                    .map(move |x| Candidate::new(x, y))
            })
            .collect();

        trace_event!("fast12_candidates", count = candidates.len());
        candidates
    }

    pub fn score_candidates(grid: &IntensityGrid, candidates: &[Candidate]) -> Vec<FeaturePoint> {
        let _span = trace_span!("fast12_score", count = candidates.len()).entered();
        candidates
            .iter()
            .map(|c| c.with_score(CornerScorer::score(grid, c.x, c.y)))
            .collect()
    }

    pub fn score_candidates_parallel(grid: &IntensityGrid, candidates: &[Candidate]) -> Vec<FeaturePoint> {
        let _span = trace_span!("fast12_score", count = candidates.len(), parallel = true).entered();
        candidates
            .par_iter()
            .map(|c| c.with_score(CornerScorer::score(grid, c.x, c.y)))
            .collect()
    }

    /// Stable sort, strongest first; ties keep scan order
    pub fn rank(features: &mut [FeaturePoint]) {
        features.sort_by(FeaturePoint::by_strength);
    }

    /// Detect, score and rank corners, keeping at most `limit`
    pub fn detect(grid: &IntensityGrid, threshold: i32, limit: Limit) -> Vec<FeaturePoint> {
        let _span = trace_span!("fast12_detect", threshold = threshold).entered();
        let candidates = Self::scan(grid, threshold);
        let mut features = Self::score_candidates(grid, &candidates);
        Self::rank(&mut features);
        limit.apply(&mut features);
        features
    }

    /// [`FeatureScanner::detect`] with parallel scan and scoring
    pub fn detect_parallel(grid: &IntensityGrid, threshold: i32, limit: Limit) -> Vec<FeaturePoint> {
        let _span = trace_span!("fast12_detect", threshold = threshold, parallel = true).entered();
        let candidates = Self::scan_parallel(grid, threshold);
        let mut features = Self::score_candidates_parallel(grid, &candidates);
        Self::rank(&mut features);
        limit.apply(&mut features);
        features
    }
}
