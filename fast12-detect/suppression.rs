use fast12_core::{FeaturePoint, IntensityGrid, Limit};

use crate::scanner::FeatureScanner;
use crate::trace::{trace_event, trace_span};

/// 3x3 non-maximum suppression over corner scores
pub struct NonMaxSuppressor;

impl NonMaxSuppressor {
    const NEIGHBOURS: [(isize, isize); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0), (1, 0),
        (-1, 1), (0, 1), (1, 1),
    ];

    /// Keep features whose score is `>=` every 8-neighbour's score.
    ///
    /// Cells without a feature count as 0, so a lone corner always survives
    /// and equal adjacent corners both survive. The input order is kept.
    pub fn suppress(width: usize, height: usize, features: &[FeaturePoint]) -> Vec<FeaturePoint> {
        let _span = trace_span!("fast12_suppress", count = features.len()).entered();

        let mut scores = vec![0u8; width * height];
        for fp in features {
            if fp.x < width && fp.y < height {
                scores[fp.y * width + fp.x] = fp.score;
            }
        }

        let score_at = |x: usize, dx: isize, y: usize, dy: isize| -> u8 {
            match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(nx), Some(ny)) if nx < width && ny < height => scores[ny * width + nx],
                _ => 0,
            }
        };

        let survivors: Vec<FeaturePoint> = features
            .iter()
            .filter(|fp| {
                Self::NEIGHBOURS
                    .iter()
                    .all(|&(dx, dy)| fp.score >= score_at(fp.x, dx, fp.y, dy))
            })
            .copied()
            .collect();

        trace_event!("fast12_survivors", count = survivors.len());
        survivors
    }

    /// Full detection, suppression, then truncation to `limit`
    pub fn detect_with_nonmax(grid: &IntensityGrid, threshold: i32, limit: Limit) -> Vec<FeaturePoint> {
        let features = FeatureScanner::detect(grid, threshold, Limit::Unbounded);
        let mut survivors = Self::suppress(grid.width(), grid.height(), &features);
        limit.apply(&mut survivors);
        survivors
    }
}
