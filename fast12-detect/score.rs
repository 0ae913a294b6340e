use fast12_core::IntensityGrid;
use crate::segment_test::SegmentTest;

/// Corner strength by binary search over the threshold
pub struct CornerScorer;

impl CornerScorer {
    pub const MIN_THRESHOLD: i32 = 0;
    pub const MAX_THRESHOLD: i32 = 255;

    /// Largest threshold in `[0, 255)` at which `(x, y)` still passes the
    /// segment test.
    ///
    /// The pixel must already be a corner at some threshold. The search
    /// assumes that passing at `b` implies passing at every threshold below
    /// `b`; 255 itself is never probed, so a pixel that would pass at 255
    /// scores 254.
    pub fn score(grid: &IntensityGrid, x: usize, y: usize) -> u8 {
        let mut bmin = Self::MIN_THRESHOLD;
        let mut bmax = Self::MAX_THRESHOLD;

        while bmax - bmin > 1 {
            let b = (bmin + bmax) / 2;
            if SegmentTest::is_corner(grid, x, y, b) {
                bmin = b;
            } else {
                bmax = b;
            }
        }

        bmin as u8
    }
}
