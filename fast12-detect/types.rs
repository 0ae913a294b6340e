use fast12_core::FeaturePoint;

/// Pixel that passed the segment test but has not been scored yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
}

impl Candidate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn with_score(self, score: u8) -> FeaturePoint {
        FeaturePoint::new(self.x, self.y, score)
    }
}

/// Which arc made the segment test pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerType {
    Bright,
    Dark,
    None,
}

impl CornerType {
    pub fn is_corner(self) -> bool {
        !matches!(self, CornerType::None)
    }
}
