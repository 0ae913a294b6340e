use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while building an [`IntensityGrid`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid grid dimensions: {width}x{height} (must be > 0)")]
    InvalidSize { width: usize, height: usize },
    #[error("Grid data length mismatch: expected {expected_len}, got {actual_len}")]
    LengthMismatch { expected_len: usize, actual_len: usize },
    #[error("Ragged grid: row {row} has {actual} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },
}

/// Row-major grid of integer pixel intensities.
///
/// Values are not range checked; detection only compares intensities and
/// offsets them by a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    data: Vec<i32>,
}

impl IntensityGrid {
    pub fn from_vec(width: usize, height: usize, data: Vec<i32>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let expected_len = width * height;
        if data.len() != expected_len {
            return Err(GridError::LengthMismatch {
                expected_len,
                actual_len: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Build a grid from nested rows, `rows[y][x]`
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }

        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { width, height, data })
    }

    /// Widen a row-major 8-bit grayscale buffer
    pub fn from_luma8(width: usize, height: usize, pixels: &[u8]) -> Result<Self, GridError> {
        Self::from_vec(width, height, pixels.iter().map(|&p| p as i32).collect())
    }

    pub fn filled(width: usize, height: usize, value: i32) -> Result<Self, GridError> {
        Self::from_vec(width, height, vec![value; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Intensity at `(x, y)`; panics when out of bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[i32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

/// Corner position with its strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeaturePoint {
    pub x: usize,
    pub y: usize,
    pub score: u8,
}

impl FeaturePoint {
    pub fn new(x: usize, y: usize, score: u8) -> Self {
        Self { x, y, score }
    }

    /// Ranking order: stronger corners first, equal scores compare equal
    pub fn by_strength(a: &Self, b: &Self) -> Ordering {
        b.score.cmp(&a.score)
    }
}

/// How many features a detection call may return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl Limit {
    /// Map the signed convention where any negative count means "all"
    pub fn from_signed(n: i64) -> Self {
        if n < 0 {
            Limit::Unbounded
        } else {
            Limit::AtMost(n as usize)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Limit::Unbounded)
    }

    /// Truncate `items` in place to at most the limit
    pub fn apply<T>(&self, items: &mut Vec<T>) {
        if let Limit::AtMost(n) = *self {
            items.truncate(n);
        }
    }
}

impl From<Option<usize>> for Limit {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Limit::Unbounded, Limit::AtMost)
    }
}

impl From<Limit> for Option<usize> {
    fn from(value: Limit) -> Self {
        match value {
            Limit::Unbounded => None,
            Limit::AtMost(n) => Some(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FastConfig {
    pub threshold: i32,
    /// `None` returns every detected corner
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_features: Option<usize>,
    pub nonmax_suppression: bool,
    pub parallel: bool,
    pub n_threads: usize,
}

impl FastConfig {
    pub fn limit(&self) -> Limit {
        self.max_features.into()
    }
}

impl Default for FastConfig {
    fn default() -> Self {
        Self {
            threshold: 20,
            max_features: None,
            nonmax_suppression: true,
            parallel: false,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_validates_length() {
        let err = IntensityGrid::from_vec(3, 3, vec![0; 8]).unwrap_err();
        assert_eq!(err, GridError::LengthMismatch { expected_len: 9, actual_len: 8 });

        let err = IntensityGrid::from_vec(0, 3, Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::InvalidSize { .. }));
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let grid = IntensityGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(2, 0), 3);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = IntensityGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, GridError::RaggedRow { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn test_from_luma8() {
        let grid = IntensityGrid::from_luma8(2, 1, &[0, 255]).unwrap();
        assert_eq!(grid.as_slice(), &[0, 255]);
    }

    #[test]
    fn test_limit_conventions() {
        assert_eq!(Limit::from_signed(-1), Limit::Unbounded);
        assert_eq!(Limit::from_signed(0), Limit::AtMost(0));
        assert_eq!(Limit::from(Some(5)), Limit::AtMost(5));
        assert_eq!(Limit::from(None), Limit::Unbounded);

        let mut items = vec![1, 2, 3];
        Limit::AtMost(5).apply(&mut items);
        assert_eq!(items.len(), 3);
        Limit::AtMost(2).apply(&mut items);
        assert_eq!(items, vec![1, 2]);
        Limit::Unbounded.apply(&mut items);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_by_strength_orders_descending() {
        let mut points = vec![
            FeaturePoint::new(0, 0, 10),
            FeaturePoint::new(1, 0, 30),
            FeaturePoint::new(2, 0, 10),
        ];
        points.sort_by(FeaturePoint::by_strength);
        assert_eq!(points[0].score, 30);
        // stable among equals
        assert_eq!((points[1].x, points[2].x), (0, 2));
    }

    #[test]
    fn test_default_config() {
        let cfg = FastConfig::default();
        assert_eq!(cfg.threshold, 20);
        assert_eq!(cfg.limit(), Limit::Unbounded);
        assert!(cfg.nonmax_suppression);
        assert!(cfg.n_threads >= 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_omits_unbounded_limit() {
        let cfg = FastConfig { n_threads: 2, ..FastConfig::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("max_features"));

        let parsed: FastConfig = serde_json::from_str(r#"{"threshold": 35, "max_features": 100}"#).unwrap();
        assert_eq!(parsed.threshold, 35);
        assert_eq!(parsed.limit(), Limit::AtMost(100));
        assert!(parsed.nonmax_suppression);
    }
}
