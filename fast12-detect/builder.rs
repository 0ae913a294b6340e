use fast12_core::{FastConfig, Limit};
use crate::config::DetectorConfig;
use crate::detector::Fast12Detector;
use crate::error::FastResult;

/// Builder for creating a `Fast12Detector`
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    config: FastConfig,
    width: usize,
    height: usize,
}

impl DetectorBuilder {
    /// Create a new builder with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            config: FastConfig::default(),
            width,
            height,
        }
    }

    /// Set the segment test threshold
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set how many ranked corners to return
    pub fn limit(mut self, limit: Limit) -> Self {
        self.config.max_features = limit.into();
        self
    }

    /// Shorthand for `limit(Limit::AtMost(n))`
    pub fn max_features(self, n: usize) -> Self {
        self.limit(Limit::AtMost(n))
    }

    /// Enable or disable 3x3 non-maximum suppression
    pub fn nonmax_suppression(mut self, enable: bool) -> Self {
        self.config.nonmax_suppression = enable;
        self
    }

    /// Enable or disable row-parallel scanning and scoring
    pub fn parallel(mut self, enable: bool) -> Self {
        self.config.parallel = enable;
        self
    }

    /// Set the number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Apply the strict preset
    pub fn preset_strict(mut self) -> Self {
        self.config = DetectorConfig::strict_preset(self.width, self.height).core;
        self
    }

    /// Apply the dense preset
    pub fn preset_dense(mut self) -> Self {
        self.config = DetectorConfig::dense_preset(self.width, self.height).core;
        self
    }

    /// Build the detector
    pub fn build(self) -> FastResult<Fast12Detector> {
        Fast12Detector::new(self.config, self.width, self.height)
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `DetectorConfig`
    pub fn from_config(config: DetectorConfig) -> Self {
        Self {
            config: config.core,
            width: config.width,
            height: config.height,
        }
    }

    /// Convert the builder into a `DetectorConfig`
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig {
            width: self.width,
            height: self.height,
            name: None,
            description: None,
            core: self.config,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
