use fast12_core::FastConfig;
use crate::builder::DetectorBuilder;
use crate::error::{FastError, FastResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete detector configuration: pipeline settings plus image size
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Image dimensions
    pub width: usize,
    pub height: usize,
    /// Metadata
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Pipeline settings, written as the trailing `[core]` table in TOML
    #[cfg_attr(feature = "serde", serde(default))]
    pub core: FastConfig,
}

impl DetectorConfig {
    /// Create new configuration with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            core: FastConfig {
                n_threads: 1,
                ..FastConfig::default()
            },
            width,
            height,
            name: None,
            description: None,
        }
    }

    /// Few, strong, well separated corners
    pub fn strict_preset(width: usize, height: usize) -> Self {
        Self {
            core: FastConfig {
                threshold: 40,
                max_features: Some(500),
                nonmax_suppression: true,
                parallel: false,
                n_threads: 1,
            },
            width,
            height,
            name: Some("Strict".to_string()),
            description: Some("High threshold, suppressed and capped at 500 corners".to_string()),
        }
    }

    /// Every corner at a low threshold, scanned in parallel
    pub fn dense_preset(width: usize, height: usize) -> Self {
        Self {
            core: FastConfig {
                threshold: 10,
                max_features: None,
                nonmax_suppression: false,
                parallel: true,
                n_threads: num_threads(),
            },
            width,
            height,
            name: Some("Dense".to_string()),
            description: Some("Low threshold without suppression or cap".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> DetectorBuilder {
        DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        let limit = match self.core.max_features {
            Some(n) => n.to_string(),
            None => "all".to_string(),
        };
        format!(
            "DetectorConfig: {}x{}, threshold={}, limit={}, features=[NonMax:{}, Parallel:{}], threads={}",
            self.width, self.height, self.core.threshold, limit,
            self.core.nonmax_suppression, self.core.parallel, self.core.n_threads
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> FastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FastError::InvalidImageSize { width: self.width, height: self.height });
        }
        if self.core.threshold < 0 {
            return Err(FastError::InvalidThreshold(self.core.threshold));
        }
        Ok(())
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> FastResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> FastResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> FastResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> FastResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from a `.toml` file, anything else is read as JSON
    #[cfg(feature = "serde")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> FastResult<Self> {
        let is_toml = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::load_toml(path)
        } else {
            Self::load_json(path)
        }
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> FastResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> FastResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> FastResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> FastResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

fn num_threads() -> usize {
    FastConfig::default().n_threads
}
