use ltp_core::LtpConfig;
use crate::builder::ExtractorBuilder;
use crate::error::PatternResult;
use crate::extractor::LocalTernaryPattern;
use crate::params::{check_params, PatternParams};
use crate::types::ThresholdMode;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

#[cfg(feature = "serde")]
fn default_parallel() -> bool {
    true
}

/// Complete extractor configuration with all settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractorConfig {
    /// Metadata
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
    /// Comparison rule at the threshold
    #[cfg_attr(feature = "serde", serde(default))]
    pub threshold_mode: ThresholdMode,
    /// Compute rows on the rayon pool
    #[cfg_attr(feature = "serde", serde(default = "default_parallel"))]
    pub parallel: bool,
    /// Sampling circle, threshold and thread count
    pub core: LtpConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorConfig {
    /// Create new configuration with default settings
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            version: None,
            threshold_mode: ThresholdMode::Inclusive,
            parallel: true,
            core: LtpConfig::default(),
        }
    }

    fn preset(radius: f32, samples: usize, threshold: f32, name: &str, description: &str) -> Self {
        Self {
            core: LtpConfig {
                radius,
                samples,
                threshold,
                ..LtpConfig::default()
            },
            ..Self::new()
        }
        .with_metadata(name, description)
    }

    /// Eight neighbors at radius one, the classic LTP setting
    pub fn compact_preset() -> Self {
        Self::preset(1.0, 8, 5.0, "Compact", "Eight samples on a unit circle")
    }

    /// Sixteen samples at radius two
    pub fn extended_preset() -> Self {
        Self::preset(2.0, 16, 5.0, "Extended", "Sixteen samples on a radius-two circle")
    }

    /// Twenty-four samples at radius three with a looser threshold
    pub fn wide_preset() -> Self {
        Self::preset(3.0, 24, 8.0, "Wide", "Twenty-four samples on a radius-three circle")
    }

    /// Look up a preset by its lowercase name
    pub fn named_preset(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Self::compact_preset()),
            "extended" => Some(Self::extended_preset()),
            "wide" => Some(Self::wide_preset()),
            _ => None,
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to ExtractorBuilder for further customization
    pub fn to_builder(self) -> ExtractorBuilder {
        ExtractorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "ExtractorConfig: radius={}, samples={}, threshold={}, mode={:?}, parallel={}, threads={}",
            self.core.radius, self.core.samples, self.core.threshold,
            self.threshold_mode, self.parallel, self.core.n_threads
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> PatternResult<()> {
        check_params(self.core.radius, self.core.samples)
    }

    /// Validated pattern parameters for this configuration
    pub fn params(&self) -> PatternResult<PatternParams> {
        Ok(PatternParams::from_config(&self.core)?.with_mode(self.threshold_mode))
    }

    /// Build the extractor described by this configuration
    pub fn build(&self) -> PatternResult<LocalTernaryPattern> {
        Ok(LocalTernaryPattern::from_params(self.params()?).with_parallel(self.parallel))
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from a `.json` or `.toml` file, picked by extension
    #[cfg(feature = "serde")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            Some("toml") => Self::load_toml(path),
            _ => Err(format!("unsupported config format: {}", path.display()).into()),
        }
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
