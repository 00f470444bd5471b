use ltp_core::LtpConfig;
use crate::config::ExtractorConfig;
use crate::error::PatternResult;
use crate::extractor::LocalTernaryPattern;
use crate::types::ThresholdMode;

/// Builder for creating a `LocalTernaryPattern`
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    config: LtpConfig,
    threshold_mode: ThresholdMode,
    parallel: bool,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: LtpConfig::default(),
            threshold_mode: ThresholdMode::default(),
            parallel: true,
        }
    }

    /// Set the sampling circle radius
    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = radius;
        self
    }

    /// Set the number of samples on the circle (2-31)
    pub fn samples(mut self, samples: usize) -> Self {
        self.config.samples = samples;
        self
    }

    /// Set the decision threshold
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    pub fn threshold_mode(mut self, mode: ThresholdMode) -> Self {
        self.threshold_mode = mode;
        self
    }

    /// Shorthand for `threshold_mode(ThresholdMode::Exclusive)`
    pub fn exclusive(self) -> Self {
        self.threshold_mode(ThresholdMode::Exclusive)
    }

    /// Enable or disable row parallelism
    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Apply the compact preset
    pub fn preset_compact(self) -> Self {
        self.apply_preset(ExtractorConfig::compact_preset())
    }

    /// Apply the extended preset
    pub fn preset_extended(self) -> Self {
        self.apply_preset(ExtractorConfig::extended_preset())
    }

    /// Apply the wide preset
    pub fn preset_wide(self) -> Self {
        self.apply_preset(ExtractorConfig::wide_preset())
    }

    fn apply_preset(mut self, preset: ExtractorConfig) -> Self {
        let n_threads = self.config.n_threads;
        self.config = LtpConfig { n_threads, ..preset.core };
        self
    }

    /// Build the `LocalTernaryPattern`
    pub fn build(self) -> PatternResult<LocalTernaryPattern> {
        self.to_config().build()
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `ExtractorConfig`
    pub fn from_config(config: ExtractorConfig) -> Self {
        Self {
            config: config.core,
            threshold_mode: config.threshold_mode,
            parallel: config.parallel,
        }
    }

    /// Convert the builder into an `ExtractorConfig`
    pub fn to_config(self) -> ExtractorConfig {
        ExtractorConfig {
            name: None,
            description: None,
            version: None,
            threshold_mode: self.threshold_mode,
            parallel: self.parallel,
            core: self.config,
        }
    }

    pub fn n_threads(&self) -> usize {
        self.config.n_threads
    }
}
