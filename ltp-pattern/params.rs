use ltp_core::{LtpConfig, MAX_SAMPLES};
use crate::error::{PatternError, PatternResult};
use crate::sampling::SamplingCircle;
use crate::types::ThresholdMode;

/// Validate the sampling circle parameters.
///
/// The threshold is not checked; any value is allowed.
pub fn check_params(radius: f32, samples: usize) -> PatternResult<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PatternError::InvalidRadius(radius));
    }
    if samples <= 1 || samples > MAX_SAMPLES {
        return Err(PatternError::InvalidSampleCount(samples));
    }
    Ok(())
}

/// Validated LTP parameters with the sampling circle precomputed
#[derive(Debug, Clone, PartialEq)]
pub struct PatternParams {
    samples: usize,
    threshold: f32,
    mode: ThresholdMode,
    circle: SamplingCircle,
}

impl PatternParams {
    pub fn new(radius: f32, samples: usize, threshold: f32) -> PatternResult<Self> {
        check_params(radius, samples)?;
        Ok(Self {
            samples,
            threshold,
            mode: ThresholdMode::default(),
            circle: SamplingCircle::new(radius, samples),
        })
    }

    pub fn from_config(cfg: &LtpConfig) -> PatternResult<Self> {
        Self::new(cfg.radius, cfg.samples, cfg.threshold)
    }

    pub fn with_mode(mut self, mode: ThresholdMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn radius(&self) -> f32 {
        self.circle.radius()
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    pub fn circle(&self) -> &SamplingCircle {
        &self.circle
    }

    /// Largest binary code, `2^samples - 1`
    pub fn max_binary_code(&self) -> u32 {
        ((1u64 << self.samples) - 1) as u32
    }

    /// Largest ternary code when no sample fires both branches, `3^samples - 1`
    pub fn max_ternary_code(&self) -> u64 {
        3u64.pow(self.samples as u32) - 1
    }
}
