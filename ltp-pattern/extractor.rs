use ltp_core::{Image, ImageProcessor};
use crate::error::PatternResult;
use crate::params::PatternParams;
use crate::pattern::{compute_all_codes, compute_all_codes_sequential};
use crate::types::{CodeMap, PatternMaps, ThresholdMode};

/// Local Ternary Pattern extractor (Tan & Triggs, "Enhanced Local Texture
/// Feature Sets for Face Recognition Under Difficult Lighting Conditions").
///
/// As an [`ImageProcessor`] it keeps the maps of the last processed image;
/// [`LocalTernaryPattern::extract`] returns them without touching that state.
#[derive(Debug, Clone)]
pub struct LocalTernaryPattern {
    params: PatternParams,
    parallel: bool,
    patterns: Option<PatternMaps>,
}

impl LocalTernaryPattern {
    /// Creates an extractor, validating radius and sample count
    pub fn new(radius: f32, samples: usize, threshold: f32) -> PatternResult<Self> {
        Ok(Self::from_params(PatternParams::new(radius, samples, threshold)?))
    }

    pub fn from_params(params: PatternParams) -> Self {
        Self {
            params,
            parallel: true,
            patterns: None,
        }
    }

    pub fn with_mode(mut self, mode: ThresholdMode) -> Self {
        self.params = self.params.with_mode(mode);
        self
    }

    /// Run rows on the rayon pool (default) or on the calling thread
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// One-shot extraction without building an extractor
    pub fn calculate(image: &Image, radius: f32, samples: usize, threshold: f32) -> PatternResult<PatternMaps> {
        let params = PatternParams::new(radius, samples, threshold)?;
        Ok(compute_all_codes(image, &params))
    }

    pub fn extract(&self, image: &Image) -> PatternMaps {
        if self.parallel {
            compute_all_codes(image, &self.params)
        } else {
            compute_all_codes_sequential(image, &self.params)
        }
    }

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Positive pattern of the last processed image
    pub fn positive_pattern(&self) -> Option<&CodeMap<u32>> {
        self.patterns.as_ref().map(|p| &p.positive)
    }

    /// Negative pattern of the last processed image
    pub fn negative_pattern(&self) -> Option<&CodeMap<u32>> {
        self.patterns.as_ref().map(|p| &p.negative)
    }

    /// Ternary pattern of the last processed image
    pub fn ternary_pattern(&self) -> Option<&CodeMap<u64>> {
        self.patterns.as_ref().map(|p| &p.ternary)
    }

    pub fn patterns(&self) -> Option<&PatternMaps> {
        self.patterns.as_ref()
    }

    /// Move the last result out, leaving the extractor empty
    pub fn take_patterns(&mut self) -> Option<PatternMaps> {
        self.patterns.take()
    }
}

impl ImageProcessor for LocalTernaryPattern {
    fn process_image(&mut self, image: &Image, _other_images: &[&Image]) {
        self.patterns = Some(self.extract(image));
    }
}
