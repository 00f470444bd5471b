//! Local Ternary Pattern extraction.
//!
//! Every pixel is compared with `samples` bilinearly interpolated points on a
//! circle around it. Each sample difference `d = sample - centre` is tested
//! against the threshold `t`:
//!
//! - `d >= t` sets bit `i` of the positive code and adds `3^i` to the ternary code
//! - `d <= t` sets bit `i` of the negative code and adds `2 * 3^i`
//!
//! Points outside the image read as zero. See [`ThresholdMode`] for how a
//! difference exactly equal to the threshold is handled.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod params;
pub mod pattern;
pub mod sampling;
pub mod types;

pub use builder::ExtractorBuilder;
pub use config::ExtractorConfig;
pub use error::{PatternError, PatternResult};
pub use extractor::LocalTernaryPattern;
pub use params::{check_params, PatternParams};
pub use pattern::{compute_all_codes, compute_all_codes_sequential, compute_codes, compute_codes_at};
pub use sampling::SamplingCircle;
pub use types::{CodeMap, LtpCode, PatternMaps, SampleClass, ThresholdMode};

pub use ltp_core::{Image, ImageProcessor, LtpConfig, Pixel};
