use image::GrayImage;
use ltp_core::{Image, ImageError, ImageProcessor};
use ltp_pattern::{ExtractorConfig, LocalTernaryPattern, PatternError, PatternMaps};
use std::path::Path;

pub mod dataset;

pub use dataset::{ImageListDataset, ListDataset};
pub use ltp_pattern::{ExtractorConfig as Config, ThresholdMode};

#[derive(Debug)]
pub enum LtpError {
    Pattern(PatternError),
    Image(ImageError),
    Decode(image::ImageError),
    Io(std::io::Error),
    ThreadPool(rayon::ThreadPoolBuildError),
    InvalidBlur(f32),
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for LtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LtpError::Pattern(e) => write!(f, "Pattern error: {}", e),
            LtpError::Image(e) => write!(f, "Image error: {}", e),
            LtpError::Decode(e) => write!(f, "Decode error: {}", e),
            LtpError::Io(e) => write!(f, "I/O error: {}", e),
            LtpError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
            LtpError::InvalidBlur(s) => write!(f, "Invalid blur sigma: {} (must be greater than 0)", s),
            LtpError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for dataset of {} instances", index, len)
            }
        }
    }
}

impl std::error::Error for LtpError {}

impl From<PatternError> for LtpError {
    fn from(err: PatternError) -> Self {
        LtpError::Pattern(err)
    }
}

impl From<ImageError> for LtpError {
    fn from(err: ImageError) -> Self {
        LtpError::Image(err)
    }
}

impl From<image::ImageError> for LtpError {
    fn from(err: image::ImageError) -> Self {
        LtpError::Decode(err)
    }
}

impl From<std::io::Error> for LtpError {
    fn from(err: std::io::Error) -> Self {
        LtpError::Io(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for LtpError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        LtpError::ThreadPool(err)
    }
}

pub type LtpResult<T> = Result<T, LtpError>;

/// Load an image file as 8-bit grayscale
pub fn load_luma<P: AsRef<Path>>(path: P) -> LtpResult<GrayImage> {
    Ok(image::ImageReader::open(path)?.decode()?.to_luma8())
}

/// High-level LTP extractor working on `image` crate buffers
pub struct LtpExtractor {
    ltp: LocalTernaryPattern,
    normalize: bool,
    blur_sigma: Option<f32>,
}

impl LtpExtractor {
    /// Create an extractor from a validated configuration
    pub fn new(config: &ExtractorConfig) -> LtpResult<Self> {
        Ok(Self {
            ltp: config.build()?,
            normalize: false,
            blur_sigma: None,
        })
    }

    /// Scale 8-bit intensities to `[0, 1]` before extraction
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Gaussian pre-blur applied to luma images, `None` to disable
    pub fn with_blur(mut self, sigma: Option<f32>) -> LtpResult<Self> {
        if let Some(s) = sigma {
            if !(s.is_finite() && s > 0.0) {
                return Err(LtpError::InvalidBlur(s));
            }
        }
        self.blur_sigma = sigma;
        Ok(self)
    }

    /// Convert a luma buffer into the extractor's input image
    pub fn prepare_luma(&self, img: &GrayImage) -> LtpResult<Image> {
        let blurred;
        let src = match self.blur_sigma {
            Some(sigma) => {
                blurred = imageproc::filter::gaussian_blur_f32(img, sigma);
                &blurred
            }
            None => img,
        };

        let (w, h) = src.dimensions();
        let image = if self.normalize {
            Image::from_u8_normalized(w as usize, h as usize, src.as_raw())?
        } else {
            Image::from_u8(w as usize, h as usize, src.as_raw())?
        };
        Ok(image)
    }

    /// Compute the three code maps for an image
    pub fn extract(&self, image: &Image) -> PatternMaps {
        self.ltp.extract(image)
    }

    /// Prepare and extract a luma buffer in one step
    pub fn extract_luma(&self, img: &GrayImage) -> LtpResult<PatternMaps> {
        let image = self.prepare_luma(img)?;
        Ok(self.extract(&image))
    }

    /// Run the underlying processor, keeping its result for later access
    pub fn process(&mut self, image: &Image) -> &LocalTernaryPattern {
        self.ltp.process_image(image, &[]);
        &self.ltp
    }

    /// Get the wrapped processor
    pub fn processor(&self) -> &LocalTernaryPattern {
        &self.ltp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn ring_luma() -> GrayImage {
        let mut img = GrayImage::from_pixel(3, 3, Luma([150]));
        img.put_pixel(1, 1, Luma([100]));
        img
    }

    #[test]
    fn test_extract_luma_scenario() {
        let mut cfg = ExtractorConfig::compact_preset();
        cfg.core.threshold = 10.0;
        let extractor = LtpExtractor::new(&cfg).unwrap();

        let maps = extractor.extract_luma(&ring_luma()).unwrap();
        let code = maps.code(1, 1).unwrap();
        assert_eq!(code.positive, 255);
        assert_eq!(code.negative, 0);
        assert_eq!(code.ternary, 3280);
    }

    #[test]
    fn test_normalization_scales_input() {
        let extractor = LtpExtractor::new(&ExtractorConfig::new())
            .unwrap()
            .with_normalization(true);
        let image = extractor.prepare_luma(&ring_luma()).unwrap();
        assert_eq!(image.get(1, 1), Some(100.0 / 255.0));
        assert_eq!(image.get(0, 0), Some(150.0 / 255.0));
    }

    #[test]
    fn test_blur_keeps_dimensions() {
        let extractor = LtpExtractor::new(&ExtractorConfig::new())
            .unwrap()
            .with_blur(Some(1.0))
            .unwrap();
        let luma = GrayImage::from_fn(8, 5, |x, y| Luma([((x * 30 + y * 7) % 256) as u8]));
        let maps = extractor.extract_luma(&luma).unwrap();
        assert_eq!(maps.dimensions(), (8, 5));
    }

    #[test]
    fn test_invalid_blur_rejected() {
        let result = LtpExtractor::new(&ExtractorConfig::new()).unwrap().with_blur(Some(0.0));
        assert!(matches!(result, Err(LtpError::InvalidBlur(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut cfg = ExtractorConfig::new();
        cfg.core.samples = 0;
        assert!(matches!(LtpExtractor::new(&cfg), Err(LtpError::Pattern(_))));
    }

    #[test]
    fn test_process_retains_result() {
        let mut extractor = LtpExtractor::new(&ExtractorConfig::new()).unwrap();
        let image = Image::new_fill(4, 4, 1.0).unwrap();
        let ltp = extractor.process(&image);
        assert_eq!(ltp.positive_pattern().unwrap().dimensions(), (4, 4));
        assert!(extractor.processor().patterns().is_some());
    }
}
