use ltp_core::ImageError;

#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Sampling radius is not a finite value greater than zero
    InvalidRadius(f32),
    /// Sample count is outside `2..=31`
    InvalidSampleCount(usize),
    /// Center pixel of a single-pixel computation lies outside the image
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
    Image(ImageError),
}

impl PatternError {
    /// True for the errors raised while validating sampling parameters
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PatternError::InvalidRadius(_) | PatternError::InvalidSampleCount(_))
    }
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::InvalidRadius(r) => {
                write!(f, "Invalid radius: {} (must be greater than 0)", r)
            }
            PatternError::InvalidSampleCount(n) => {
                write!(f, "Invalid sample count: {} (must be 2-{})", n, ltp_core::MAX_SAMPLES)
            }
            PatternError::OutOfBounds { x, y, width, height } => {
                write!(f, "Pixel ({}, {}) outside {}x{} image", x, y, width, height)
            }
            PatternError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ImageError> for PatternError {
    fn from(err: ImageError) -> Self {
        PatternError::Image(err)
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
