/// Errors raised while building an [`Image`]
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    InvalidImageSize { width: usize, height: usize },
    InvalidImageData { expected_len: usize, actual_len: usize },
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            ImageError::InvalidImageData { expected_len, actual_len } => {
                write!(f, "Image data length mismatch: expected {}, got {}", expected_len, actual_len)
            }
        }
    }
}

impl std::error::Error for ImageError {}

pub type ImageResult<T> = Result<T, ImageError>;

/// Row-major single-channel image of `f32` intensities.
///
/// Both dimensions are at least one. Integer coordinates address pixel
/// centers, so the sampling domain for interpolated reads is
/// `[0, width - 1] x [0, height - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<f32>,
}

impl Image {
    /// Wrap a row-major buffer, checking it matches the dimensions
    pub fn from_vec(width: usize, height: usize, pixels: Vec<f32>) -> ImageResult<Self> {
        let expected_len = Self::checked_len(width, height)?;
        if pixels.len() != expected_len {
            return Err(ImageError::InvalidImageData {
                expected_len,
                actual_len: pixels.len(),
            });
        }

        Ok(Self { width, height, pixels })
    }

    /// Create an image where every pixel has the same value
    pub fn new_fill(width: usize, height: usize, value: f32) -> ImageResult<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; len],
        })
    }

    /// Convert an 8-bit grayscale buffer, keeping the 0-255 range
    pub fn from_u8(width: usize, height: usize, data: &[u8]) -> ImageResult<Self> {
        Self::from_vec(width, height, data.iter().map(|&v| v as f32).collect())
    }

    /// Convert an 8-bit grayscale buffer, scaling intensities to `[0, 1]`
    pub fn from_u8_normalized(width: usize, height: usize, data: &[u8]) -> ImageResult<Self> {
        Self::from_vec(width, height, data.iter().map(|&v| v as f32 / 255.0).collect())
    }

    fn checked_len(width: usize, height: usize) -> ImageResult<usize> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidImageSize { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(ImageError::InvalidImageSize { width, height })
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

    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [f32] {
        &mut self.pixels
    }

    pub fn row(&self, y: usize) -> &[f32] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Direct pixel read, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if !self.contains(x, y) {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.pixels[y * self.width + x] = value;
        true
    }

    /// Bilinear read at an absolute real-valued position.
    ///
    /// Positions outside the hull of pixel centers read as `0.0`; there is
    /// no clamping or reflection. NaN coordinates also read as `0.0`.
    pub fn sample_bilinear(&self, x: f64, y: f64) -> f32 {
        let max_x = (self.width - 1) as f64;
        let max_y = (self.height - 1) as f64;
        if !(x >= 0.0 && y >= 0.0 && x <= max_x && y <= max_y) {
            return 0.0;
        }

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let dx = (x - x0 as f64) as f32;
        let dy = (y - y0 as f64) as f32;

        let p00 = self.pixels[y0 * self.width + x0];
        let p10 = self.pixels[y0 * self.width + x1];
        let p01 = self.pixels[y1 * self.width + x0];
        let p11 = self.pixels[y1 * self.width + x1];

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;
        top * (1.0 - dy) + bottom * dy
    }

    /// Bilinear read at an offset from the integer pixel `(x, y)`
    pub fn sample_offset(&self, x: usize, y: usize, dx: f64, dy: f64) -> f32 {
        self.sample_bilinear(x as f64 + dx, y as f64 + dy)
    }
}
