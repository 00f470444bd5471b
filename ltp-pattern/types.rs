#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LTP code of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LtpCode {
    /// Bit `i` set when sample `i` passed the upper comparison
    pub positive: u32,
    /// Bit `i` set when sample `i` passed the lower comparison
    pub negative: u32,
    /// Base-3 digits per sample: 0 neither, 1 brighter, 2 darker
    pub ternary: u64,
}

/// How a sample difference is compared against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThresholdMode {
    /// `d >= t` and `d <= t` are tested independently, so a difference equal
    /// to the threshold sets both bits and contributes `3 * 3^i` to the
    /// ternary code. Reproduces the legacy LTP output.
    #[default]
    Inclusive,
    /// One classification per sample; equality counts as brighter.
    Exclusive,
}

impl ThresholdMode {
    #[inline]
    pub fn classify(self, difference: f32, threshold: f32) -> SampleClass {
        match self {
            ThresholdMode::Inclusive => {
                match (difference >= threshold, difference <= threshold) {
                    (true, true) => SampleClass::Both,
                    (true, false) => SampleClass::Brighter,
                    (false, true) => SampleClass::Darker,
                    (false, false) => SampleClass::Similar,
                }
            }
            ThresholdMode::Exclusive => {
                if difference >= threshold {
                    SampleClass::Brighter
                } else if difference <= threshold {
                    SampleClass::Darker
                } else {
                    SampleClass::Similar
                }
            }
        }
    }
}

/// Outcome of comparing one neighbor sample with the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleClass {
    Brighter,
    Darker,
    /// Neither comparison held (NaN differences)
    Similar,
    /// Both comparisons held, only produced by [`ThresholdMode::Inclusive`]
    Both,
}

impl SampleClass {
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, SampleClass::Brighter | SampleClass::Both)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(self, SampleClass::Darker | SampleClass::Both)
    }

    /// Multiplier of `3^i` added to the ternary code
    #[inline]
    pub fn ternary_digit(self) -> u64 {
        match self {
            SampleClass::Similar => 0,
            SampleClass::Brighter => 1,
            SampleClass::Darker => 2,
            SampleClass::Both => 3,
        }
    }
}

/// Row-major grid of per-pixel codes, same layout as the source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMap<T> {
    width: usize,
    height: usize,
    codes: Vec<T>,
}

impl<T: Copy> CodeMap<T> {
    pub(crate) fn from_vec(width: usize, height: usize, codes: Vec<T>) -> Self {
        debug_assert_eq!(codes.len(), width * height);
        Self { width, height, codes }
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

    pub fn codes(&self) -> &[T] {
        &self.codes
    }

    pub fn into_vec(self) -> Vec<T> {
        self.codes
    }

    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.codes.get(y * self.width + x).copied()
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.codes[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.codes.chunks(self.width)
    }
}

impl<T: Copy + Ord> CodeMap<T> {
    /// Number of different codes present in the map
    pub fn distinct_count(&self) -> usize {
        let mut sorted = self.codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    }
}

/// The three code maps produced for one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMaps {
    pub positive: CodeMap<u32>,
    pub negative: CodeMap<u32>,
    pub ternary: CodeMap<u64>,
}

impl PatternMaps {
    pub(crate) fn from_codes(width: usize, height: usize, codes: &[LtpCode]) -> Self {
        Self {
            positive: CodeMap::from_vec(width, height, codes.iter().map(|c| c.positive).collect()),
            negative: CodeMap::from_vec(width, height, codes.iter().map(|c| c.negative).collect()),
            ternary: CodeMap::from_vec(width, height, codes.iter().map(|c| c.ternary).collect()),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.positive.dimensions()
    }

    /// Code triple at `(x, y)`
    pub fn code(&self, x: usize, y: usize) -> Option<LtpCode> {
        Some(LtpCode {
            positive: self.positive.get(x, y)?,
            negative: self.negative.get(x, y)?,
            ternary: self.ternary.get(x, y)?,
        })
    }
}
