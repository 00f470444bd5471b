use crate::image::Image;

/// An operation applied to an image in place of a direct function call.
///
/// Processors may keep whatever they compute as internal state; a later call
/// replaces it. Extra images are available to operations that need them and
/// may be ignored.
pub trait ImageProcessor {
    fn process_image(&mut self, image: &Image, other_images: &[&Image]);
}

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
}

impl Pixel {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Pixel {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
