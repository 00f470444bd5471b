mod image;
mod processor;

pub use image::{Image, ImageError, ImageResult};
pub use processor::{ImageProcessor, Pixel};

/// Largest sample count whose binary code fits a `u32` with the sign bit clear
pub const MAX_SAMPLES: usize = 31;

/// Sampling circle and decision threshold shared by every LTP entry point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LtpConfig {
    pub radius: f32,
    pub samples: usize,
    pub threshold: f32,
    pub n_threads: usize,
}

impl Default for LtpConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            samples: 8,
            threshold: 5.0,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
