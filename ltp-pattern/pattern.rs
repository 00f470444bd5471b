use ltp_core::{Image, Pixel};
use crate::error::{PatternError, PatternResult};
use crate::params::PatternParams;
use crate::types::{LtpCode, PatternMaps};
use rayon::prelude::*;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// LTP code of the pixel at `(x, y)`.
///
/// Samples falling outside the image read as zero, so border pixels are
/// handled like any other. Fails with [`PatternError::OutOfBounds`] when the
/// center itself is not in the image.
pub fn compute_codes(image: &Image, params: &PatternParams, x: usize, y: usize) -> PatternResult<LtpCode> {
    if !image.contains(x, y) {
        return Err(PatternError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(codes_at(image, params, x, y))
}

/// Same as [`compute_codes`] for a [`Pixel`]
pub fn compute_codes_at(image: &Image, params: &PatternParams, point: Pixel) -> PatternResult<LtpCode> {
    compute_codes(image, params, point.x, point.y)
}

/// LTP codes for every pixel, rows computed in parallel
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(image, params),
        fields(width = image.width(), height = image.height(), samples = params.samples())
    )
)]
pub fn compute_all_codes(image: &Image, params: &PatternParams) -> PatternMaps {
    #[cfg(feature = "tracing")]
    let start = std::time::Instant::now();

    let (w, h) = image.dimensions();
    let mut codes = vec![LtpCode::default(); w * h];
    codes
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| fill_row(image, params, y, row));

    #[cfg(feature = "tracing")]
    tracing::debug!(elapsed_us = start.elapsed().as_micros() as u64, "computed LTP codes");

    PatternMaps::from_codes(w, h, &codes)
}

/// Single-threaded equivalent of [`compute_all_codes`]
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(image, params),
        fields(width = image.width(), height = image.height(), samples = params.samples())
    )
)]
pub fn compute_all_codes_sequential(image: &Image, params: &PatternParams) -> PatternMaps {
    #[cfg(feature = "tracing")]
    let start = std::time::Instant::now();

    let (w, h) = image.dimensions();
    let mut codes = vec![LtpCode::default(); w * h];
    for (y, row) in codes.chunks_mut(w).enumerate() {
        fill_row(image, params, y, row);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(elapsed_us = start.elapsed().as_micros() as u64, "computed LTP codes");

    PatternMaps::from_codes(w, h, &codes)
}

fn fill_row(image: &Image, params: &PatternParams, y: usize, row: &mut [LtpCode]) {
    for (x, code) in row.iter_mut().enumerate() {
        *code = codes_at(image, params, x, y);
    }
}

/// Caller guarantees `(x, y)` is inside the image
#[inline]
fn codes_at(image: &Image, params: &PatternParams, x: usize, y: usize) -> LtpCode {
    let centre = image.pixels()[y * image.width() + x];
    let mode = params.mode();
    let threshold = params.threshold();

    let mut code = LtpCode::default();
    let mut pow3 = 1u64;
    for (i, &(dx, dy)) in params.circle().offsets().iter().enumerate() {
        let d = image.sample_offset(x, y, dx, dy) - centre;
        let class = mode.classify(d, threshold);

        if class.is_positive() {
            code.positive |= 1 << i;
        }
        if class.is_negative() {
            code.negative |= 1 << i;
        }
        code.ternary += class.ternary_digit() * pow3;
        pow3 *= 3;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThresholdMode;

    /// 3x3 image with a dark center surrounded by a brighter ring
    fn ring_image(centre: f32, ring: f32) -> Image {
        let mut img = Image::new_fill(3, 3, ring).unwrap();
        img.set(1, 1, centre);
        img
    }

    fn textured_image(width: usize, height: usize) -> Image {
        let pixels = (0..width * height)
            .map(|i| ((i * 37 + (i / width) * 11) % 256) as f32)
            .collect();
        Image::from_vec(width, height, pixels).unwrap()
    }

    #[test]
    fn test_brighter_ring_scenario() {
        let img = ring_image(100.0, 150.0);
        let params = PatternParams::new(1.0, 8, 10.0).unwrap();

        let code = compute_codes(&img, &params, 1, 1).unwrap();
        assert_eq!(code.positive, 255);
        assert_eq!(code.negative, 0);
        assert_eq!(code.ternary, 3280);
    }

    #[test]
    fn test_darker_ring_sets_negative_code() {
        let img = ring_image(150.0, 100.0);
        let params = PatternParams::new(1.0, 8, 10.0).unwrap();

        let code = compute_codes(&img, &params, 1, 1).unwrap();
        assert_eq!(code.positive, 0);
        assert_eq!(code.negative, 255);
        assert_eq!(code.ternary, 2 * 3280);
    }

    #[test]
    fn test_zero_threshold_brighter_neighborhood() {
        let img = ring_image(10.0, 20.0);
        let params = PatternParams::new(1.0, 8, 0.0).unwrap();

        let code = compute_codes(&img, &params, 1, 1).unwrap();
        assert_eq!(code.positive, 255);
        assert_eq!(code.negative, 0);
    }

    #[test]
    fn test_zero_difference_fires_both_branches() {
        // Radius 2 around the center of a flat 5x5 image keeps every sample
        // inside the grid, so every difference is exactly zero.
        let img = Image::new_fill(5, 5, 50.0).unwrap();
        let params = PatternParams::new(2.0, 4, 0.0).unwrap();

        let code = compute_codes(&img, &params, 2, 2).unwrap();
        assert_eq!(code.positive, 0b1111);
        assert_eq!(code.negative, 0b1111);
        assert_eq!(code.ternary, 3 * (1 + 3 + 9 + 27));

        let exclusive = params.with_mode(ThresholdMode::Exclusive);
        let code = compute_codes(&img, &exclusive, 2, 2).unwrap();
        assert_eq!(code.positive, 0b1111);
        assert_eq!(code.negative, 0);
        assert_eq!(code.ternary, 1 + 3 + 9 + 27);
    }

    #[test]
    fn test_single_pixel_image_samples_read_zero() {
        let img = Image::new_fill(1, 1, 80.0).unwrap();
        for radius in [0.25, 1.0, 3.7] {
            // Every difference is -80: below 0, above -100
            let params = PatternParams::new(radius, 12, 0.0).unwrap();
            let code = compute_codes(&img, &params, 0, 0).unwrap();
            assert_eq!(code.positive, 0);
            assert_eq!(code.negative, params.max_binary_code());

            let params = PatternParams::new(radius, 12, -100.0).unwrap();
            let code = compute_codes(&img, &params, 0, 0).unwrap();
            assert_eq!(code.positive, params.max_binary_code());
            assert_eq!(code.negative, 0);

            // Exactly -80 fires both branches
            let params = PatternParams::new(radius, 12, -80.0).unwrap();
            let code = compute_codes(&img, &params, 0, 0).unwrap();
            assert_eq!(code.positive, params.max_binary_code());
            assert_eq!(code.negative, params.max_binary_code());
        }
    }

    #[test]
    fn test_border_samples_on_grid_are_read() {
        // Flat image, so on-grid samples differ by 0 and off-grid ones by -50
        let img = Image::new_fill(3, 3, 50.0).unwrap();
        let params = PatternParams::new(1.0, 4, 0.0).unwrap();

        // Left column: only sample 1 (towards -x) leaves the grid
        let code = compute_codes(&img, &params, 0, 1).unwrap();
        assert_eq!(code.positive, 0b1101);
        assert_eq!(code.negative, 0b1111);
        assert_eq!(code.ternary, 3 + 2 * 3 + 3 * 9 + 3 * 27);

        // Top row: only sample 2 (towards -y) leaves the grid
        let code = compute_codes(&img, &params, 1, 0).unwrap();
        assert_eq!(code.positive, 0b1011);
        assert_eq!(code.negative, 0b1111);
        assert_eq!(code.ternary, 3 + 3 * 3 + 2 * 9 + 3 * 27);

        // Right column and bottom row mirror them
        assert_eq!(compute_codes(&img, &params, 2, 1).unwrap().positive, 0b0111);
        assert_eq!(compute_codes(&img, &params, 1, 2).unwrap().positive, 0b1110);

        // Top-left corner loses both samples 1 and 2
        assert_eq!(compute_codes(&img, &params, 0, 0).unwrap().positive, 0b1001);
    }

    #[test]
    fn test_sample_order_follows_circle() {
        // Only the pixel below the center (positive y) is bright, so only
        // sample 0 of a 4-point circle fires the positive branch.
        let mut img = Image::new_fill(3, 3, 0.0).unwrap();
        img.set(1, 2, 100.0);
        let params = PatternParams::new(1.0, 4, 50.0).unwrap();

        let code = compute_codes(&img, &params, 1, 1).unwrap();
        assert_eq!(code.positive, 0b0001);
        assert_eq!(code.negative, 0b1110);
        assert_eq!(code.ternary, 1 + 2 * (3 + 9 + 27));

        // Pixel to the left is sample 1
        let mut img = Image::new_fill(3, 3, 0.0).unwrap();
        img.set(0, 1, 100.0);
        let code = compute_codes(&img, &params, 1, 1).unwrap();
        assert_eq!(code.positive, 0b0010);
    }

    #[test]
    fn test_out_of_bounds_center() {
        let img = Image::new_fill(4, 3, 1.0).unwrap();
        let params = PatternParams::new(1.0, 8, 0.0).unwrap();

        assert!(matches!(
            compute_codes(&img, &params, 4, 0),
            Err(PatternError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        ));
        assert!(compute_codes_at(&img, &params, Pixel::new(0, 3)).is_err());
        assert!(compute_codes_at(&img, &params, Pixel::new(3, 2)).is_ok());
    }

    #[test]
    fn test_all_codes_match_single_pixel() {
        let img = textured_image(9, 7);
        let params = PatternParams::new(1.5, 10, 4.0).unwrap();
        let maps = compute_all_codes(&img, &params);

        assert_eq!(maps.dimensions(), (9, 7));
        for y in 0..7 {
            for x in 0..9 {
                let single = compute_codes(&img, &params, x, y).unwrap();
                assert_eq!(maps.code(x, y), Some(single), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let img = textured_image(33, 21);
        for mode in [ThresholdMode::Inclusive, ThresholdMode::Exclusive] {
            let params = PatternParams::new(2.0, 16, 0.0).unwrap().with_mode(mode);
            assert_eq!(compute_all_codes(&img, &params), compute_all_codes_sequential(&img, &params));
        }
    }

    #[test]
    fn test_determinism() {
        let img = textured_image(16, 16);
        let params = PatternParams::new(1.0, 8, 3.0).unwrap();
        let first = compute_all_codes(&img, &params);
        for _ in 0..5 {
            assert_eq!(compute_all_codes(&img, &params), first);
        }
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let params = PatternParams::new(1.0, 8, 0.0).unwrap();
        for &(w, h) in &[(1, 1), (1, 5), (7, 1), (4, 9)] {
            let img = textured_image(w, h);
            let maps = compute_all_codes(&img, &params);
            assert_eq!(maps.positive.dimensions(), (w, h));
            assert_eq!(maps.negative.dimensions(), (w, h));
            assert_eq!(maps.ternary.dimensions(), (w, h));
        }
    }
}
