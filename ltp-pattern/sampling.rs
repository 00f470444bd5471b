use std::f64::consts::PI;

/// Offsets of `samples` points evenly spaced on a circle of `radius`.
///
/// Sample 0 sits at `(0, +radius)` and the index advances towards negative
/// x: `dx = -r sin(2 pi i / n)`, `dy = r cos(2 pi i / n)`. Codes depend on
/// this handedness, so it must not change. Components within rounding
/// error of zero are stored as exactly `0.0` so axis-aligned samples of a
/// border pixel stay on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingCircle {
    radius: f32,
    offsets: Vec<(f64, f64)>,
}

impl SamplingCircle {
    pub fn new(radius: f32, samples: usize) -> Self {
        let offsets = (0..samples)
            .map(|i| Self::sample_offset(radius, i, samples))
            .collect();
        Self { radius, offsets }
    }

    #[inline]
    pub fn sample_offset(radius: f32, index: usize, samples: usize) -> (f64, f64) {
        let r = radius as f64;
        let angle = 2.0 * PI * index as f64 / samples as f64;
        (snap(-r * angle.sin(), r), snap(r * angle.cos(), r))
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[(f64, f64)] {
        &self.offsets
    }
}

#[inline]
fn snap(v: f64, r: f64) -> f64 {
    if v.abs() < 1e-9 * r {
        0.0
    } else {
        v
    }
}
