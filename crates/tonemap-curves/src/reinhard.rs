//! Reinhard curve with contrast and peak normalization.
//!
//! ```text
//! offset = (1 - contrast) / contrast
//! out    = in / (in + offset) * (peak + offset) / peak
//! ```
//!
//! `contrast` in (0, 1] controls how early the curve rolls off; an input
//! equal to `peak` maps to 1.0. The expression is evaluated in double
//! precision and narrowed to `f32`.
//!
//! Exposure is carried along with the other parameters but is **not**
//! applied to the sample, unlike Hable and Mobius which pre-scale by it.
//! Existing presets depend on this, so it stays.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_curves::{Reinhard, ToneCurve};
//!
//! let curve = Reinhard::default();
//! assert_eq!(curve.offset(), 1.0);
//! assert_eq!(curve.eval(1.0), 1.0);
//! assert_eq!(curve.eval(0.0), 0.0);
//! ```

use crate::ToneCurve;

/// Default exposure (stored, not applied).
pub const DEFAULT_EXPOSURE: f32 = 2.0;
/// Default contrast.
pub const DEFAULT_CONTRAST: f32 = 0.5;
/// Default peak.
pub const DEFAULT_PEAK: f32 = 1.0;

/// `(1 - contrast) / contrast`.
#[inline]
pub fn offset(contrast: f32) -> f64 {
    let contrast = f64::from(contrast);
    (1.0 - contrast) / contrast
}

/// Reinhard curve with derived offset and peak scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reinhard {
    exposure: f32,
    contrast: f32,
    peak: f32,
    offset: f64,
    scale: f64,
}

impl Reinhard {
    /// Builds the curve.
    pub fn new(exposure: f32, contrast: f32, peak: f32) -> Self {
        let offset = offset(contrast);
        let peak_f64 = f64::from(peak);
        Self {
            exposure,
            contrast,
            peak,
            offset,
            scale: (peak_f64 + offset) / peak_f64,
        }
    }

    /// Exposure as configured. Not used by [`ToneCurve::eval`].
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Contrast.
    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    /// Peak.
    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// `(1 - contrast) / contrast`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `(peak + offset) / peak`.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for Reinhard {
    fn default() -> Self {
        Self::new(DEFAULT_EXPOSURE, DEFAULT_CONTRAST, DEFAULT_PEAK)
    }
}

impl ToneCurve for Reinhard {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        let x = f64::from(x);
        (x / (x + self.offset) * self.scale) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_defaults() {
        let curve = Reinhard::default();
        assert_eq!(curve.offset(), 1.0);
        assert_eq!(curve.scale(), 2.0);
        assert_eq!(curve.eval(1.0), 1.0);
        assert_eq!(curve.eval(0.0), 0.0);
    }

    #[test]
    fn test_exposure_not_applied() {
        let low = Reinhard::new(0.5, 0.5, 1.0);
        let high = Reinhard::new(8.0, 0.5, 1.0);
        for &x in &[0.0_f32, 0.1, 0.5, 1.0, 4.0] {
            assert_eq!(low.eval(x).to_bits(), high.eval(x).to_bits());
        }
    }

    #[test]
    fn test_monotonic() {
        for &(contrast, peak) in &[(0.5_f32, 1.0_f32), (0.2, 4.0), (0.9, 10.0), (1.0, 2.0)] {
            let curve = Reinhard::new(2.0, contrast, peak);
            let mut prev = curve.eval(0.001);
            for i in 1..=2000 {
                let y = curve.eval(0.001 + i as f32 * 0.01);
                assert!(y >= prev, "contrast={} peak={} i={}", contrast, peak, i);
                prev = y;
            }
        }
    }

    #[test]
    fn test_peak_maps_to_one() {
        for &(contrast, peak) in &[(0.5_f32, 1.0_f32), (0.3, 4.0), (0.8, 1000.0)] {
            let curve = Reinhard::new(2.0, contrast, peak);
            assert!((curve.eval(peak) - 1.0).abs() < EPSILON);
            assert!(curve.eval(peak) <= peak + EPSILON);
        }
    }

    #[test]
    fn test_full_contrast_is_flat() {
        // offset 0: every positive input maps to 1
        let curve = Reinhard::new(2.0, 1.0, 1.0);
        assert_eq!(curve.offset(), 0.0);
        assert_eq!(curve.eval(0.25), 1.0);
        assert!(curve.eval(0.0).is_nan());
    }
}
