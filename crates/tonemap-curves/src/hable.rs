//! Hable (Uncharted 2) filmic curve.
//!
//! ```text
//! raw(x)     = (x*(x*a + b*c) + d*e) / (x*(x*a + b) + d*f) - e/f
//! whitescale = 1 / raw(w)
//! out        = raw(exposure * in) * whitescale
//! ```
//!
//! `a`..`f` shape the toe and shoulder; `w` is the linear value that lands
//! on 1.0 after normalization. With the default exposure of 2.0 that is an
//! input of `w / 2`.
//!
//! # Reference
//!
//! John Hable, "Uncharted 2: HDR Lighting", GDC 2010.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_curves::{Hable, ToneCurve};
//!
//! let curve = Hable::default();
//! assert!((curve.raw(curve.w()) * curve.whitescale() - 1.0).abs() < 1e-6);
//! assert!((curve.eval(5.6) - 1.0).abs() < 1e-5);
//! ```

use crate::ToneCurve;

/// Default exposure multiplier.
pub const DEFAULT_EXPOSURE: f32 = 2.0;
/// Shoulder strength.
pub const DEFAULT_A: f32 = 0.15;
/// Linear strength.
pub const DEFAULT_B: f32 = 0.50;
/// Linear angle.
pub const DEFAULT_C: f32 = 0.10;
/// Toe strength.
pub const DEFAULT_D: f32 = 0.20;
/// Toe numerator.
pub const DEFAULT_E: f32 = 0.02;
/// Toe denominator.
pub const DEFAULT_F: f32 = 0.30;
/// Linear white point.
pub const DEFAULT_W: f32 = 11.2;

/// Unnormalized Hable curve.
///
/// Zero at the origin up to rounding. Divides by `f`; a zero `f` yields
/// non-finite output.
#[inline]
pub fn raw(x: f32, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> f32 {
    (x * (x * a + b * c) + d * e) / (x * (x * a + b) + d * f) - e / f
}

/// Hable curve with its white scale resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hable {
    exposure: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    w: f32,
    whitescale: f32,
}

impl Hable {
    /// Builds the curve and derives `whitescale = 1 / raw(w)`.
    ///
    /// No validation happens here; see `tonemap_ops::HableParams` for the
    /// checked constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(exposure: f32, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, w: f32) -> Self {
        let whitescale = (1.0 / f64::from(raw(w, a, b, c, d, e, f))) as f32;
        Self {
            exposure,
            a,
            b,
            c,
            d,
            e,
            f,
            w,
            whitescale,
        }
    }

    /// Unnormalized curve with this instance's coefficients.
    #[inline]
    pub fn raw(&self, x: f32) -> f32 {
        raw(x, self.a, self.b, self.c, self.d, self.e, self.f)
    }

    /// Exposure multiplier applied before the curve.
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// White point.
    pub fn w(&self) -> f32 {
        self.w
    }

    /// `1 / raw(w)`.
    pub fn whitescale(&self) -> f32 {
        self.whitescale
    }

    /// Shape coefficients `[a, b, c, d, e, f]`.
    pub fn coefficients(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl Default for Hable {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXPOSURE,
            DEFAULT_A,
            DEFAULT_B,
            DEFAULT_C,
            DEFAULT_D,
            DEFAULT_E,
            DEFAULT_F,
            DEFAULT_W,
        )
    }
}

impl ToneCurve for Hable {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        self.raw(self.exposure * x) * self.whitescale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_black_stays_black() {
        let curve = Hable::default();
        assert!(curve.eval(0.0).abs() < EPSILON);
    }

    #[test]
    fn test_white_normalization() {
        let curve = Hable::default();
        assert!((curve.raw(DEFAULT_W) * curve.whitescale() - 1.0).abs() < EPSILON);

        let custom = Hable::new(1.0, 0.22, 0.30, 0.10, 0.20, 0.01, 0.30, 4.0);
        assert!((custom.eval(4.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic_over_typical_range() {
        let curve = Hable::default();
        let mut prev = curve.eval(0.0);
        for i in 1..=1000 {
            let y = curve.eval(i as f32 * 0.02);
            assert!(y >= prev, "decreasing at {}", i);
            prev = y;
        }
    }

    #[test]
    fn test_zero_f_is_not_finite() {
        let curve = Hable::new(2.0, 0.15, 0.5, 0.1, 0.2, 0.02, 0.0, 11.2);
        assert!(!curve.eval(0.5).is_finite());
    }

    #[test]
    fn test_pure() {
        let curve = Hable::default();
        let x = 0.734_f32;
        assert_eq!(curve.eval(x).to_bits(), curve.eval(x).to_bits());
    }
}
