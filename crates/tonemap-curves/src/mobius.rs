//! Mobius curve.
//!
//! Identity up to the transition point `j`, then a Mobius transform that
//! bends the remaining range towards `peak`:
//!
//! ```text
//! in <= j:  out = in
//! in >  j:  a   = -j^2 * (peak - 1) / (j^2 - 2j + peak)
//!           b   = (j^2 - 2j*peak + peak) / max(peak - 1, 1e-6)
//!           out = (b^2 + 2bj + j^2) / (b - a) * (in + a) / (in + b)
//! ```
//!
//! Both branches meet at `in == j`, so the curve is continuous, and an
//! input equal to `peak` lands on 1.0. The
//! `max(peak - 1, 1e-6)` floor keeps `b` finite as `peak` approaches 1; in
//! that limit the shoulder degenerates to (almost) the identity.
//!
//! `a` and `b` are computed in double precision and stored as `f32`, the
//! shoulder itself is evaluated in single precision.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_curves::mobius::{mobius, Mobius};
//! use tonemap_curves::ToneCurve;
//!
//! assert_eq!(mobius(0.25, 0.3, 2.0), 0.25);
//! assert!(mobius(4.0, 0.3, 2.0) < 2.0);
//!
//! let curve = Mobius::new(1.0, 0.3, 2.0);
//! assert_eq!(curve.eval(4.0), mobius(4.0, 0.3, 2.0));
//! ```

use crate::ToneCurve;

/// Default exposure multiplier.
pub const DEFAULT_EXPOSURE: f32 = 2.0;
/// Default transition point `j`.
pub const DEFAULT_TRANSITION: f32 = 0.3;
/// Default peak.
pub const DEFAULT_PEAK: f64 = 1.0;
/// Floor for `peak - 1` in the `b` denominator.
pub const PEAK_EPSILON: f64 = 1e-6;

/// Shoulder coefficients `(a, b)` for transition `j` and `peak`.
pub fn coefficients(j: f32, peak: f64) -> (f32, f32) {
    let jj = j * j;
    let a = -f64::from(jj) * (peak - 1.0) / (f64::from(jj - 2.0 * j) + peak);
    let b = (f64::from(jj) - f64::from(2.0 * j) * peak + peak) / (peak - 1.0).max(PEAK_EPSILON);
    (a as f32, b as f32)
}

#[inline]
fn shoulder(x: f32, j: f32, a: f32, b: f32) -> f32 {
    (b * b + 2.0 * b * j + j * j) / (b - a) * (x + a) / (x + b)
}

/// Mobius curve on an already exposed sample.
///
/// Derives the shoulder coefficients on every call; use [`Mobius`] when
/// mapping many samples.
pub fn mobius(x: f32, j: f32, peak: f64) -> f32 {
    if x <= j {
        return x;
    }
    let (a, b) = coefficients(j, peak);
    shoulder(x, j, a, b)
}

/// Mobius curve with exposure and precomputed shoulder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mobius {
    exposure: f32,
    transition: f32,
    peak: f64,
    a: f32,
    b: f32,
}

impl Mobius {
    /// Builds the curve.
    pub fn new(exposure: f32, transition: f32, peak: f64) -> Self {
        let (a, b) = coefficients(transition, peak);
        Self {
            exposure,
            transition,
            peak,
            a,
            b,
        }
    }

    /// Exposure multiplier applied before the curve.
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Transition point `j`.
    pub fn transition(&self) -> f32 {
        self.transition
    }

    /// Peak.
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Shoulder coefficients `(a, b)`.
    pub fn coefficients(&self) -> (f32, f32) {
        (self.a, self.b)
    }

    /// Whether `x` (before exposure) falls on the identity segment.
    #[inline]
    pub fn in_linear_region(&self, x: f32) -> bool {
        self.exposure * x <= self.transition
    }
}

impl Default for Mobius {
    fn default() -> Self {
        Self::new(DEFAULT_EXPOSURE, DEFAULT_TRANSITION, DEFAULT_PEAK)
    }
}

impl ToneCurve for Mobius {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        let v = self.exposure * x;
        if v <= self.transition {
            return v;
        }
        shoulder(v, self.transition, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_below_transition() {
        let curve = Mobius::new(1.0, 0.3, 2.0);
        for i in 0..=30 {
            let x = i as f32 * 0.01;
            assert_eq!(curve.eval(x), x);
        }
        assert_eq!(curve.eval(-5.0), -5.0);
    }

    #[test]
    fn test_continuous_at_transition() {
        for &peak in &[1.0, 1.5, 2.0, 10.0] {
            let curve = Mobius::new(1.0, 0.3, peak);
            let above = curve.eval(0.3 + 1e-5);
            assert!((above - 0.3).abs() < 1e-4, "peak={} above={}", peak, above);
        }
    }

    #[test]
    fn test_shoulder_compresses() {
        let curve = Mobius::new(1.0, 0.3, 2.0);
        assert!(curve.eval(1.0) < 1.0);
        assert!(curve.eval(10.0) < 2.0);
        assert!(curve.eval(10.0) > curve.eval(1.0));
    }

    #[test]
    fn test_peak_maps_to_one() {
        for &peak in &[1.5_f64, 2.0, 4.0] {
            let curve = Mobius::new(1.0, 0.3, peak);
            assert!((curve.eval(peak as f32) - 1.0).abs() < 1e-5, "peak={}", peak);
        }
    }

    #[test]
    fn test_default_exposure_leaves_linear_region() {
        let curve = Mobius::default();
        assert!(curve.in_linear_region(0.15));
        assert!(!curve.in_linear_region(0.3));
        assert_eq!(curve.eval(0.1), 0.2);
    }

    #[test]
    fn test_peak_one_stays_finite() {
        let (a, b) = coefficients(0.3, 1.0);
        assert_eq!(a, 0.0);
        assert!(b.is_finite());
        assert!(mobius(5.0, 0.3, 1.0).is_finite());
    }

    #[test]
    fn test_free_function_matches_struct() {
        let curve = Mobius::new(1.0, 0.25, 3.0);
        for &x in &[0.1_f32, 0.25, 0.5, 2.0, 100.0] {
            assert_eq!(curve.eval(x).to_bits(), mobius(x, 0.25, 3.0).to_bits());
        }
    }
}
