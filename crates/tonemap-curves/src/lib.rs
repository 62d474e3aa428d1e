//! # tonemap-curves
//!
//! Scalar tone-mapping curves for compressing scene-linear HDR values into a
//! displayable range.
//!
//! Every curve is a pure function of its parameters and one input sample.
//! Constants that depend only on the parameters (Hable's white scale,
//! Mobius' `a`/`b`, Reinhard's offset) are derived once when the curve is
//! built, never per sample.
//!
//! # Supported Curves
//!
//! | Curve | Shape | Exposure applied |
//! |-------|-------|------------------|
//! | [`hable`] | Uncharted 2 filmic, normalized so `w` maps to 1.0 | yes |
//! | [`mobius`] | Identity below `transition`, Mobius shoulder above | yes |
//! | [`reinhard`] | `x / (x + offset)` rescaled so `peak` maps to 1.0 | no |
//!
//! # Usage
//!
//! ```rust
//! use tonemap_curves::{Hable, Mobius, Reinhard, ToneCurve};
//!
//! let hable = Hable::default();
//! let mobius = Mobius::default();
//! let reinhard = Reinhard::default();
//!
//! assert!(hable.eval(0.0).abs() < 1e-6);
//! assert_eq!(mobius.eval(0.1), 0.2); // 2.0 * 0.1, below transition
//! assert!((reinhard.eval(1.0) - 1.0).abs() < 1e-6);
//! ```
//!
//! # Non-finite input
//!
//! Inputs are not clamped. Negative, huge or NaN samples go through the
//! same arithmetic and produce whatever IEEE 754 dictates.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hable;
pub mod mobius;
pub mod reinhard;

pub use hable::Hable;
pub use mobius::Mobius;
pub use reinhard::Reinhard;

/// A per-sample transfer function.
///
/// Implementors are immutable once built, so a single curve can be shared
/// across threads and evaluated concurrently.
pub trait ToneCurve: Send + Sync {
    /// Maps one sample.
    fn eval(&self, x: f32) -> f32;

    /// Maps `src` into `dst` element-wise.
    ///
    /// Only `min(src.len(), dst.len())` samples are written.
    #[inline]
    fn eval_slice(&self, src: &[f32], dst: &mut [f32]) {
        for (out, &x) in dst.iter_mut().zip(src) {
            *out = self.eval(x);
        }
    }

    /// Maps a buffer in place.
    #[inline]
    fn eval_inplace(&self, buf: &mut [f32]) {
        for v in buf.iter_mut() {
            *v = self.eval(*v);
        }
    }
}
