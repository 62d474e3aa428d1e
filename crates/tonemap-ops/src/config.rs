//! Curve parameters, validation and the resolved [`CurveConfig`].
//!
//! Each curve has a plain parameter struct (`f64` fields, as supplied by the
//! host, with the documented defaults) and a checked conversion into a
//! [`CurveConfig`]. Validation happens exactly once, here; evaluation never
//! re-checks anything.
//!
//! | Curve | Rejected |
//! |-------|----------|
//! | Hable | non-finite parameter, `f == 0`, `w <= 0` |
//! | Mobius | non-finite parameter, `peak <= 0` |
//! | Reinhard | non-finite parameter, `contrast` outside (0, 1], `peak <= 0` |
//!
//! Values that are admissible but produce an odd curve (a Mobius transition
//! outside `[0, peak)`, a Hable white point whose raw value is zero) are
//! accepted with a warning.
//!
//! # Example
//!
//! ```rust
//! use tonemap_ops::{CurveConfig, HableParams, ReinhardParams, ToneCurve};
//!
//! let hable = HableParams { f: 0.0, ..Default::default() };
//! assert!(CurveConfig::hable(&hable).is_err());
//!
//! let reinhard = CurveConfig::reinhard(&ReinhardParams::default()).unwrap();
//! assert_eq!(reinhard.eval(1.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tonemap_core::Error;
use tonemap_curves::{hable, mobius, reinhard, Hable, Mobius, Reinhard, ToneCurve};
use tracing::{debug, warn};

use crate::error::OpsResult;
use crate::filter::FilterKind;
use crate::params::ParamMap;

fn ensure_finite(filter: FilterKind, name: &str, value: f64) -> OpsResult<()> {
    if !value.is_finite() {
        return Err(Error::configuration(filter.name(), format!("{} must be finite, got {}", name, value)).into());
    }
    Ok(())
}

/// Like [`ensure_finite`] for values the curve stores as `f32`; a finite
/// `f64` beyond `f32::MAX` narrows to infinity.
fn ensure_finite_f32(filter: FilterKind, name: &str, value: f64) -> OpsResult<()> {
    ensure_finite(filter, name, value)?;
    if !(value as f32).is_finite() {
        return Err(Error::configuration(filter.name(), format!("{} is out of 32-bit float range, got {}", name, value)).into());
    }
    Ok(())
}

/// Hable curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HableParams {
    /// Exposure multiplier.
    pub exposure: f64,
    /// Shoulder strength.
    pub a: f64,
    /// Linear strength.
    pub b: f64,
    /// Linear angle.
    pub c: f64,
    /// Toe strength.
    pub d: f64,
    /// Toe numerator.
    pub e: f64,
    /// Toe denominator, must not be zero.
    pub f: f64,
    /// Linear white point, must be positive.
    pub w: f64,
}

impl Default for HableParams {
    fn default() -> Self {
        Self {
            exposure: f64::from(hable::DEFAULT_EXPOSURE),
            a: f64::from(hable::DEFAULT_A),
            b: f64::from(hable::DEFAULT_B),
            c: f64::from(hable::DEFAULT_C),
            d: f64::from(hable::DEFAULT_D),
            e: f64::from(hable::DEFAULT_E),
            f: f64::from(hable::DEFAULT_F),
            w: f64::from(hable::DEFAULT_W),
        }
    }
}

impl HableParams {
    /// Parameter names in declaration order.
    pub const NAMES: &'static [&'static str] = &["exposure", "a", "b", "c", "d", "e", "f", "w"];

    /// Reads overrides from `params`, defaulting the rest.
    pub fn from_params(params: &ParamMap) -> Self {
        let d = Self::default();
        Self {
            exposure: params.get_or("exposure", d.exposure),
            a: params.get_or("a", d.a),
            b: params.get_or("b", d.b),
            c: params.get_or("c", d.c),
            d: params.get_or("d", d.d),
            e: params.get_or("e", d.e),
            f: params.get_or("f", d.f),
            w: params.get_or("w", d.w),
        }
    }

    /// Checks the hard preconditions.
    pub fn validate(&self) -> OpsResult<()> {
        let kind = FilterKind::Hable;
        for (name, value) in Self::NAMES.iter().zip(self.values()) {
            ensure_finite_f32(kind, name, value)?;
        }
        // Checked after narrowing: a tiny f64 can still become 0.0f32.
        if self.f as f32 == 0.0 {
            return Err(Error::configuration(kind.name(), "f must not be zero").into());
        }
        if self.w as f32 <= 0.0 {
            return Err(Error::configuration(kind.name(), format!("w must be greater than 0, got {}", self.w)).into());
        }
        Ok(())
    }

    fn values(&self) -> [f64; 8] {
        [self.exposure, self.a, self.b, self.c, self.d, self.e, self.f, self.w]
    }
}

/// Mobius curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobiusParams {
    /// Exposure multiplier.
    pub exposure: f64,
    /// Transition point `j`; identity below it.
    pub transition: f64,
    /// Peak, must be positive.
    pub peak: f64,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            exposure: f64::from(mobius::DEFAULT_EXPOSURE),
            transition: f64::from(mobius::DEFAULT_TRANSITION),
            peak: mobius::DEFAULT_PEAK,
        }
    }
}

impl MobiusParams {
    /// Parameter names in declaration order.
    pub const NAMES: &'static [&'static str] = &["exposure", "transition", "peak"];

    /// Reads overrides from `params`, defaulting the rest.
    pub fn from_params(params: &ParamMap) -> Self {
        let d = Self::default();
        Self {
            exposure: params.get_or("exposure", d.exposure),
            transition: params.get_or("transition", d.transition),
            peak: params.get_or("peak", d.peak),
        }
    }

    /// Checks the hard preconditions.
    pub fn validate(&self) -> OpsResult<()> {
        let kind = FilterKind::Mobius;
        ensure_finite_f32(kind, "exposure", self.exposure)?;
        ensure_finite_f32(kind, "transition", self.transition)?;
        ensure_finite(kind, "peak", self.peak)?;
        if self.peak <= 0.0 {
            return Err(Error::configuration(kind.name(), format!("peak must be greater than 0, got {}", self.peak)).into());
        }
        Ok(())
    }
}

/// Reinhard curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinhardParams {
    /// Exposure. Accepted and stored but not applied to samples.
    pub exposure: f64,
    /// Contrast in (0, 1].
    pub contrast: f64,
    /// Peak, must be positive.
    pub peak: f64,
}

impl Default for ReinhardParams {
    fn default() -> Self {
        Self {
            exposure: f64::from(reinhard::DEFAULT_EXPOSURE),
            contrast: f64::from(reinhard::DEFAULT_CONTRAST),
            peak: f64::from(reinhard::DEFAULT_PEAK),
        }
    }
}

impl ReinhardParams {
    /// Parameter names in declaration order.
    pub const NAMES: &'static [&'static str] = &["exposure", "contrast", "peak"];

    /// Reads overrides from `params`, defaulting the rest.
    pub fn from_params(params: &ParamMap) -> Self {
        let d = Self::default();
        if params.contains("exposure") {
            warn!("Reinhard: exposure is accepted but not applied by this curve");
        }
        Self {
            exposure: params.get_or("exposure", d.exposure),
            contrast: params.get_or("contrast", d.contrast),
            peak: params.get_or("peak", d.peak),
        }
    }

    /// Checks the hard preconditions.
    pub fn validate(&self) -> OpsResult<()> {
        let kind = FilterKind::Reinhard;
        ensure_finite_f32(kind, "exposure", self.exposure)?;
        ensure_finite_f32(kind, "contrast", self.contrast)?;
        ensure_finite_f32(kind, "peak", self.peak)?;
        let contrast = self.contrast as f32;
        if contrast <= 0.0 || contrast > 1.0 {
            return Err(Error::configuration(kind.name(), format!("contrast must be in (0, 1], got {}", self.contrast)).into());
        }
        if self.peak as f32 <= 0.0 {
            return Err(Error::configuration(kind.name(), format!("peak must be greater than 0, got {}", self.peak)).into());
        }
        Ok(())
    }
}

/// A validated curve with its derived constants, ready for evaluation.
///
/// Immutable and `Send + Sync`: build once per filter instance, then share
/// by reference across any number of mapping calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveConfig {
    /// Hable filmic curve.
    Hable(Hable),
    /// Mobius curve.
    Mobius(Mobius),
    /// Reinhard curve.
    Reinhard(Reinhard),
}

impl CurveConfig {
    /// Validates and resolves Hable parameters.
    pub fn hable(p: &HableParams) -> OpsResult<Self> {
        p.validate()?;
        let curve = Hable::new(
            p.exposure as f32,
            p.a as f32,
            p.b as f32,
            p.c as f32,
            p.d as f32,
            p.e as f32,
            p.f as f32,
            p.w as f32,
        );
        if !curve.whitescale().is_finite() {
            warn!(w = p.w, "Hable: raw curve is zero or not finite at w, whitescale is not finite");
        }
        debug!(
            exposure = p.exposure,
            a = p.a,
            b = p.b,
            c = p.c,
            d = p.d,
            e = p.e,
            f = p.f,
            w = p.w,
            whitescale = curve.whitescale(),
            "Resolved Hable curve"
        );
        Ok(Self::Hable(curve))
    }

    /// Validates and resolves Mobius parameters.
    pub fn mobius(p: &MobiusParams) -> OpsResult<Self> {
        p.validate()?;
        if p.transition < 0.0 || p.transition >= p.peak {
            warn!(
                transition = p.transition,
                peak = p.peak,
                "Mobius: transition outside [0, peak), curve will not be monotonic"
            );
        }
        let curve = Mobius::new(p.exposure as f32, p.transition as f32, p.peak);
        let (a, b) = curve.coefficients();
        debug!(exposure = p.exposure, transition = p.transition, peak = p.peak, a, b, "Resolved Mobius curve");
        Ok(Self::Mobius(curve))
    }

    /// Validates and resolves Reinhard parameters.
    pub fn reinhard(p: &ReinhardParams) -> OpsResult<Self> {
        p.validate()?;
        let curve = Reinhard::new(p.exposure as f32, p.contrast as f32, p.peak as f32);
        debug!(
            contrast = p.contrast,
            peak = p.peak,
            offset = curve.offset(),
            "Resolved Reinhard curve"
        );
        Ok(Self::Reinhard(curve))
    }

    /// Resolves `kind` from a parameter bag.
    ///
    /// Parameters not declared by `kind` are rejected.
    pub fn from_params(kind: FilterKind, params: &ParamMap) -> OpsResult<Self> {
        if let Some(name) = params.names().find(|n| !kind.parameters().contains(n)) {
            return Err(Error::unknown_parameter(kind.name(), name).into());
        }
        match kind {
            FilterKind::Hable => Self::hable(&HableParams::from_params(params)),
            FilterKind::Mobius => Self::mobius(&MobiusParams::from_params(params)),
            FilterKind::Reinhard => Self::reinhard(&ReinhardParams::from_params(params)),
        }
    }

    /// Which curve this is.
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Hable(_) => FilterKind::Hable,
            Self::Mobius(_) => FilterKind::Mobius,
            Self::Reinhard(_) => FilterKind::Reinhard,
        }
    }

    /// Configured exposure. For Reinhard this value is not applied.
    pub fn exposure(&self) -> f32 {
        match self {
            Self::Hable(c) => c.exposure(),
            Self::Mobius(c) => c.exposure(),
            Self::Reinhard(c) => c.exposure(),
        }
    }
}

impl ToneCurve for CurveConfig {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        match self {
            Self::Hable(c) => c.eval(x),
            Self::Mobius(c) => c.eval(x),
            Self::Reinhard(c) => c.eval(x),
        }
    }

    // Dispatch once per slice instead of once per sample.
    #[inline]
    fn eval_slice(&self, src: &[f32], dst: &mut [f32]) {
        match self {
            Self::Hable(c) => c.eval_slice(src, dst),
            Self::Mobius(c) => c.eval_slice(src, dst),
            Self::Reinhard(c) => c.eval_slice(src, dst),
        }
    }

    #[inline]
    fn eval_inplace(&self, buf: &mut [f32]) {
        match self {
            Self::Hable(c) => c.eval_inplace(buf),
            Self::Mobius(c) => c.eval_inplace(buf),
            Self::Reinhard(c) => c.eval_inplace(buf),
        }
    }
}
