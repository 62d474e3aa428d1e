//! Filter registry and per-frame processing.
//!
//! A host registers three filters under the `tonemap` namespace. Each takes
//! a clip plus optional float arguments; the argument lists are exposed as
//! [`FilterKind::parameters`] and as host-style signature strings.
//!
//! Construction ([`TonemapFilter::new`]) is the only place that can fail
//! on configuration. Afterwards a filter is immutable and every frame is
//! mapped independently, so frames may be processed concurrently and in
//! any order.
//!
//! # Example
//!
//! ```rust
//! use tonemap_core::{VideoFormat, VideoInfo};
//! use tonemap_ops::{validate, FilterKind, ParamMap};
//!
//! let kind: FilterKind = "Reinhard".parse().unwrap();
//! assert_eq!(kind.signature(), "clip:clip;exposure:float:opt;contrast:float:opt;peak:float:opt;");
//!
//! let info = VideoInfo::new(VideoFormat::gray16(), 64, 64);
//! let err = validate(kind, &ParamMap::new(), &info).unwrap_err();
//! assert_eq!(err.to_string(), "Reinhard: only constant format 32 bit float input supported");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonemap_core::{Error, Plane, PlaneMut, VideoFormat, VideoInfo};
use tracing::{debug, trace};

use crate::apply::map_plane;
use crate::config::{CurveConfig, HableParams, MobiusParams, ReinhardParams};
use crate::error::OpsResult;
use crate::params::ParamMap;

/// Plugin identifier.
pub const PLUGIN_ID: &str = "com.ifb.tonemap";
/// Namespace the filters are registered under.
pub const PLUGIN_NAMESPACE: &str = "tonemap";
/// Human-readable plugin description.
pub const PLUGIN_DESCRIPTION: &str = "Simple tone mapping";

/// The registered filters.
///
/// Deserializes through [`FromStr`], so YAML accepts the same spellings as
/// name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FilterKind {
    /// Hable / Uncharted 2 filmic curve.
    Hable,
    /// Mobius curve.
    Mobius,
    /// Reinhard curve.
    Reinhard,
}

impl FilterKind {
    /// All filters, in registration order.
    pub const ALL: [FilterKind; 3] = [FilterKind::Hable, FilterKind::Mobius, FilterKind::Reinhard];

    /// Registered name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hable => "Hable",
            Self::Mobius => "Mobius",
            Self::Reinhard => "Reinhard",
        }
    }

    /// Optional float arguments, in declaration order.
    pub const fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Hable => HableParams::NAMES,
            Self::Mobius => MobiusParams::NAMES,
            Self::Reinhard => ReinhardParams::NAMES,
        }
    }

    /// Host argument signature, e.g. `clip:clip;exposure:float:opt;...`.
    pub fn signature(&self) -> String {
        let mut sig = String::from("clip:clip;");
        for name in self.parameters() {
            sig.push_str(name);
            sig.push_str(":float:opt;");
        }
        sig
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    /// Exact registered name first, then a case-insensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|k| k.name() == s)
            .or_else(|| Self::ALL.iter().find(|k| k.name().eq_ignore_ascii_case(s)))
            .copied()
            .ok_or_else(|| Error::UnknownFilter { name: s.to_string() })
    }
}

impl TryFrom<String> for FilterKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A configured tone-mapping filter bound to a clip format.
#[derive(Debug, Clone)]
pub struct TonemapFilter {
    config: CurveConfig,
    info: VideoInfo,
    format: VideoFormat,
}

impl TonemapFilter {
    /// Validates the clip format and parameters and resolves the curve.
    ///
    /// Fails with [`Error::UnsupportedFormat`] unless the clip is
    /// constant-format 32-bit float, and with a configuration error when a
    /// parameter is unknown or violates a curve precondition.
    pub fn new(kind: FilterKind, params: &ParamMap, info: &VideoInfo) -> OpsResult<Self> {
        let format = match info.format {
            Some(format) if info.is_constant_float32() => format,
            _ => return Err(Error::unsupported_format(kind.name()).into()),
        };
        let config = CurveConfig::from_params(kind, params)?;
        debug!(
            filter = kind.name(),
            width = info.width,
            height = info.height,
            planes = format.num_planes,
            "Created tonemap filter"
        );
        Ok(Self {
            config,
            info: *info,
            format,
        })
    }

    /// Looks the filter up by name, then behaves like [`new`](Self::new).
    pub fn create(name: &str, params: &ParamMap, info: &VideoInfo) -> OpsResult<Self> {
        Self::new(name.parse()?, params, info)
    }

    /// Which curve this filter applies.
    pub fn kind(&self) -> FilterKind {
        self.config.kind()
    }

    /// Resolved curve.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Clip description the filter was built for. Output frames share it.
    pub fn video_info(&self) -> &VideoInfo {
        &self.info
    }

    /// Checks a frame's planes against the clip format.
    fn check_frame(&self, src: &[Plane<'_>], dst: &[PlaneMut<'_>]) -> OpsResult<()> {
        let expected = self.format.num_planes;
        for got in [src.len(), dst.len()] {
            if got != expected {
                return Err(Error::PlaneCountMismatch { expected, got }.into());
            }
        }
        for (i, (s, d)) in src.iter().zip(dst).enumerate() {
            let dims = self.format.plane_dimensions(i, self.info.width, self.info.height);
            if s.dimensions() != dims {
                return Err(Error::dimension_mismatch(dims, s.dimensions()).into());
            }
            if d.dimensions() != dims {
                return Err(Error::dimension_mismatch(dims, d.dimensions()).into());
            }
        }
        Ok(())
    }

    /// Maps every plane of one frame.
    ///
    /// `src` and `dst` must each hold one plane per format plane, sized as
    /// the format dictates (chroma planes may be subsampled). Nothing is
    /// written unless the whole frame checks out.
    pub fn process_frame(&self, src: &[Plane<'_>], dst: &mut [PlaneMut<'_>]) -> OpsResult<()> {
        self.check_frame(src, dst)?;
        trace!(filter = self.kind().name(), planes = src.len(), "process_frame");
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            map_plane(&self.config, s, d)?;
        }
        Ok(())
    }

    /// Like [`process_frame`](Self::process_frame), splitting each plane's
    /// rows across the Rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn process_frame_par(&self, src: &[Plane<'_>], dst: &mut [PlaneMut<'_>]) -> OpsResult<()> {
        self.check_frame(src, dst)?;
        trace!(filter = self.kind().name(), planes = src.len(), "process_frame_par");
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            crate::parallel::map_plane(&self.config, s, d)?;
        }
        Ok(())
    }
}

/// One-time check of a filter configuration against a clip.
///
/// `Ok(())` means [`TonemapFilter::new`] would succeed; otherwise the error
/// names the filter and the failed constraint.
pub fn validate(kind: FilterKind, params: &ParamMap, info: &VideoInfo) -> OpsResult<()> {
    TonemapFilter::new(kind, params, info).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures() {
        assert_eq!(
            FilterKind::Hable.signature(),
            "clip:clip;exposure:float:opt;a:float:opt;b:float:opt;c:float:opt;d:float:opt;e:float:opt;f:float:opt;w:float:opt;"
        );
        assert_eq!(
            FilterKind::Mobius.signature(),
            "clip:clip;exposure:float:opt;transition:float:opt;peak:float:opt;"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Hable".parse::<FilterKind>().unwrap(), FilterKind::Hable);
        assert_eq!("mobius".parse::<FilterKind>().unwrap(), FilterKind::Mobius);
        let err = "Drago".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownFilter { .. }));
        for kind in FilterKind::ALL {
            assert_eq!(kind.to_string().parse::<FilterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_rejects_variable_format() {
        for kind in FilterKind::ALL {
            let err = validate(kind, &ParamMap::new(), &VideoInfo::variable()).unwrap_err();
            assert!(err.is_configuration_error());
            assert!(err.to_string().starts_with(kind.name()));
        }
    }

    #[test]
    fn test_rejects_half_float() {
        let info = VideoInfo::new(VideoFormat::gray_h(), 8, 8);
        assert!(validate(FilterKind::Hable, &ParamMap::new(), &info).is_err());
    }

    #[test]
    fn test_format_checked_before_params() {
        let info = VideoInfo::new(VideoFormat::gray16(), 8, 8);
        let params = ParamMap::new().with("f", 0.0);
        let err = validate(FilterKind::Hable, &params, &info).unwrap_err();
        assert!(matches!(err.as_core(), Some(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_create_by_name() {
        let info = VideoInfo::new(VideoFormat::rgb_s(), 4, 4);
        let filter = TonemapFilter::create("Mobius", &ParamMap::new(), &info).unwrap();
        assert_eq!(filter.kind(), FilterKind::Mobius);
        assert_eq!(filter.video_info(), &info);

        let err = TonemapFilter::create("Nope", &ParamMap::new(), &info).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_plane_count_checked() {
        let info = VideoInfo::new(VideoFormat::rgb_s(), 1, 1);
        let filter = TonemapFilter::new(FilterKind::Reinhard, &ParamMap::new(), &info).unwrap();
        let src = [1.0_f32];
        let mut dst = [0.0_f32];
        let planes = [Plane::packed(&src, 1, 1).unwrap()];
        let mut out = [PlaneMut::packed(&mut dst, 1, 1).unwrap()];
        let err = filter.process_frame(&planes, &mut out).unwrap_err();
        assert!(matches!(
            err.as_core(),
            Some(Error::PlaneCountMismatch { expected: 3, got: 1 })
        ));
        assert_eq!(dst[0], 0.0);
    }
}
