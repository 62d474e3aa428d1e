//! Sample and plane mapping.
//!
//! Every output sample depends only on the input sample at the same
//! position, so these functions are pure apart from writing `dst`. Row
//! padding in strided planes is left untouched.
//!
//! # Example
//!
//! ```rust
//! use tonemap_ops::{map_samples, CurveConfig, ReinhardParams};
//!
//! let config = CurveConfig::reinhard(&ReinhardParams::default()).unwrap();
//! let src = [0.0_f32, 1.0];
//! let mut dst = [0.0_f32; 2];
//! map_samples(&config, &src, &mut dst).unwrap();
//! assert_eq!(dst, [0.0, 1.0]);
//! ```

use tonemap_core::{Error, Plane, PlaneMut};
use tracing::trace;

use crate::config::CurveConfig;
use crate::error::OpsResult;
use crate::ToneCurve;

/// Maps a run of samples.
///
/// `src` and `dst` must have the same length.
pub fn map_samples(config: &CurveConfig, src: &[f32], dst: &mut [f32]) -> OpsResult<()> {
    if src.len() != dst.len() {
        return Err(Error::dimension_mismatch((src.len(), 1), (dst.len(), 1)).into());
    }
    config.eval_slice(src, dst);
    Ok(())
}

/// Maps one plane into another of the same dimensions.
///
/// Strides may differ between `src` and `dst`.
pub fn map_plane(config: &CurveConfig, src: &Plane<'_>, dst: &mut PlaneMut<'_>) -> OpsResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(Error::dimension_mismatch(src.dimensions(), dst.dimensions()).into());
    }
    trace!(
        width = src.width(),
        height = src.height(),
        src_stride = src.stride(),
        dst_stride = dst.stride(),
        "map_plane"
    );
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        config.eval_slice(s, d);
    }
    Ok(())
}

/// Maps a plane in place.
pub fn map_plane_inplace(config: &CurveConfig, plane: &mut PlaneMut<'_>) {
    for row in plane.rows_mut() {
        config.eval_inplace(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HableParams, MobiusParams};

    fn hable() -> CurveConfig {
        CurveConfig::hable(&HableParams::default()).unwrap()
    }

    #[test]
    fn test_map_samples_length_mismatch() {
        let src = [0.5_f32; 3];
        let mut dst = [0.0_f32; 2];
        let err = map_samples(&hable(), &src, &mut dst).unwrap_err();
        assert!(!err.is_configuration_error());
        assert_eq!(dst, [0.0, 0.0]);
    }

    #[test]
    fn test_map_samples_empty() {
        let mut dst: [f32; 0] = [];
        assert!(map_samples(&hable(), &[], &mut dst).is_ok());
    }

    #[test]
    fn test_map_plane_keeps_padding() {
        let config = hable();
        let src = [0.5_f32, 1.0, -7.0, 2.0, 4.0, -7.0];
        let mut dst = [9.0_f32; 6];
        {
            let s = Plane::new(&src, 2, 2, 3).unwrap();
            let mut d = PlaneMut::new(&mut dst, 2, 2, 3).unwrap();
            map_plane(&config, &s, &mut d).unwrap();
        }
        assert_eq!(dst[2], 9.0);
        assert_eq!(dst[5], 9.0);
        assert_eq!(dst[0].to_bits(), config.eval(0.5).to_bits());
        assert_eq!(dst[4].to_bits(), config.eval(4.0).to_bits());
    }

    #[test]
    fn test_map_plane_different_strides() {
        let config = CurveConfig::mobius(&MobiusParams::default()).unwrap();
        let src = [0.1_f32, 0.2, 0.0, 0.0, 0.3, 0.9];
        let mut dst = [0.0_f32; 4];
        {
            let s = Plane::new(&src, 2, 2, 4).unwrap();
            let mut d = PlaneMut::packed(&mut dst, 2, 2).unwrap();
            map_plane(&config, &s, &mut d).unwrap();
        }
        let expected: Vec<f32> = [0.1_f32, 0.2, 0.3, 0.9].iter().map(|&x| config.eval(x)).collect();
        assert_eq!(dst.to_vec(), expected);
    }

    #[test]
    fn test_map_plane_dimension_mismatch() {
        let src = [0.0_f32; 4];
        let mut dst = [0.0_f32; 4];
        let s = Plane::packed(&src, 2, 2).unwrap();
        let mut d = PlaneMut::packed(&mut dst, 4, 1).unwrap();
        let err = map_plane(&hable(), &s, &mut d).unwrap_err();
        assert!(matches!(err.as_core(), Some(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_inplace_matches_copy() {
        let config = hable();
        let src = [0.0_f32, 0.18, 1.0, 11.2];
        let mut copy = [0.0_f32; 4];
        map_samples(&config, &src, &mut copy).unwrap();

        let mut buf = src;
        map_plane_inplace(&config, &mut PlaneMut::packed(&mut buf, 4, 1).unwrap());
        assert_eq!(buf, copy);
    }
}
