//! Row-parallel mapping using Rayon.
//!
//! Same results as [`crate::apply`], bit for bit: rows are independent and
//! each sample goes through the same scalar evaluation. Worth it for large
//! planes; small ones are faster on the calling thread.
//!
//! # Example
//!
//! ```rust
//! use tonemap_core::{Plane, PlaneMut};
//! use tonemap_ops::{parallel, CurveConfig, HableParams};
//!
//! let config = CurveConfig::hable(&HableParams::default()).unwrap();
//! let src = vec![0.5_f32; 256 * 256];
//! let mut dst = vec![0.0_f32; 256 * 256];
//! let s = Plane::packed(&src, 256, 256).unwrap();
//! let mut d = PlaneMut::packed(&mut dst, 256, 256).unwrap();
//! parallel::map_plane(&config, &s, &mut d).unwrap();
//! ```

use rayon::prelude::*;
use tonemap_core::{Error, Plane, PlaneMut};

use crate::config::CurveConfig;
use crate::error::OpsResult;
use crate::ToneCurve;

/// Samples per task in [`map_samples`].
const CHUNK: usize = 16 * 1024;

/// Parallel [`crate::map_samples`].
pub fn map_samples(config: &CurveConfig, src: &[f32], dst: &mut [f32]) -> OpsResult<()> {
    if src.len() != dst.len() {
        return Err(Error::dimension_mismatch((src.len(), 1), (dst.len(), 1)).into());
    }
    src.par_chunks(CHUNK)
        .zip(dst.par_chunks_mut(CHUNK))
        .for_each(|(s, d)| config.eval_slice(s, d));
    Ok(())
}

/// Parallel [`crate::map_plane`]; one task per row.
pub fn map_plane(config: &CurveConfig, src: &Plane<'_>, dst: &mut PlaneMut<'_>) -> OpsResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(Error::dimension_mismatch(src.dimensions(), dst.dimensions()).into());
    }
    let (width, height) = src.dimensions();
    let src_stride = src.stride().max(1);
    let dst_stride = dst.stride().max(1);
    src.as_slice()
        .par_chunks(src_stride)
        .take(height)
        .zip(dst.as_mut_slice().par_chunks_mut(dst_stride).take(height))
        .for_each(|(s, d)| config.eval_slice(&s[..width], &mut d[..width]));
    Ok(())
}

/// Parallel [`crate::map_plane_inplace`].
pub fn map_plane_inplace(config: &CurveConfig, plane: &mut PlaneMut<'_>) {
    let (width, height) = plane.dimensions();
    let stride = plane.stride().max(1);
    plane
        .as_mut_slice()
        .par_chunks_mut(stride)
        .take(height)
        .for_each(|row| config.eval_inplace(&mut row[..width]));
}
