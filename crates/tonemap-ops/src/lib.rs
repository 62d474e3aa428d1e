//! # tonemap-ops
//!
//! Tone-mapping filters for 32-bit float video planes.
//!
//! This crate turns a host-supplied parameter bag into a validated
//! [`CurveConfig`] and maps planes through it. It never allocates frames,
//! spawns threads (outside the opt-in [`parallel`] module) or keeps
//! references to sample memory between calls.
//!
//! # Modules
//!
//! - [`params`] - Parameter bag and YAML filter descriptions
//! - [`config`] - Per-curve parameters, validation, [`CurveConfig`]
//! - [`apply`] - Sample and plane mapping
//! - [`filter`] - Filter registry and frame processing
//! - [`parallel`] - Row-parallel mapping with Rayon
//!
//! # Example
//!
//! ```rust
//! use tonemap_core::{Plane, PlaneMut, VideoFormat, VideoInfo};
//! use tonemap_ops::{FilterKind, ParamMap, TonemapFilter};
//!
//! let info = VideoInfo::new(VideoFormat::gray_s(), 2, 1);
//! let params = ParamMap::new().with("exposure", 1.0);
//! let filter = TonemapFilter::new(FilterKind::Hable, &params, &info).unwrap();
//!
//! let src = [0.0_f32, 11.2];
//! let mut dst = [0.0_f32; 2];
//! let planes = [Plane::packed(&src, 2, 1).unwrap()];
//! let mut out = [PlaneMut::packed(&mut dst, 2, 1).unwrap()];
//! filter.process_frame(&planes, &mut out).unwrap();
//!
//! assert!(dst[0].abs() < 1e-5);
//! assert!((dst[1] - 1.0).abs() < 1e-5);
//! ```
//!
//! # Errors
//!
//! Configuration problems surface once, from [`TonemapFilter::new`] or
//! [`validate`]. Mapping functions only fail on mismatched buffers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod apply;
pub mod config;
pub mod filter;
pub mod params;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use apply::{map_plane, map_plane_inplace, map_samples};
pub use config::{CurveConfig, HableParams, MobiusParams, ReinhardParams};
pub use error::{OpsError, OpsResult};
pub use filter::{validate, FilterKind, TonemapFilter, PLUGIN_DESCRIPTION, PLUGIN_ID, PLUGIN_NAMESPACE};
pub use params::{FilterSpec, ParamMap};
pub use tonemap_curves::ToneCurve;
