//! # tonemap-core
//!
//! Core types shared by the tonemap-rs crates.
//!
//! - [`Error`] / [`Result`] - Configuration and buffer errors
//! - [`SampleType`], [`VideoFormat`], [`VideoInfo`] - Format descriptors supplied by the host
//! - [`Plane`], [`PlaneMut`] - Borrowed, strided views over `f32` sample planes
//!
//! ## Crate Structure
//!
//! ```text
//! tonemap-core (this crate)
//!    ^
//!    |
//!    +-- tonemap-curves (scalar curves)
//!    +-- tonemap-ops (configuration, plane mapping, filters)
//! ```
//!
//! The host owns every frame buffer. Types in this crate only borrow
//! sample memory for the duration of a call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod plane;

pub use error::*;
pub use format::*;
pub use plane::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tonemap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{ColorFamily, SampleType, VideoFormat, VideoInfo};
    pub use crate::plane::{Plane, PlaneMut};
}
