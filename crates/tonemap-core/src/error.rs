//! Error types for tonemap-core operations.
//!
//! Two classes of failure exist:
//!
//! - **Configuration errors**: the input format or a curve parameter is
//!   unusable. These are raised once, when a filter is constructed, and
//!   never per sample.
//! - **Buffer errors**: a plane descriptor handed over by the host does not
//!   describe a valid region (stride narrower than width, slice too short,
//!   mismatched input/output dimensions).
//!
//! # Usage
//!
//! ```rust
//! use tonemap_core::{Error, Result};
//!
//! fn check_peak(peak: f64) -> Result<()> {
//!     if peak <= 0.0 {
//!         return Err(Error::configuration("Mobius", "peak must be greater than 0"));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_peak(0.0).unwrap_err();
//! assert!(err.is_configuration_error());
//! assert_eq!(err.to_string(), "Mobius: peak must be greater than 0");
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a tone-mapping filter.
#[derive(Debug, Error)]
pub enum Error {
    /// A curve-specific precondition failed.
    ///
    /// `filter` is the filter name ("Hable", "Mobius", "Reinhard"),
    /// `reason` names the violated constraint.
    #[error("{filter}: {reason}")]
    Configuration {
        /// Filter that rejected the configuration
        filter: &'static str,
        /// Which constraint failed
        reason: String,
    },

    /// The host clip is not constant-format 32-bit float.
    #[error("{filter}: only constant format 32 bit float input supported")]
    UnsupportedFormat {
        /// Filter that rejected the format
        filter: &'static str,
    },

    /// A parameter was supplied that the filter does not declare.
    #[error("{filter}: unknown parameter '{name}'")]
    UnknownParameter {
        /// Filter being configured
        filter: &'static str,
        /// Offending parameter name
        name: String,
    },

    /// No filter is registered under this name.
    #[error("unknown filter: {name}")]
    UnknownFilter {
        /// Requested filter name
        name: String,
    },

    /// Row stride is smaller than the plane width.
    #[error("stride {stride} is less than width {width}")]
    InvalidStride {
        /// Provided stride, in samples
        stride: usize,
        /// Plane width, in samples
        width: usize,
    },

    /// The sample slice is too short for the described plane.
    #[error("plane needs {needed} samples, slice holds {got}")]
    InsufficientData {
        /// Samples required by width, height and stride
        needed: usize,
        /// Samples actually available
        got: usize,
    },

    /// Input and output planes differ in size.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First plane width
        a_width: usize,
        /// First plane height
        a_height: usize,
        /// Second plane width
        b_width: usize,
        /// Second plane height
        b_height: usize,
    },

    /// A frame carries a different number of planes than expected.
    #[error("plane count mismatch: expected {expected}, got {got}")]
    PlaneCountMismatch {
        /// Planes required
        expected: usize,
        /// Planes supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::Configuration`] error.
    #[inline]
    pub fn configuration(filter: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            filter,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(filter: &'static str) -> Self {
        Self::UnsupportedFormat { filter }
    }

    /// Creates an [`Error::UnknownParameter`] error.
    #[inline]
    pub fn unknown_parameter(filter: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            filter,
            name: name.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this error belongs to the configuration class.
    ///
    /// Configuration errors are raised before any frame is processed;
    /// everything else concerns a specific buffer.
    #[inline]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::UnsupportedFormat { .. }
                | Self::UnknownParameter { .. }
                | Self::UnknownFilter { .. }
        )
    }

    /// Name of the filter this error refers to, if any.
    pub fn filter(&self) -> Option<&'static str> {
        match self {
            Self::Configuration { filter, .. }
            | Self::UnsupportedFormat { filter }
            | Self::UnknownParameter { filter, .. } => Some(*filter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::unsupported_format("Hable");
        assert_eq!(
            err.to_string(),
            "Hable: only constant format 32 bit float input supported"
        );
        assert!(err.is_configuration_error());
        assert_eq!(err.filter(), Some("Hable"));
    }

    #[test]
    fn test_configuration_names_filter() {
        let err = Error::configuration("Reinhard", "contrast must be in (0, 1]");
        let msg = err.to_string();
        assert!(msg.starts_with("Reinhard"));
        assert!(msg.contains("contrast"));
    }

    #[test]
    fn test_buffer_errors_are_not_configuration() {
        let err = Error::dimension_mismatch((2, 1), (1, 2));
        assert!(!err.is_configuration_error());
        assert_eq!(err.filter(), None);
        assert!(err.to_string().contains("2x1"));
        assert!(err.to_string().contains("1x2"));

        let err = Error::InvalidStride { stride: 3, width: 4 };
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_unknown_parameter() {
        let err = Error::unknown_parameter("Mobius", "contrast");
        assert_eq!(err.to_string(), "Mobius: unknown parameter 'contrast'");
        assert!(err.is_configuration_error());
    }
}
