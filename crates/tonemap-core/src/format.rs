//! Host-side video format descriptors.
//!
//! A tone-mapping filter only accepts clips whose format is constant for the
//! whole stream and whose samples are 32-bit IEEE floats. These types carry
//! just enough of the host's format description to make that decision and to
//! size each plane.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_core::format::{VideoFormat, VideoInfo};
//!
//! let info = VideoInfo::new(VideoFormat::rgb_s(), 1920, 1080);
//! assert!(info.is_constant_format());
//! assert!(VideoFormat::rgb_s().is_float32());
//! assert!(!VideoFormat::gray16().is_float32());
//! ```

/// Sample storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleType {
    /// Unsigned integer samples.
    Integer,
    /// IEEE 754 floating-point samples.
    #[default]
    Float,
}

/// Color family of a format. Informational only: every plane is mapped
/// with the same curve regardless of family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFamily {
    /// Single luma/gray plane.
    Gray,
    /// Three full-resolution R, G, B planes.
    #[default]
    Rgb,
    /// Luma plus two (possibly subsampled) chroma planes.
    Yuv,
}

/// Description of a clip's sample layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoFormat {
    /// Color family.
    pub color_family: ColorFamily,
    /// Integer or float.
    pub sample_type: SampleType,
    /// Significant bits per sample.
    pub bits_per_sample: u32,
    /// Storage bytes per sample.
    pub bytes_per_sample: u32,
    /// Horizontal chroma subsampling, log2.
    pub sub_sampling_w: u32,
    /// Vertical chroma subsampling, log2.
    pub sub_sampling_h: u32,
    /// Number of planes per frame.
    pub num_planes: usize,
}

impl VideoFormat {
    /// Single-plane 32-bit float gray.
    pub const fn gray_s() -> Self {
        Self {
            color_family: ColorFamily::Gray,
            sample_type: SampleType::Float,
            bits_per_sample: 32,
            bytes_per_sample: 4,
            sub_sampling_w: 0,
            sub_sampling_h: 0,
            num_planes: 1,
        }
    }

    /// Three-plane 32-bit float RGB.
    pub const fn rgb_s() -> Self {
        Self {
            color_family: ColorFamily::Rgb,
            sample_type: SampleType::Float,
            bits_per_sample: 32,
            bytes_per_sample: 4,
            sub_sampling_w: 0,
            sub_sampling_h: 0,
            num_planes: 3,
        }
    }

    /// Three-plane 32-bit float YUV 4:4:4.
    pub const fn yuv444_s() -> Self {
        Self {
            color_family: ColorFamily::Yuv,
            ..Self::rgb_s()
        }
    }

    /// Three-plane 32-bit float YUV 4:2:0.
    pub const fn yuv420_s() -> Self {
        Self {
            color_family: ColorFamily::Yuv,
            sub_sampling_w: 1,
            sub_sampling_h: 1,
            ..Self::rgb_s()
        }
    }

    /// Single-plane 16-bit half float gray.
    pub const fn gray_h() -> Self {
        Self {
            bits_per_sample: 16,
            bytes_per_sample: 2,
            ..Self::gray_s()
        }
    }

    /// Single-plane 16-bit integer gray.
    pub const fn gray16() -> Self {
        Self {
            sample_type: SampleType::Integer,
            bits_per_sample: 16,
            bytes_per_sample: 2,
            ..Self::gray_s()
        }
    }

    /// Whether samples are 4-byte floats.
    #[inline]
    pub const fn is_float32(&self) -> bool {
        matches!(self.sample_type, SampleType::Float) && self.bytes_per_sample == 4
    }

    /// Dimensions of `plane` for a frame of `width` x `height`.
    ///
    /// Plane 0 is always full size; later planes are reduced by the
    /// subsampling factors (rounding up, so odd sizes keep their last
    /// column/row).
    pub fn plane_dimensions(&self, plane: usize, width: usize, height: usize) -> (usize, usize) {
        if plane == 0 {
            return (width, height);
        }
        let w = (width + (1 << self.sub_sampling_w) - 1) >> self.sub_sampling_w;
        let h = (height + (1 << self.sub_sampling_h) - 1) >> self.sub_sampling_h;
        (w, h)
    }
}

impl Default for VideoFormat {
    fn default() -> Self {
        Self::rgb_s()
    }
}

/// Clip-level description handed over by the host.
///
/// `format` is `None` and `width`/`height` are 0 when the clip changes
/// format or size between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoInfo {
    /// Sample layout, if constant.
    pub format: Option<VideoFormat>,
    /// Frame width, 0 if variable.
    pub width: usize,
    /// Frame height, 0 if variable.
    pub height: usize,
}

impl VideoInfo {
    /// Constant-format clip.
    pub const fn new(format: VideoFormat, width: usize, height: usize) -> Self {
        Self {
            format: Some(format),
            width,
            height,
        }
    }

    /// Clip whose format and size vary per frame.
    pub const fn variable() -> Self {
        Self {
            format: None,
            width: 0,
            height: 0,
        }
    }

    /// Whether format and dimensions are fixed for the whole stream.
    #[inline]
    pub fn is_constant_format(&self) -> bool {
        self.format.is_some() && self.width > 0 && self.height > 0
    }

    /// Whether the clip is constant-format 32-bit float, the only input
    /// the tone-mapping filters accept.
    #[inline]
    pub fn is_constant_float32(&self) -> bool {
        self.is_constant_format() && self.format.is_some_and(|f| f.is_float32())
    }
}
