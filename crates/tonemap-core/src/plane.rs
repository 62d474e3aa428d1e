//! Borrowed, strided views over single-channel `f32` planes.
//!
//! The host allocates frames; a plane here is only a window onto that
//! memory: `height` rows of `width` visible samples, consecutive rows
//! `stride` samples apart. Samples between `width` and `stride` are padding
//! and are never read or written.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_core::plane::{Plane, PlaneMut};
//!
//! // 2x2 plane with one padding sample per row
//! let src = [0.1_f32, 0.2, -1.0, 0.3, 0.4, -1.0];
//! let plane = Plane::new(&src, 2, 2, 3).unwrap();
//! assert_eq!(plane.get(1, 1), Some(0.4));
//!
//! let rows: Vec<&[f32]> = plane.rows().collect();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1], &[0.3_f32, 0.4]);
//!
//! let mut dst = [0.0_f32; 4];
//! let out = PlaneMut::packed(&mut dst, 2, 2).unwrap();
//! assert_eq!(out.stride(), 2);
//! ```

use crate::error::{Error, Result};

/// Checks that `got` samples cover a `width` x `height` plane with `stride`.
///
/// The last row needs only `width` samples, so hosts may hand over
/// buffers without trailing padding.
fn check_len(width: usize, height: usize, stride: usize, got: usize) -> Result<()> {
    if stride < width {
        return Err(Error::InvalidStride { stride, width });
    }
    if height == 0 {
        return Ok(());
    }
    // overflow: no slice can be large enough
    let needed = stride
        .checked_mul(height - 1)
        .and_then(|v| v.checked_add(width))
        .ok_or(Error::InsufficientData {
            needed: usize::MAX,
            got,
        })?;
    if got < needed {
        return Err(Error::InsufficientData { needed, got });
    }
    Ok(())
}

/// Read-only plane view.
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Plane<'a> {
    /// Creates a view, validating stride and slice length.
    ///
    /// `stride` is in samples, not bytes.
    pub fn new(data: &'a [f32], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_len(width, height, stride, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a view over tightly packed rows (`stride == width`).
    pub fn packed(data: &'a [f32], width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, width)
    }

    /// Visible samples per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Distance between row starts, in samples.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Underlying slice, padding included.
    #[inline]
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    /// Iterates the visible part of every row.
    pub fn rows(&self) -> impl Iterator<Item = &'a [f32]> + 'a {
        let width = self.width;
        self.data
            .chunks(self.stride.max(1))
            .take(self.height)
            .map(move |row| &row[..width])
    }

    /// Copies the visible samples into a packed vector.
    pub fn to_vec(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }
}

/// Writable plane view.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [f32],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PlaneMut<'a> {
    /// Creates a view, validating stride and slice length.
    pub fn new(data: &'a mut [f32], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_len(width, height, stride, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a view over tightly packed rows (`stride == width`).
    pub fn packed(data: &'a mut [f32], width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, width)
    }

    /// Visible samples per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Distance between row starts, in samples.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Read-only view of the same plane.
    pub fn as_plane(&self) -> Plane<'_> {
        Plane {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Underlying slice, padding included.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.as_plane().get(x, y)
    }

    /// Iterates the visible part of every row, mutably.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f32]> + '_ {
        let width = self.width;
        self.data
            .chunks_mut(self.stride.max(1))
            .take(self.height)
            .map(move |row| &mut row[..width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_narrower_than_width() {
        let data = [0.0_f32; 8];
        let err = Plane::new(&data, 4, 2, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidStride { stride: 3, width: 4 }));
    }

    #[test]
    fn test_last_row_without_padding() {
        // 2 rows, stride 4, width 3: needs 4 + 3 = 7 samples
        let data = [0.0_f32; 7];
        assert!(Plane::new(&data, 3, 2, 4).is_ok());

        let short = [0.0_f32; 6];
        let err = Plane::new(&short, 3, 2, 4).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { needed: 7, got: 6 }));
    }

    #[test]
    fn test_overflowing_size_reports_slice_len() {
        let data = [0.0_f32; 4];
        let err = Plane::new(&data, 2, usize::MAX, usize::MAX / 2).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData { needed: usize::MAX, got: 4 }
        ));
    }

    #[test]
    fn test_rows_skip_padding() {
        let data = [1.0_f32, 2.0, 9.0, 3.0, 4.0];
        let plane = Plane::new(&data, 2, 2, 3).unwrap();
        assert_eq!(plane.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(plane.get(2, 0), None);
        assert_eq!(plane.get(0, 2), None);
    }

    #[test]
    fn test_rows_mut_leaves_padding() {
        let mut data = [0.0_f32, 0.0, 7.0, 0.0, 0.0, 7.0];
        {
            let mut plane = PlaneMut::new(&mut data, 2, 2, 3).unwrap();
            for row in plane.rows_mut() {
                row.fill(1.0);
            }
        }
        assert_eq!(data, [1.0, 1.0, 7.0, 1.0, 1.0, 7.0]);
    }

    #[test]
    fn test_empty_plane() {
        let data: [f32; 0] = [];
        let plane = Plane::packed(&data, 0, 0).unwrap();
        assert_eq!(plane.rows().count(), 0);
        assert!(plane.to_vec().is_empty());
    }
}
