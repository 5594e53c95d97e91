//! Copy-in/copy-out bridge between a host numeric-array runtime and
//! [`Matrix`] storage. Host buffers are always packed (stride == cols);
//! owned rows may be padded, so the copy falls back to row-by-row when the
//! stride does not match the column count.

use log::{debug, trace};

use crate::{matrix::Matrix, real::Real, resize::ResizeMode};

impl<R: Real> Matrix<R> {
    /// Replace the matrix's contents with a copy of the packed row-major
    /// buffer `src`, reallocating to (`rows`, `cols`) first if the shape
    /// differs. The host runtime can hand over (x, 0) or (0, x) shapes; those
    /// are not representable here and collapse to (0, 0).
    pub fn set_data(&mut self, src: &[R], rows: usize, cols: usize) {
        if (rows == 0) != (cols == 0) {
            return self.set_data(&[], 0, 0);
        }
        assert_eq!(src.len(), rows * cols, "packed source length mismatch");
        if self.rows != rows || self.cols != cols {
            debug!(
                "matrix reallocated for host copy: ({}, {}) -> ({}, {})",
                self.rows, self.cols, rows, cols
            );
            self.resize(rows, cols, ResizeMode::Undefined);
        }
        if self.stride == cols {
            self.data[..rows * cols].copy_from_slice(src);
        } else {
            for r in 0..rows {
                self.data[r * self.stride..r * self.stride + cols]
                    .copy_from_slice(&src[r * cols..(r + 1) * cols]);
            }
        }
    }

    /// Copy the matrix's contents into the packed row-major buffer `dst`.
    /// A zero-element request succeeds exactly when the matrix itself is
    /// empty. Any other shape mismatch returns false without touching `dst`;
    /// there are no partial copies.
    pub fn read_data_into(&self, rows: usize, cols: usize, dst: &mut [R]) -> bool {
        assert_eq!(dst.len(), rows * cols, "packed destination length mismatch");
        if rows * cols == 0 {
            return self.is_empty();
        }
        if self.rows != rows || self.cols != cols {
            trace!(
                "host read rejected: matrix is ({}, {}), destination wants ({}, {})",
                self.rows, self.cols, rows, cols
            );
            return false;
        }
        if self.stride == cols {
            dst.copy_from_slice(&self.data[..rows * cols]);
        } else {
            for r in 0..rows {
                dst[r * cols..(r + 1) * cols]
                    .copy_from_slice(&self.data[r * self.stride..r * self.stride + cols]);
            }
        }
        true
    }

    /// Raw-pointer entry point for [`Matrix::set_data`].
    ///
    /// Safety: `src` must be valid for reads of `rows * cols` elements. It is
    /// not inspected when `rows * cols` is zero.
    pub unsafe fn set_data_ptr(&mut self, src: *const R, rows: usize, cols: usize) {
        if rows * cols == 0 {
            self.set_data(&[], rows, cols);
            return;
        }
        let src = unsafe { std::slice::from_raw_parts(src, rows * cols) };
        self.set_data(src, rows, cols);
    }

    /// Raw-pointer entry point for [`Matrix::read_data_into`].
    ///
    /// Safety: `dst` must be valid for writes of `rows * cols` elements. It
    /// is not inspected when `rows * cols` is zero.
    pub unsafe fn read_data_into_ptr(&self, rows: usize, cols: usize, dst: *mut R) -> bool {
        if rows * cols == 0 {
            return self.read_data_into(rows, cols, &mut []);
        }
        let dst = unsafe { std::slice::from_raw_parts_mut(dst, rows * cols) };
        self.read_data_into(rows, cols, dst)
    }
}
