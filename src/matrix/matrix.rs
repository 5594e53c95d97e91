use crate::{error::CepstraError, real::Real, resize::ResizeMode};

/// Row starts are kept on 16-byte boundaries for SIMD-friendly access.
const ROW_ALIGN_BYTES: usize = 16;

/// Smallest aligned stride for a row of `cols` elements.
fn aligned_stride<R: Real>(cols: usize) -> usize {
    if cols == 0 {
        return 0;
    }
    let per_align = ROW_ALIGN_BYTES / std::mem::size_of::<R>();
    cols.div_ceil(per_align) * per_align
}

/// Row-major numeric matrix with dynamic shape. Owns its backing storage.
/// Rows may be padded: element (r, c) lives at `r * stride + c`, with
/// `stride >= cols`, and the storage holds `rows * stride` elements.
#[derive(Debug)]
pub struct Matrix<R: Real> {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) stride: usize,
    pub(super) data: Vec<R>,
}

impl<R: Real> Matrix<R> {
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            stride: 0,
            data: Vec::new(),
        }
    }

    pub fn with_shape(rows: usize, cols: usize, mode: ResizeMode) -> Self {
        let mut m = Self::new();
        m.resize(rows, cols, mode);
        m
    }

    /// Build a matrix with an explicit (possibly larger) row stride, zeroed.
    pub fn with_stride(rows: usize, cols: usize, stride: usize) -> Result<Self, CepstraError> {
        if stride < cols {
            return Err(CepstraError::StrideTooSmall { stride, cols });
        }
        assert!(
            (rows == 0) == (cols == 0),
            "matrix shape must be fully empty or fully non-empty"
        );
        Ok(Self {
            rows,
            cols,
            stride,
            data: vec![R::ZERO; rows * stride],
        })
    }

    /// Build a matrix from a packed (stride == cols) row-major buffer.
    pub fn from_packed(rows: usize, cols: usize, data: Vec<R>) -> Result<Self, CepstraError> {
        let required = rows * cols;
        if data.len() != required {
            return Err(CepstraError::PackedShapeMismatch {
                len: data.len(),
                rows,
                cols,
                required,
            });
        }
        let mut m = Self::new();
        m.set_data(&data, rows, cols);
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<R>()
    }

    pub fn row(&self, r: usize) -> &[R] {
        assert!(r < self.rows, "row {} out of bounds ({} rows)", r, self.rows);
        &self.data[r * self.stride..r * self.stride + self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [R] {
        assert!(r < self.rows, "row {} out of bounds ({} rows)", r, self.rows);
        &mut self.data[r * self.stride..r * self.stride + self.cols]
    }

    pub fn as_ptr(&self) -> *const R {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut R {
        self.data.as_mut_ptr()
    }

    /// Change the shape. The stride is recomputed for the new column count.
    /// Shapes with exactly one zero dimension are not representable; the
    /// host bridge normalises those before calling in here.
    pub fn resize(&mut self, rows: usize, cols: usize, mode: ResizeMode) {
        assert!(
            (rows == 0) == (cols == 0),
            "matrix shape must be fully empty or fully non-empty"
        );
        if rows == self.rows && cols == self.cols && mode != ResizeMode::SetZero {
            return;
        }
        let stride = aligned_stride::<R>(cols);
        match mode {
            ResizeMode::Undefined => {
                // contents unspecified; leftover values from the old layout
                // may show through
                self.data.resize(rows * stride, R::ZERO);
            }
            ResizeMode::SetZero => {
                self.data.clear();
                self.data.resize(rows * stride, R::ZERO);
            }
            ResizeMode::CopyData => {
                let mut next = vec![R::ZERO; rows * stride];
                let keep_rows = rows.min(self.rows);
                let keep_cols = cols.min(self.cols);
                for r in 0..keep_rows {
                    next[r * stride..r * stride + keep_cols]
                        .copy_from_slice(&self.data[r * self.stride..r * self.stride + keep_cols]);
                }
                self.data = next;
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.stride = stride;
    }

    /// Copy out into a fresh packed (stride == cols) row-major buffer.
    pub fn to_packed(&self) -> Vec<R> {
        let mut out = vec![R::ZERO; self.num_elements()];
        let ok = self.read_data_into(self.rows, self.cols, &mut out);
        debug_assert!(ok);
        out
    }
}

impl<R: Real> Default for Matrix<R> {
    fn default() -> Self {
        Self::new()
    }
}
