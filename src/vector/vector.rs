use crate::{real::Real, resize::ResizeMode};

/// Numeric vector with dynamic length. Owns its backing storage; the stored
/// length always equals the logically addressable element count.
pub struct Vector<R: Real> {
    pub(super) data: Vec<R>,
}

impl<R: Real> Vector<R> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_len(len: usize, mode: ResizeMode) -> Self {
        let mut v = Self::new();
        v.resize(len, mode);
        v
    }

    pub fn from_vec(data: Vec<R>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<R>()
    }

    pub fn as_slice(&self) -> &[R] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [R] {
        self.data.as_mut_slice()
    }

    pub fn as_ptr(&self) -> *const R {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut R {
        self.data.as_mut_ptr()
    }

    /// Change the length. `Undefined` keeps whatever happens to be there;
    /// only the guarantee differs from `CopyData`.
    pub fn resize(&mut self, len: usize, mode: ResizeMode) {
        match mode {
            ResizeMode::Undefined | ResizeMode::CopyData => self.data.resize(len, R::ZERO),
            ResizeMode::SetZero => {
                self.data.clear();
                self.data.resize(len, R::ZERO);
            }
        }
    }
}

impl<R: Real> Default for Vector<R> {
    fn default() -> Self {
        Self::new()
    }
}
