//! Copy-in/copy-out bridge between a host numeric-array runtime and
//! [`Vector`] storage. The host buffer and the owned storage never alias;
//! every crossing is a bulk copy.

use log::{debug, trace};

use crate::{real::Real, resize::ResizeMode, vector::Vector};

impl<R: Real> Vector<R> {
    /// Replace the vector's contents with a copy of `src`, reallocating to
    /// `src.len()` first if the lengths differ. Previous contents do not
    /// survive a length change.
    pub fn set_data(&mut self, src: &[R]) {
        if self.data.len() != src.len() {
            debug!(
                "vector reallocated for host copy: {} -> {} elements",
                self.data.len(),
                src.len()
            );
            self.resize(src.len(), ResizeMode::Undefined);
        }
        self.data.copy_from_slice(src);
    }

    /// Copy the vector's contents into `dst`. Returns false without touching
    /// `dst` when the lengths do not match; there are no partial copies.
    pub fn read_data_into(&self, dst: &mut [R]) -> bool {
        if self.data.len() != dst.len() {
            trace!(
                "host read rejected: vector has {} elements, destination wants {}",
                self.data.len(),
                dst.len()
            );
            return false;
        }
        if dst.is_empty() {
            return true;
        }
        dst.copy_from_slice(&self.data);
        true
    }

    /// Raw-pointer entry point for [`Vector::set_data`].
    ///
    /// Safety: `src` must be valid for reads of `len` elements. It is not
    /// inspected when `len` is zero.
    pub unsafe fn set_data_ptr(&mut self, src: *const R, len: usize) {
        if len == 0 {
            self.set_data(&[]);
            return;
        }
        let src = unsafe { std::slice::from_raw_parts(src, len) };
        self.set_data(src);
    }

    /// Raw-pointer entry point for [`Vector::read_data_into`].
    ///
    /// Safety: `dst` must be valid for writes of `len` elements. It is not
    /// inspected when `len` is zero.
    pub unsafe fn read_data_into_ptr(&self, len: usize, dst: *mut R) -> bool {
        if len == 0 {
            return self.read_data_into(&mut []);
        }
        let dst = unsafe { std::slice::from_raw_parts_mut(dst, len) };
        self.read_data_into(dst)
    }
}
