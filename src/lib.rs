//! cepstra - Owned vector and matrix storage for a speech-processing engine,
//! with a copy-in/copy-out bridge to host numeric-array runtimes.
//!
//! The containers own their backing memory. The bridge never shares that
//! memory with the host side; it only bulk-copies across the boundary.

mod error;

mod matrix;

mod real;

mod resize;

mod vector;

pub use error::CepstraError;
pub use matrix::Matrix;
pub use real::Real;
pub use resize::ResizeMode;
pub use vector::Vector;
