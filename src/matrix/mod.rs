mod host;
mod matrix;
pub use matrix::Matrix;
