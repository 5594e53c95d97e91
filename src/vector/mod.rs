mod host;
mod vector;
pub use vector::Vector;
