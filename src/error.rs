use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepstraError {
    #[error("packed buffer holds {len} elements, shape ({rows}, {cols}) requires {required}")]
    PackedShapeMismatch {
        len: usize,
        rows: usize,
        cols: usize,
        required: usize,
    },

    #[error("stride {stride} is smaller than column count {cols}")]
    StrideTooSmall { stride: usize, cols: usize },
}
