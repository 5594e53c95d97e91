/// How existing contents are treated when a container changes size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeMode {
    /// Contents after the resize are unspecified.
    Undefined,
    /// Every element is zeroed.
    SetZero,
    /// The overlapping prefix (vector) or top-left block (matrix) survives,
    /// the rest is zeroed.
    CopyData,
}
