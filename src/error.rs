use thiserror::Error;

/// The ways a [`Matrix`][crate::Matrix] operation can fail.
///
/// Every fallible operation reports its error synchronously and leaves all
/// involved matrices unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// A dimension of zero was requested at construction or resize time.
    #[error("matrix dimensions must be at least 1x1 (requested {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    /// An element access lay outside the current bounds.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The operand shapes are incompatible for the requested operation.
    #[error(
        "operand dimensions {left_rows}x{left_cols} and {right_rows}x{right_cols} \
         are incompatible"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A square-only operation was requested on a non-square matrix.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The matrix has a determinant of zero and no inverse.
    #[error("matrix is singular and has no inverse")]
    SingularMatrix,
}
