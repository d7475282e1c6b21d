use thiserror::Error;

/// Errors surfaced by the fixed-arity circle constructors and the 2x2 linear solve.
///
/// The enclosing circle algorithms themselves never return errors: empty, single point, and
/// collinear inputs all have well defined (degenerate) enclosing circles and are handled as
/// explicit base cases.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CircleError {
    /// A fixed-arity constructor was called with the wrong number of points. Always a programmer
    /// error in the caller, never retried.
    #[error("expected exactly {expected} points, got {actual}")]
    InvalidInputCount {
        /// Number of points the constructor requires.
        expected: usize,
        /// Number of points actually passed.
        actual: usize,
    },
    /// Attempt to invert a matrix with a numerically zero determinant.
    #[error("matrix determinant is zero, matrix cannot be inverted")]
    SingularMatrix,
    /// Three points passed to the circumcircle constructor are exactly or near-exactly
    /// collinear, no finite circumcircle exists.
    #[error("points are collinear, no finite circumcircle exists")]
    DegenerateTriple,
}
