use super::{vec2, Vector2};
use crate::core::traits::Real;
use crate::errors::CircleError;

/// A 2x2 matrix stored as two rows, used to solve the 2x2 linear system that locates a
/// circumcircle's center.
///
/// Invertible iff its determinant is non zero (the determinant is fuzzy compared against zero
/// since an exactly zero determinant is rarely produced by floating point inputs).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix2<T = f64> {
    pub a: [[T; 2]; 2],
}

impl<T> Matrix2<T>
where
    T: Real,
{
    /// Create a new matrix from row major components.
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Matrix2 {
            a: [[m00, m01], [m10, m11]],
        }
    }

    /// Create a new matrix from two row vectors.
    pub fn from_rows(r0: Vector2<T>, r1: Vector2<T>) -> Self {
        Matrix2::new(r0.x, r0.y, r1.x, r1.y)
    }

    /// Determinant of the matrix.
    pub fn determinant(&self) -> T {
        self.a[0][0] * self.a[1][1] - self.a[0][1] * self.a[1][0]
    }

    /// Inverse of the matrix.
    ///
    /// Returns [CircleError::SingularMatrix] if the determinant is numerically zero (for the
    /// circumcircle solve this corresponds to three collinear points).
    pub fn inverse(&self) -> Result<Self, CircleError> {
        let det = self.determinant();
        if det.fuzzy_eq_zero() {
            return Err(CircleError::SingularMatrix);
        }

        Ok(Matrix2::new(
            self.a[1][1] / det,
            -self.a[0][1] / det,
            -self.a[1][0] / det,
            self.a[0][0] / det,
        ))
    }

    /// Matrix-vector product.
    pub fn mul_vector(&self, v: Vector2<T>) -> Vector2<T> {
        vec2(
            self.a[0][0] * v.x + self.a[0][1] * v.y,
            self.a[1][0] * v.x + self.a[1][1] * v.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips() {
        let m = Matrix2::new(2.0, 1.0, 1.0, 3.0);
        let inv = m.inverse().unwrap();
        let v = vec2(4.0, -2.0);
        assert!(m.mul_vector(inv.mul_vector(v)).fuzzy_eq(v));
        assert!(inv.mul_vector(m.mul_vector(v)).fuzzy_eq(v));
    }

    #[test]
    fn singular_matrix_errors() {
        // second row is a multiple of the first
        let m = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.inverse(), Err(CircleError::SingularMatrix));
    }
}
