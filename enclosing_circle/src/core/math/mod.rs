//! Core/common math types for working in 2D space.
mod matrix2;
mod vector2;

pub use matrix2::Matrix2;
pub use vector2::{vec2, Vector2};
