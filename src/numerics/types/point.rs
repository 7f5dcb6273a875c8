// src/numerics/types/point.rs
// Point2 is an alias for Vector2.

use super::vector::Vector2;

/// Point2 is an alias to Vector2 to represent points in the plane.
pub type Point2<T = f64> = Vector2<T>;
