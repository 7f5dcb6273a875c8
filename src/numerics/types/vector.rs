// src/numerics/types/vector.rs
// Vector2 generic implementation with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};

use super::traits::FloatingPoint;

/// Vector2 is a 2D vector; it doubles as a point through the `Point2` alias.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        Self::new(self.x / length, self.y / length)
    }

    /// Counter-clockwise quarter turn: `(x, y) -> (-y, x)`.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

// Conversions between Vector2<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_sub_neg_scale() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -5.0);

        assert_eq!(a + b, Vector2::new(5.0, -3.0));
        assert_eq!((a + b) - a, b);
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 3.0, Vector2::new(3.0, 6.0));
    }

    #[test]
    fn test_length_dot_and_normalized() {
        let v = Vector2::new(3.0_f64, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.dot(&Vector2::new(1.0, 1.0)), 7.0);

        let n = v.normalized();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_perpendicular_is_quarter_turn() {
        let v = Vector2::new(2.0_f32, 1.0);
        let p = v.perpendicular();
        assert_eq!(p, Vector2::new(-1.0, 2.0));
        assert_eq!(v.dot(&p), 0.0);
    }

    #[test]
    fn test_normalizing_zero_vector_yields_nan() {
        let n = Vector2::<f64>::zero().normalized();
        assert!(n.x.is_nan() && n.y.is_nan());
        assert!(!n.is_finite());
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vector2 = (1.0, 2.0).into();
        assert_eq!(v, Vector2::new(1.0, 2.0));

        let arr: [f64; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);

        let back: (f64, f64) = Vector2::from([7.0, 8.0]).into();
        assert_eq!(back, (7.0, 8.0));
    }
}
