// src/numerics/types/matrix.rs
// Matrix2x2: closed-form 2x2 real matrix algebra.
// Decompositions live in crate::numerics::decomposition.

use core::ops::{Add, Mul, Sub};

use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector2;

/// A 2x2 real matrix addressed as `values[row][col]`.
///
/// The matrix is read as a linear map of the plane: column 0 is the image of
/// `(1, 0)` and column 1 is the image of `(0, 1)`.
///
/// Every value-returning operation leaves the receiver untouched. The only
/// in-place mutators are [`Matrix2x2::rotate`], [`Matrix2x2::set`] and
/// [`Matrix2x2::set_column`], plus direct writes to `values`.
///
/// Degenerate input is never an error: a singular matrix inverts to
/// infinities/NaN, complex eigenvalues come out as NaN. Use
/// [`Matrix2x2::is_finite`] before consuming a result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2x2<T: FloatingPoint = f64> {
    pub values: [[T; 2]; 2],
}

/// The shared identity matrix.
///
/// This is a `const`, so each use site gets its own copy and in-place
/// operations on it can never leak into other users.
pub const IDENTITY: Matrix2x2<f64> = Matrix2x2::new([[1.0, 0.0], [0.0, 1.0]]);

impl<T: FloatingPoint> Matrix2x2<T> {
    pub const fn new(values: [[T; 2]; 2]) -> Self {
        Self { values }
    }

    /// Construct a matrix from the images of the two basis vectors.
    pub fn from_columns(c0: Vector2<T>, c1: Vector2<T>) -> Self {
        Self::new([[c0.x, c1.x], [c0.y, c1.y]])
    }

    pub fn zero() -> Self {
        Self::new([[T::zero(); 2]; 2])
    }

    /// A fresh identity matrix, free to be mutated by the caller.
    pub fn identity() -> Self {
        Self::diagonal(T::one(), T::one())
    }

    pub fn diagonal(d0: T, d1: T) -> Self {
        Self::new([[d0, T::zero()], [T::zero(), d1]])
    }

    /// Rotation `[[cos, -sin], [sin, cos]]`. The pair is not normalized.
    pub fn rotation(cos_theta: T, sin_theta: T) -> Self {
        Self::new([[cos_theta, -sin_theta], [sin_theta, cos_theta]])
    }

    /// Counter-clockwise rotation by `theta` radians.
    pub fn from_angle(theta: T) -> Self {
        Self::rotation(theta.cos(), theta.sin())
    }

    pub fn row(&self, idx: usize) -> [T; 2] {
        self.values[idx]
    }

    pub fn column(&self, idx: usize) -> Vector2<T> {
        Vector2::new(self.values[0][idx], self.values[1][idx])
    }

    pub fn set_column(&mut self, idx: usize, column: Vector2<T>) {
        self.values[0][idx] = column.x;
        self.values[1][idx] = column.y;
    }

    /// Apply the matrix to a point.
    pub fn translate(&self, point: impl Into<Vector2<T>>) -> Vector2<T> {
        let point = point.into();
        Vector2::new(
            self.translate_x(point.x, point.y),
            self.translate_y(point.x, point.y),
        )
    }

    /// X coordinate of the image of `(x, y)`.
    #[inline]
    pub fn translate_x(&self, x: T, y: T) -> T {
        self.values[0][0] * x + self.values[0][1] * y
    }

    /// Y coordinate of the image of `(x, y)`.
    #[inline]
    pub fn translate_y(&self, x: T, y: T) -> T {
        self.values[1][0] * x + self.values[1][1] * y
    }

    /// Replace this matrix's values with a copy of `other`'s.
    ///
    /// The two matrices stay independent afterwards: later mutation of
    /// either one does not affect the other.
    pub fn set(&mut self, other: &Self) {
        self.values = other.values;
    }

    pub fn transpose(&self) -> Self {
        let v = &self.values;
        Self::new([[v[0][0], v[1][0]], [v[0][1], v[1][1]]])
    }

    /// Pre-multiply in place by the rotation `[[cos, -sin], [sin, cos]]`.
    ///
    /// `(cos, sin)` is expected to be a unit vector; it is not checked.
    pub fn rotate(&mut self, cos_theta: T, sin_theta: T) {
        for col in 0..2 {
            let x = self.values[0][col];
            let y = self.values[1][col];
            self.values[0][col] = x * cos_theta - y * sin_theta;
            self.values[1][col] = x * sin_theta + y * cos_theta;
        }
    }

    pub fn det(&self) -> T {
        let v = &self.values;
        v[0][0] * v[1][1] - v[1][0] * v[0][1]
    }

    pub fn trace(&self) -> T {
        self.values[0][0] + self.values[1][1]
    }

    /// `trace^2 / 4 - det`. Negative when the eigenvalues are complex.
    pub fn discriminant(&self) -> T {
        let half_trace = self.trace() / T::two();
        half_trace * half_trace - self.det()
    }

    /// Matrix product `self * other`.
    pub fn dot(&self, other: &Self) -> Self {
        let a = &self.values;
        let b = &other.values;
        Self::new([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
            ],
        ])
    }

    /// Closed-form inverse `1/det * [[d, -b], [-c, a]]`.
    ///
    /// A singular matrix gives infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let [[a, b], [c, d]] = self.values;
        let det = self.det();
        Self::new([[d / det, -b / det], [-c / det, a / det]])
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().flatten().all(|value| value.is_finite())
    }
}

impl<T: FloatingPoint> Default for Matrix2x2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> From<[[T; 2]; 2]> for Matrix2x2<T> {
    fn from(values: [[T; 2]; 2]) -> Self {
        Self::new(values)
    }
}

impl<T: FloatingPoint> Add for Matrix2x2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.values;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.values[i][j] + other.values[i][j];
            }
        }
        Matrix2x2 { values: result }
    }
}

impl<T: FloatingPoint> Sub for Matrix2x2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.values;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.values[i][j] - other.values[i][j];
            }
        }
        Matrix2x2 { values: result }
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix2x2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        let mut result = self.values;
        for row in result.iter_mut() {
            for value in row.iter_mut() {
                *value = *value * scalar;
            }
        }
        Matrix2x2 { values: result }
    }
}

impl<T: FloatingPoint> Mul<Vector2<T>> for Matrix2x2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.translate(rhs)
    }
}

impl<T: FloatingPoint> Mul<Matrix2x2<T>> for Matrix2x2<T> {
    type Output = Matrix2x2<T>;

    fn mul(self, rhs: Matrix2x2<T>) -> Matrix2x2<T> {
        self.dot(&rhs)
    }
}
