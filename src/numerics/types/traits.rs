// src/numerics/types/traits.rs
// FloatingPoint scalar trait used by the numerics types.

use core::fmt::Debug;

/// FloatingPoint is the scalar trait behind `Vector2` and `Matrix2x2`.
///
/// Besides the arithmetic operators it exposes the handful of transcendental
/// functions the closed-form 2x2 formulas need. Every method follows IEEE-754
/// semantics: nothing here panics, degenerate input yields NaN or infinity.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;

    /// Lossy conversion from an `f64` constant.
    fn from_f64(value: f64) -> Self;

    fn epsilon() -> Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// Four-quadrant arctangent of `self / x`; `atan2(0, 0) == 0`.
    fn atan2(self, x: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn two() -> Self { 2.0 }
            fn from_f64(value: f64) -> Self { value as $t }
            fn epsilon() -> Self { <$t>::EPSILON }
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn abs(self) -> Self { <$t>::abs(self) }
            fn sin(self) -> Self { <$t>::sin(self) }
            fn cos(self) -> Self { <$t>::cos(self) }
            fn atan2(self, x: Self) -> Self { <$t>::atan2(self, x) }
            fn hypot(self, other: Self) -> Self { <$t>::hypot(self, other) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn is_nan(self) -> bool { <$t>::is_nan(self) }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
