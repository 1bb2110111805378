// src/numerics/types/traits.rs
// FloatingPoint element trait for the matrix types.

/// FloatingPoint is the element bound used by `SquareMatrix`.
///
/// Note: `zero` and `one` are the diagonal and edge weights of an adjacency
/// matrix; `to_f32` is a narrowing conversion for `f64` (round-to-nearest),
/// and the identity for `f32`.
pub trait FloatingPoint:
Copy + PartialEq + PartialOrd + core::fmt::Debug + core::fmt::Display
{
    fn zero() -> Self;
    fn one() -> Self;
    fn to_f32(self) -> f32;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn to_f32(self) -> f32 { self }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn to_f32(self) -> f32 { self as f32 }
}
