//! Path-graph adjacency fixture.
//!
//! Vertex `i` is joined to `i - 1` and `i + 1` with weight 1, has distance 0
//! to itself, and every other pair holds the "unreachable" sentinel.

use std::fmt;

use tracing::debug;

use crate::numerics::{FloatingPoint, SquareMatrix};

/// Side length used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 10;

/// Value on the main diagonal.
pub const DIAGONAL: f64 = 0.0;

/// Value on the first super- and sub-diagonals.
pub const ADJACENT: f64 = 1.0;

/// Value everywhere else.
pub const SENTINEL: f64 = 99999.0;

/// Build the `n x n` fixture in `f64`.
///
/// The matrix is first filled with [`SENTINEL`], then the diagonal and the
/// two neighbouring diagonals are overwritten. `n == 0` gives an empty matrix.
pub fn build(n: usize) -> SquareMatrix<f64> {
    build_with(n, SENTINEL)
}

/// Build the fixture in any element type: `T::zero()` on the diagonal,
/// `T::one()` beside it, `sentinel` everywhere else.
pub fn build_with<T: FloatingPoint>(n: usize, sentinel: T) -> SquareMatrix<T> {
    let mut m = SquareMatrix::filled(n, sentinel);

    for i in 0..n {
        m.set(i, i, T::zero());
    }

    for i in 0..n.saturating_sub(1) {
        m.set(i + 1, i, T::one());
        m.set(i, i + 1, T::one());
    }

    debug!(size = n, elements = m.len(), "built fixture matrix");
    m
}

/// The value the fill rule assigns to (row, col).
pub fn expected(row: usize, col: usize) -> f64 {
    if row == col {
        DIAGONAL
    } else if row.abs_diff(col) == 1 {
        ADJACENT
    } else {
        SENTINEL
    }
}

/// First element that disagrees with the fill rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub expected: f32,
    pub found: f32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element ({}, {}) is {}, expected {}",
            self.row, self.col, self.found, self.expected
        )
    }
}

impl std::error::Error for Mismatch {}

/// Check a decoded fixture against the fill rule, scanning in row-major order.
pub fn verify(m: &SquareMatrix<f32>) -> Result<(), Mismatch> {
    for (row, values) in m.rows().enumerate() {
        for (col, &found) in values.iter().enumerate() {
            let expected = expected(row, col) as f32;
            if found.to_bits() != expected.to_bits() {
                return Err(Mismatch { row, col, expected, found });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_rule() {
        let m = build(DEFAULT_SIZE);
        assert_eq!(m.size(), 10);
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(m.get(i, j), Some(expected(i, j)), "at ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_build_small_sizes() {
        assert!(build(0).is_empty());
        assert_eq!(build(1).as_slice(), &[0.0]);
        assert_eq!(build(2).as_slice(), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            build(3).as_slice(),
            &[0.0, 1.0, SENTINEL, 1.0, 0.0, 1.0, SENTINEL, 1.0, 0.0]
        );
    }

    #[test]
    fn test_rule_constants_match_element_identities() {
        assert_eq!(DIAGONAL, f64::zero());
        assert_eq!(ADJACENT, f64::one());
    }

    #[test]
    fn test_build_with_f32_matches_narrowed_build() {
        for n in [0, 1, 4, 10] {
            assert_eq!(build_with(n, SENTINEL as f32), build(n).narrow());
        }
    }

    #[test]
    fn test_verify_accepts_fixture() {
        for n in [0, 1, 2, 10, 33] {
            assert_eq!(verify(&build(n).narrow()), Ok(()));
        }
    }

    #[test]
    fn test_verify_reports_first_mismatch() {
        let mut m = build(5).narrow();
        m.set(3, 0, 1.0);
        m.set(4, 4, 2.0);

        let err = verify(&m).unwrap_err();
        assert_eq!(
            err,
            Mismatch { row: 3, col: 0, expected: 99999.0, found: 1.0 }
        );
        assert_eq!(err.to_string(), "element (3, 0) is 1, expected 99999");
    }

    #[test]
    fn test_verify_rejects_negative_zero() {
        let mut m = build(2).narrow();
        m.set(0, 0, -0.0);
        assert!(verify(&m).is_err());
    }
}
