//! Contiguous row-block partition of an `n`-row matrix over `p` ranks.
//!
//! Rank `id` owns rows `[id * n / p, (id + 1) * n / p)`. Block sizes differ by
//! at most one row and the last rank never gets fewer rows than the first.

use std::ops::Range;

/// First row owned by rank `id`.
pub fn block_low(id: usize, p: usize, n: usize) -> usize {
    id * n / p
}

/// Rows owned by rank `id`. Empty when `n < p` leaves the rank without rows.
pub fn block_rows(id: usize, p: usize, n: usize) -> Range<usize> {
    block_low(id, p, n)..block_low(id + 1, p, n)
}

/// Number of rows owned by rank `id`.
pub fn block_size(id: usize, p: usize, n: usize) -> usize {
    block_rows(id, p, n).len()
}

/// Rank that owns row `k`, or `None` when `k` is not a row or `p == 0`.
pub fn block_owner(k: usize, p: usize, n: usize) -> Option<usize> {
    if k >= n || p == 0 {
        return None;
    }
    Some((p * (k + 1) - 1) / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_cover_all_rows() {
        for n in 1..40 {
            for p in 1..=8 {
                let mut next = 0;
                for id in 0..p {
                    let rows = block_rows(id, p, n);
                    assert_eq!(rows.start, next);
                    next = rows.end;
                }
                assert_eq!(next, n, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn test_ten_rows_over_three_ranks() {
        assert_eq!(block_rows(0, 3, 10), 0..3);
        assert_eq!(block_rows(1, 3, 10), 3..6);
        assert_eq!(block_rows(2, 3, 10), 6..10);
        assert_eq!(block_size(2, 3, 10), 4);
    }

    #[test]
    fn test_owner_agrees_with_blocks() {
        for n in 1..40 {
            for p in 1..=8 {
                for k in 0..n {
                    let owner = block_owner(k, p, n).unwrap();
                    assert!(block_rows(owner, p, n).contains(&k), "k={k} n={n} p={p}");
                }
            }
        }
    }

    #[test]
    fn test_owner_outside_matrix() {
        assert_eq!(block_owner(0, 4, 0), None);
        assert_eq!(block_owner(10, 3, 10), None);
        assert_eq!(block_owner(0, 0, 10), None);
        assert_eq!(block_owner(9, 3, 10), Some(2));
    }

    #[test]
    fn test_more_ranks_than_rows() {
        assert_eq!(block_size(0, 4, 2), 0);
        assert_eq!(block_size(1, 4, 2), 1);
        assert_eq!(block_size(3, 4, 2), 1);
    }
}
