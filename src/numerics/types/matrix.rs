// src/numerics/types/matrix.rs
// Square N x N matrix with owned row-major storage.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::numerics::types::traits::FloatingPoint;

/// Square matrix whose size is chosen at construction time.
///
/// Element (i, j) lives at `data[i * size + j]`, which is also its position
/// in the serialized fixture stream.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T: FloatingPoint = f64> {
    size: usize,
    data: Vec<T>,
}

impl<T: FloatingPoint> SquareMatrix<T> {
    /// Matrix of `size * size` elements, all set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` unless
    /// `data.len() == size * size`.
    pub fn from_row_major(size: usize, data: Vec<T>) -> Option<Self> {
        (size.checked_mul(size) == Some(data.len())).then_some(Self { size, data })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total element count, `size * size`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for the 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Overwrite element (row, col).
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of range for {n}x{n} matrix",
            n = self.size
        );
        self.data[row * self.size + col] = value;
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> &[T] {
        &self.data[idx * self.size..(idx + 1) * self.size]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics, and an empty matrix has no rows anyway
        self.data.chunks_exact(self.size.max(1))
    }

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Convert every element to `f32`.
    pub fn narrow(&self) -> SquareMatrix<f32> {
        SquareMatrix {
            size: self.size,
            data: self.data.iter().map(|v| v.to_f32()).collect(),
        }
    }
}

/// Print rows as fixed-width columns, two decimals, one row per line.
pub(crate) fn write_rows<'a, T, I>(f: &mut fmt::Formatter<'_>, rows: I) -> fmt::Result
where
    T: FloatingPoint + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    for row in rows {
        for v in row {
            write!(f, "{:10.2} ", v)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl<T: FloatingPoint> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows())
    }
}

#[derive(Serialize, Deserialize)]
struct RawMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> Serialize for SquareMatrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Borrowed<'a, T> {
            size: usize,
            data: &'a [T],
        }

        Borrowed {
            size: self.size,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SquareMatrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        let len = raw.data.len();
        SquareMatrix::from_row_major(raw.size, raw.data).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "matrix of size {} needs {} elements, got {}",
                raw.size,
                raw.size.saturating_mul(raw.size),
                len
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_roundtrip() {
        let m = SquareMatrix::from_row_major(2, vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();

        let config = bincode::config::standard();
        let encoded = bincode::serde::encode_to_vec(&m, config).unwrap();
        let (decoded, _): (SquareMatrix<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(m, decoded);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let raw = RawMatrix { size: 3, data: vec![0.0f64; 4] };
        let config = bincode::config::standard();
        let encoded = bincode::serde::encode_to_vec(&raw, config).unwrap();
        let result: Result<(SquareMatrix<f64>, usize), _> =
            bincode::serde::decode_from_slice(&encoded, config);
        assert!(result.is_err());
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = SquareMatrix::from_row_major(
            3,
            vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .unwrap();

        assert_eq!(m.size(), 3);
        assert_eq!(m.len(), 9);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(2, 0), Some(7.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);

        assert!(SquareMatrix::from_row_major(3, vec![0.0f64; 8]).is_none());
    }

    #[test]
    fn test_from_row_major_rejects_overflowing_size() {
        // size * size wraps to zero, which must not match an empty buffer.
        let size = 1usize << (usize::BITS / 2);
        assert!(SquareMatrix::<f32>::from_row_major(size, Vec::new()).is_none());
    }

    #[test]
    fn test_empty_matrix() {
        let m = SquareMatrix::<f64>::filled(0, 5.0);
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.to_string(), "");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut m = SquareMatrix::<f64>::filled(2, 0.0);
        m.set(2, 0, 1.0);
    }

    #[test]
    fn test_narrow_keeps_layout() {
        let mut m = SquareMatrix::<f64>::filled(2, 99999.0);
        m.set(0, 1, 1.0);
        let n = m.narrow();
        assert_eq!(n.size(), 2);
        assert_eq!(n.as_slice(), &[99999.0f32, 1.0, 99999.0, 99999.0]);
    }

    #[test]
    fn test_display_columns() {
        let m = SquareMatrix::from_row_major(2, vec![0.0f32, 1.0, 1.0, 99999.0]).unwrap();
        assert_eq!(
            m.to_string(),
            "      0.00       1.00 \n      1.00   99999.00 \n"
        );
    }
}
