use std::fmt;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::{FixtureError, Result};
use crate::io::codec::{self, ELEMENT_BYTES};
use crate::io::partition;
use crate::numerics::types::matrix::write_rows;
use crate::numerics::SquareMatrix;

/// Byte length of an `n x n` fixture, or `None` if it does not fit in `u64`.
pub fn fixture_len(n: usize) -> Option<u64> {
    let n = n as u64;
    n.checked_mul(n)?.checked_mul(ELEMENT_BYTES as u64)
}

/// Element count of an `n x n` fixture, or `None` if it does not fit in `usize`.
pub fn element_count(n: usize) -> Option<usize> {
    n.checked_mul(n)
}

/// Side length of the square matrix stored in `bytes` bytes.
pub fn infer_size(bytes: u64) -> Result<usize> {
    let element = ELEMENT_BYTES as u64;
    if bytes % element != 0 {
        return Err(FixtureError::NotSquare { bytes });
    }

    let count = bytes / element;
    let mut n = (count as f64).sqrt() as u64;
    while n * n > count {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= count {
        n += 1;
    }

    if n * n == count {
        Ok(n as usize)
    } else {
        Err(FixtureError::NotSquare { bytes })
    }
}

/// Read a whole fixture, inferring its size from the file length.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SquareMatrix<f32>> {
    let file = File::open(path.as_ref())?;
    let n = infer_size(file.metadata()?.len())?;
    decode_matrix(file, n)
}

/// Read a whole fixture that must be exactly `n x n`.
pub fn read_matrix_sized<P: AsRef<Path>>(path: P, n: usize) -> Result<SquareMatrix<f32>> {
    let file = open_checked(path.as_ref(), n)?;
    decode_matrix(file, n)
}

fn open_checked(path: &Path, n: usize) -> Result<File> {
    let (Some(expected), Some(_)) = (fixture_len(n), element_count(n)) else {
        return Err(FixtureError::TooLarge { size: n });
    };
    let file = File::open(path)?;
    let actual = file.metadata()?.len();
    if actual != expected {
        return Err(FixtureError::SizeMismatch { expected, actual });
    }
    Ok(file)
}

fn decode_matrix(file: File, n: usize) -> Result<SquareMatrix<f32>> {
    let count = element_count(n).ok_or(FixtureError::TooLarge { size: n })?;
    let mut reader = BufReader::new(file);
    let data = codec::decode_from(&mut reader, count)?;
    debug!(size = n, "decoded matrix fixture");
    SquareMatrix::from_row_major(n, data)
        .ok_or_else(|| FixtureError::Decode(format!("expected {count} elements")))
}

/// Rows of an `n x n` fixture owned by one rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock {
    pub rank: usize,
    pub ranks: usize,
    /// Index of the first row in the full matrix.
    pub first_row: usize,
    /// Row length, i.e. the full matrix size.
    pub cols: usize,
    pub data: Vec<f32>,
}

impl RowBlock {
    /// Number of rows held.
    pub fn row_count(&self) -> usize {
        if self.cols == 0 { 0 } else { self.data.len() / self.cols }
    }

    /// Local row `idx` (0-based within the block).
    pub fn row(&self, idx: usize) -> &[f32] {
        &self.data[idx * self.cols..(idx + 1) * self.cols]
    }

    /// Iterate the held rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Element at global coordinates (row, col), if this block holds it.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        let local = row.checked_sub(self.first_row)?;
        if local < self.row_count() && col < self.cols {
            Some(self.data[local * self.cols + col])
        } else {
            None
        }
    }
}

impl fmt::Display for RowBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows())
    }
}

/// Read only the rows `rank` owns out of `ranks`, seeking past the rest.
pub fn read_row_block<P: AsRef<Path>>(
    path: P,
    n: usize,
    rank: usize,
    ranks: usize,
) -> Result<RowBlock> {
    if ranks == 0 || rank >= ranks {
        return Err(FixtureError::InvalidPartition { rank, ranks });
    }

    let mut file = open_checked(path.as_ref(), n)?;
    let rows = partition::block_rows(rank, ranks, n);
    debug!(rank, ranks, first = rows.start, last = rows.end, "reading row block");

    let offset = (rows.start as u64) * (n as u64) * ELEMENT_BYTES as u64;
    file.seek(SeekFrom::Start(offset))?;

    let mut reader = BufReader::new(file);
    let data = codec::decode_from(&mut reader, rows.len() * n)?;

    Ok(RowBlock {
        rank,
        ranks,
        first_row: rows.start,
        cols: n,
        data,
    })
}
