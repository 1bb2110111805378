//! Fixture file I/O.
//!
//! The on-disk format is `n * n` native-endian `f32` values in row-major
//! order; element (i, j) starts at byte `(i * n + j) * 4`.

pub mod codec;
pub mod partition;
pub mod reader;
pub mod writer;

pub use reader::{read_matrix, read_matrix_sized, read_row_block, RowBlock};
pub use writer::{write_matrix, write_matrix_to};
