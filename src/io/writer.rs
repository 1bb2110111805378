use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::io::codec;
use crate::numerics::{FloatingPoint, SquareMatrix};

/// Narrow `matrix` to `f32` and stream it into `writer` in row-major order.
///
/// Returns the number of bytes written. The writer is not flushed.
pub fn write_matrix_to<T, W>(writer: &mut W, matrix: &SquareMatrix<T>) -> Result<usize>
where
    T: FloatingPoint,
    W: Write,
{
    let narrowed = matrix.narrow();
    codec::encode_into(narrowed.as_slice(), writer)
}

/// Create (or truncate) `path` and write `matrix` to it.
///
/// Any I/O failure while opening, writing or flushing is returned as
/// [`FixtureError::Io`](crate::error::FixtureError::Io) unchanged. The file
/// handle is closed on every return path.
pub fn write_matrix<T, P>(path: P, matrix: &SquareMatrix<T>) -> Result<()>
where
    T: FloatingPoint,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), size = matrix.size(), "opening fixture for writing");

    let mut writer = BufWriter::new(File::create(path)?);
    let bytes = write_matrix_to(&mut writer, matrix)?;
    writer.flush()?;

    info!(path = %path.display(), size = matrix.size(), bytes, "wrote matrix fixture");
    Ok(())
}
