//! # mpmat - Path-Graph Matrix Fixtures
//!
//! Builds the adjacency matrix of an `n`-vertex path graph and writes it as
//! raw `f32` values for Floyd all-pairs shortest-path programs to read.
//!
//! ## Fixture layout
//!
//! - diagonal: `0.0`
//! - first super- and sub-diagonal: `1.0`
//! - everything else: `99999.0`
//!
//! The matrix is built in `f64` and narrowed to `f32` when written. The file
//! has no header: `n * n` native-endian floats, row-major.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("mp_mat");
//!
//! mpmat::generate(10, &path)?;
//!
//! let m = mpmat::io::read_matrix(&path)?;
//! assert_eq!(m.get(0, 1), Some(1.0));
//! assert!(mpmat::fixture::verify(&m).is_ok());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod error;
pub mod fixture;
pub mod io;
pub mod numerics;
pub mod settings;

// Re-export commonly used types for convenience
pub use error::{FixtureError, Result};
pub use numerics::SquareMatrix;
pub use settings::Settings;

/// Version information for the mpmat crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the `n x n` fixture and write it to `path`.
pub fn generate<P: AsRef<Path>>(n: usize, path: P) -> Result<()> {
    let matrix = fixture::build(n);
    io::write_matrix(path, &matrix)
}
