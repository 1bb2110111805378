//! Raw `f32` stream codec.
//!
//! Values are packed back to back with no length prefix, header or padding,
//! in the byte order of the machine that runs the encoder.

use std::io::{Read, Write};

use bincode::config::Config;
use bincode::enc::Encoder;
use bincode::error::EncodeError;
use bincode::Encode;

use crate::error::Result;

/// Bytes per encoded element.
pub const ELEMENT_BYTES: usize = 4;

/// bincode configuration matching the host's byte order.
#[cfg(target_endian = "little")]
pub fn native_config() -> impl Config {
    bincode::config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}

/// bincode configuration matching the host's byte order.
#[cfg(target_endian = "big")]
pub fn native_config() -> impl Config {
    bincode::config::standard()
        .with_big_endian()
        .with_fixed_int_encoding()
}

/// Borrowed row-major element stream. Encodes as the bare elements.
pub struct RowMajor<'a>(pub &'a [f32]);

impl Encode for RowMajor<'_> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        for value in self.0 {
            value.encode(encoder)?;
        }
        Ok(())
    }
}

/// Stream `values` into `writer`, returning the number of bytes written.
pub fn encode_into<W: Write>(values: &[f32], writer: &mut W) -> Result<usize> {
    Ok(bincode::encode_into_std_write(
        RowMajor(values),
        writer,
        native_config(),
    )?)
}

pub fn encode_to_vec(values: &[f32]) -> Result<Vec<u8>> {
    Ok(bincode::encode_to_vec(RowMajor(values), native_config())?)
}

/// Read exactly `count` values from `reader`.
pub fn decode_from<R: Read>(reader: &mut R, count: usize) -> Result<Vec<f32>> {
    let config = native_config();
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(bincode::decode_from_std_read(reader, config)?);
    }
    Ok(values)
}
