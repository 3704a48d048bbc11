use crate::error::{Result, RomforgeError};
use crate::store;
use crate::transform::pad;
use std::path::Path;

/// Pad `input` to `size_kib` kilobytes with `fill` and write it to `output`.
/// Returns the padded length in bytes.
pub fn pad_file(input: &Path, output: &Path, size_kib: usize, fill: u8) -> Result<usize> {
    let data = store::load(input)?;

    let padded = pad(&data, size_kib * 1024, fill)?;
    store::save(output, &padded)?;
    Ok(padded.len())
}

/// Parse a fill byte given as decimal (`255`) or 0x-prefixed hex (`0xFF`).
pub fn parse_fill_byte(s: &str) -> Result<u8> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|_| RomforgeError::InvalidPadByte(s.to_string()))
}
