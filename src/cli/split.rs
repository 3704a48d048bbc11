use crate::error::Result;
use crate::store;
use crate::transform::{byte_deinterleave, equal_split, word_deinterleave};
use std::path::Path;

/// How a source image is divided between the two output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// First half / second half.
    Half,
    /// Alternating bytes.
    Bytes,
    /// Alternating 16-bit words.
    Words,
}

/// Split `input` into two files according to `mode`.
/// Returns the number of bytes written to each output file.
pub fn split_file(input: &Path, out_a: &Path, out_b: &Path, mode: SplitMode) -> Result<usize> {
    let data = store::load(input)?;

    let (low, high) = match mode {
        SplitMode::Half => equal_split(&data),
        SplitMode::Bytes => byte_deinterleave(&data),
        SplitMode::Words => word_deinterleave(&data)?,
    };

    let written = low.len();
    store::save(out_a, &low)?;
    store::save(out_b, &high)?;
    Ok(written)
}
