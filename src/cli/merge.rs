use crate::error::Result;
use crate::store;
use crate::transform::{byte_interleave2, byte_interleave4};
use std::path::Path;

/// Byte-merge two equal-length files, first input at even offsets.
/// Returns the merged length in bytes.
pub fn merge_files(in_low: &Path, in_high: &Path, output: &Path) -> Result<usize> {
    let low = store::load(in_low)?;
    let high = store::load(in_high)?;

    let merged = byte_interleave2(&low, &high)?;
    store::save(output, &merged)?;
    Ok(merged.len())
}

/// Byte-merge four equal-length files in argument order.
/// Returns the merged length in bytes.
pub fn merge_files_quad(
    in_1: &Path,
    in_2: &Path,
    in_3: &Path,
    in_4: &Path,
    output: &Path,
) -> Result<usize> {
    let buf_1 = store::load(in_1)?;
    let buf_2 = store::load(in_2)?;
    let buf_3 = store::load(in_3)?;
    let buf_4 = store::load(in_4)?;

    let merged = byte_interleave4(&buf_1, &buf_2, &buf_3, &buf_4)?;
    store::save(output, &merged)?;
    Ok(merged.len())
}
