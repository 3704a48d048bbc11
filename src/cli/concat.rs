use crate::error::Result;
use crate::store;
use crate::transform::{bank_split, concat, word_merge, BANK_CAPACITY};
use std::path::{Path, PathBuf};

/// Append `in_b` to `in_a` into a single output file.
/// Returns the concatenated length in bytes.
pub fn concat_files(in_a: &Path, in_b: &Path, output: &Path) -> Result<usize> {
    let a = store::load(in_a)?;
    let b = store::load(in_b)?;

    let joined = concat(&a, &b)?;
    store::save(output, &joined)?;
    Ok(joined.len())
}

/// Concatenate two equal-length files by alternating 16-bit words, the
/// layout flash cartridge crom images use.
/// Returns the merged length in bytes.
pub fn concat_words(in_a: &Path, in_b: &Path, output: &Path) -> Result<usize> {
    let a = store::load(in_a)?;
    let b = store::load(in_b)?;

    let merged = word_merge(&a, &b)?;
    store::save(output, &merged)?;
    Ok(merged.len())
}

/// Concatenate two files into fixed-capacity prom banks under `out_dir`:
/// the primary bank is written to `<out_dir>/prom` and, when the combined
/// data overflows one bank, the remainder to `<out_dir>/prom1`.
/// Returns the paths written, in bank order.
pub fn concat_banked(in_a: &Path, in_b: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let a = store::load(in_a)?;
    let b = store::load(in_b)?;

    let banks = bank_split(&a, &b, BANK_CAPACITY)?;

    let primary_path = out_dir.join("prom");
    store::save(&primary_path, &banks.primary)?;
    let mut written = vec![primary_path];

    if let Some(overflow) = &banks.overflow {
        let overflow_path = out_dir.join("prom1");
        store::save(&overflow_path, overflow)?;
        written.push(overflow_path);
    }

    Ok(written)
}
