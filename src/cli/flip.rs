use crate::error::Result;
use crate::store;
use crate::transform::{byte_flip, swap_halves};
use std::path::{Path, PathBuf};

/// Flip the low/high bytes of a file. With no explicit output the file is
/// rewritten in place. Returns the path written.
pub fn flip_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let data = store::load(input)?;
    let flipped = byte_flip(&data)?;

    let target = output.unwrap_or(input);
    store::save(target, &flipped)?;
    Ok(target.to_path_buf())
}

/// Swap the top and bottom halves of a file. With no explicit output the
/// file is rewritten in place. Returns the path written.
pub fn swap_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let data = store::load(input)?;
    let swapped = swap_halves(&data);

    let target = output.unwrap_or(input);
    store::save(target, &swapped)?;
    Ok(target.to_path_buf())
}
