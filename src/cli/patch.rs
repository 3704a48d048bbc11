use crate::error::Result;
use crate::store;
use crate::transform::overlay;
use std::path::Path;

/// Overwrite the first `size` bytes of `base_input` with `patch_input`'s
/// prefix and write the result to `output`.
/// Returns the output length in bytes.
pub fn patch_file(patch_input: &Path, base_input: &Path, output: &Path, size: usize) -> Result<usize> {
    let patch = store::load(patch_input)?;
    let base = store::load(base_input)?;

    let result = overlay(&base, &patch, size)?;
    store::save(output, &result)?;
    Ok(result.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_patch_file() {
        let dir = tempdir().unwrap();
        let patch = dir.path().join("fix.bin");
        let base = dir.path().join("rom.bin");
        let out = dir.path().join("patched.bin");

        std::fs::write(&patch, [0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        std::fs::write(&base, [0, 0, 0, 0, 0, 0]).unwrap();

        let written = patch_file(&patch, &base, &out, 2).unwrap();
        assert_eq!(written, 6);
        assert_eq!(std::fs::read(&out).unwrap(), vec![0xFF, 0xFF, 0, 0, 0, 0]);
    }

    #[test]
    fn test_patch_oversized_leaves_no_output() {
        let dir = tempdir().unwrap();
        let patch = dir.path().join("fix.bin");
        let base = dir.path().join("rom.bin");
        let out = dir.path().join("patched.bin");

        std::fs::write(&patch, [1, 2]).unwrap();
        std::fs::write(&base, [0; 8]).unwrap();

        assert!(patch_file(&patch, &base, &out, 4).is_err());
        assert!(!out.exists());
    }
}
