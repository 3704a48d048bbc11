use crate::error::{Result, RomforgeError};
use crate::transform::alloc_buffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// Load an entire ROM image into an owned byte buffer.
///
/// A missing file is reported as `InputNotFound` so callers can distinguish
/// it from read failures; all other IO errors propagate unchanged.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RomforgeError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let length = file.metadata()?.len() as usize;
    let mut buffer = alloc_buffer(length)?;
    buffer.resize(length, 0);

    let mut reader = BufReader::new(file);
    reader.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Write a byte buffer to disk, creating or truncating the target file.
pub fn save(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Write a text report to disk.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    save(path, text.as_bytes())
}
