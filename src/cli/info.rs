use crate::error::Result;
use crate::store;
use crate::transform::checksum;
use std::path::Path;

/// Build the size/checksum report line for a ROM image, persisting it to
/// `output` when given. The line's shape is a contract other tooling
/// parses: `<path> size:<decimal> crc32:0x<8 lowercase hex digits>`.
pub fn file_info(input: &Path, output: Option<&Path>) -> Result<String> {
    let data = store::load(input)?;
    let crc = checksum(0, &data);

    let line = format!(
        "{} size:{} crc32:0x{}",
        input.display(),
        data.len(),
        hex::encode(crc.to_be_bytes())
    );

    if let Some(out) = output {
        store::save_text(out, &line)?;
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_info_report_shape() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rom.bin");

        std::fs::write(&input, b"123456789").unwrap();

        let line = file_info(&input, None).unwrap();
        let expected_crc = checksum(0, b"123456789");
        assert_eq!(
            line,
            format!(
                "{} size:9 crc32:0x{}",
                input.display(),
                hex::encode(expected_crc.to_be_bytes())
            )
        );
        assert!(line.contains(" size:9 crc32:0x"));
    }

    #[test]
    fn test_file_info_crc_is_zero_padded_lowercase() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rom.bin");

        // Empty input keeps the seed, so the report must carry 0x00000000.
        std::fs::write(&input, b"").unwrap();

        let line = file_info(&input, None).unwrap();
        assert!(line.ends_with("size:0 crc32:0x00000000"), "line: {}", line);
    }

    #[test]
    fn test_file_info_writes_report_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rom.bin");
        let report = dir.path().join("rom.txt");

        std::fs::write(&input, [0xAB; 16]).unwrap();

        let line = file_info(&input, Some(&report)).unwrap();
        assert_eq!(std::fs::read_to_string(&report).unwrap(), line);
    }
}
