use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomforgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to allocate a {0} byte buffer")]
    Allocation(usize),

    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    #[error("size out of range: {0}")]
    SizeOutOfRange(String),

    #[error("invalid pad byte '{0}': expected 0-255, decimal or 0x-prefixed hex")]
    InvalidPadByte(String),
}

pub type Result<T> = std::result::Result<T, RomforgeError>;
