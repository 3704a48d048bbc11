pub mod bank;
pub mod checksum;
pub mod interleave;
pub mod pad;
pub mod patch;

pub use bank::*;
pub use checksum::*;
pub use interleave::*;
pub use pad::*;
pub use patch::*;

use crate::error::{Result, RomforgeError};

/// Reserve an owned buffer with room for exactly `len` bytes.
/// Reservation failure is reported as `Allocation` instead of aborting.
pub(crate) fn alloc_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| RomforgeError::Allocation(len))?;
    Ok(buffer)
}
