use super::alloc_buffer;
use crate::error::{Result, RomforgeError};

/// Maximum size of a single output bank file.
pub const BANK_CAPACITY: usize = 8 * 1024 * 1024;

/// Result of a capacity-bounded concatenation: a primary bank and, when the
/// combined data does not fit in one bank, an overflow bank.
///
/// `primary` followed by `overflow` always reproduces the concatenated
/// input, so the pair can be persisted as separate bank files without
/// losing a byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankPair {
    pub primary: Vec<u8>,
    pub overflow: Option<Vec<u8>>,
}

impl BankPair {
    /// Total bytes across both banks.
    pub fn total_len(&self) -> usize {
        self.primary.len() + self.overflow.as_ref().map_or(0, Vec::len)
    }
}

/// Plain concatenation, no capacity accounting.
pub fn concat(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    let mut joined = alloc_buffer(a.len() + b.len())?;
    joined.extend_from_slice(a);
    joined.extend_from_slice(b);
    Ok(joined)
}

/// Concatenate `a` and `b` into at most two banks of `capacity` bytes each.
///
/// When `a` alone overflows the first bank, the overflow bank starts with
/// `a`'s remainder and all of `b` follows it. Otherwise `b` is split so the
/// first bank is filled exactly, and only `b`'s tail spills into the
/// overflow bank. Two banks cannot hold more than `2 * capacity` bytes;
/// larger inputs are rejected before any output is assembled.
pub fn bank_split(a: &[u8], b: &[u8], capacity: usize) -> Result<BankPair> {
    let total = a.len() + b.len();
    if total > capacity.saturating_mul(2) {
        return Err(RomforgeError::SizeOutOfRange(format!(
            "{} bytes do not fit in two {} byte banks",
            total, capacity
        )));
    }

    if a.len() > capacity {
        let mut primary = alloc_buffer(capacity)?;
        primary.extend_from_slice(&a[..capacity]);

        let mut overflow = alloc_buffer(a.len() - capacity + b.len())?;
        overflow.extend_from_slice(&a[capacity..]);
        overflow.extend_from_slice(b);

        return Ok(BankPair {
            primary,
            overflow: Some(overflow),
        });
    }

    if total <= capacity {
        return Ok(BankPair {
            primary: concat(a, b)?,
            overflow: None,
        });
    }

    // First bank is filled to capacity with a prefix of b; the rest of b
    // becomes the overflow bank.
    let keep = b.len() - (total - capacity);
    let mut primary = alloc_buffer(capacity)?;
    primary.extend_from_slice(a);
    primary.extend_from_slice(&b[..keep]);

    Ok(BankPair {
        primary,
        overflow: Some(b[keep..].to_vec()),
    })
}
