use std::sync::OnceLock;

/// Generator polynomial shared by every table entry.
const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// 256-entry remainder table, built on first use and immutable afterwards.
fn crc_table() -> &'static [u32; 256] {
    static TABLE: OnceLock<[u32; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut accum = (i as u32) << 24;
            for _ in 0..8 {
                accum = if accum & 0x8000_0000 != 0 {
                    (accum << 1) ^ POLYNOMIAL
                } else {
                    accum << 1
                };
            }
            *entry = accum;
        }
        table
    })
}

/// MSB-first CRC-32 of `data`, starting from `seed`.
///
/// This is the non-reflected variant of polynomial 0x04C11DB7: bytes fold
/// into the top of the accumulator, with no bit reversal and no final XOR
/// mask. It intentionally does not match the common zlib CRC-32; existing
/// ROM info files carry this variant.
pub fn checksum(seed: u32, data: &[u8]) -> u32 {
    let table = crc_table();
    data.iter().fold(seed, |accum, &byte| {
        let index = ((accum >> 24) ^ u32::from(byte)) & 0xFF;
        (accum << 8) ^ table[index as usize]
    })
}
