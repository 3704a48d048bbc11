use crate::error::{Result, RomforgeError};

/// Split a buffer into its first and second halves.
/// A trailing odd byte belongs to neither half and is dropped.
pub fn equal_split(buf: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let half = buf.len() / 2;
    (buf[..half].to_vec(), buf[half..2 * half].to_vec())
}

/// De-interleave a buffer at byte stride: even offsets into the first
/// output, odd offsets into the second. A trailing odd byte is dropped.
pub fn byte_deinterleave(buf: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let half = buf.len() / 2;
    let mut low = Vec::with_capacity(half);
    let mut high = Vec::with_capacity(half);
    for pair in buf.chunks_exact(2) {
        low.push(pair[0]);
        high.push(pair[1]);
    }
    (low, high)
}

/// De-interleave a buffer at 16-bit word stride: each 4-byte group
/// contributes its first word to the first output and its second word to
/// the second output.
pub fn word_deinterleave(buf: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    if buf.len() % 4 != 0 {
        return Err(RomforgeError::SizeMismatch(format!(
            "word split requires a length divisible by 4, got {}",
            buf.len()
        )));
    }

    let half = buf.len() / 2;
    let mut low = Vec::with_capacity(half);
    let mut high = Vec::with_capacity(half);
    for group in buf.chunks_exact(4) {
        low.extend_from_slice(&group[..2]);
        high.extend_from_slice(&group[2..]);
    }
    Ok((low, high))
}

/// Swap the low and high byte of every 16-bit word.
pub fn byte_flip(buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() % 2 != 0 {
        return Err(RomforgeError::SizeMismatch(format!(
            "byte flip requires an even length, got {}",
            buf.len()
        )));
    }

    let mut flipped = Vec::with_capacity(buf.len());
    for pair in buf.chunks_exact(2) {
        flipped.push(pair[1]);
        flipped.push(pair[0]);
    }
    Ok(flipped)
}

/// Interleave two equal-length buffers at byte stride, first buffer at even
/// offsets.
pub fn byte_interleave2(low: &[u8], high: &[u8]) -> Result<Vec<u8>> {
    if low.len() != high.len() {
        return Err(RomforgeError::SizeMismatch(format!(
            "byte merge requires equal lengths, got {} and {}",
            low.len(),
            high.len()
        )));
    }

    let mut merged = Vec::with_capacity(low.len() * 2);
    for (&l, &h) in low.iter().zip(high) {
        merged.push(l);
        merged.push(h);
    }
    Ok(merged)
}

/// Interleave four equal-length buffers at byte stride, in argument order.
pub fn byte_interleave4(a: &[u8], b: &[u8], c: &[u8], d: &[u8]) -> Result<Vec<u8>> {
    let n = a.len();
    if b.len() != n || c.len() != n || d.len() != n {
        return Err(RomforgeError::SizeMismatch(format!(
            "four-way byte merge requires equal lengths, got {}, {}, {} and {}",
            n,
            b.len(),
            c.len(),
            d.len()
        )));
    }

    let mut merged = Vec::with_capacity(n * 4);
    for i in 0..n {
        merged.push(a[i]);
        merged.push(b[i]);
        merged.push(c[i]);
        merged.push(d[i]);
    }
    Ok(merged)
}

/// Exchange the top and bottom halves of a buffer (bottom half written
/// first). A trailing odd byte is dropped, consistent with `equal_split`.
pub fn swap_halves(buf: &[u8]) -> Vec<u8> {
    let half = buf.len() / 2;
    let mut swapped = Vec::with_capacity(half * 2);
    swapped.extend_from_slice(&buf[half..2 * half]);
    swapped.extend_from_slice(&buf[..half]);
    swapped
}

/// Interleave two equal-length buffers at 16-bit word stride: the output
/// word stream alternates a word of `a` with a word of `b`.
pub fn word_merge(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(RomforgeError::SizeMismatch(format!(
            "word merge requires equal lengths, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    if a.len() % 2 != 0 {
        return Err(RomforgeError::SizeMismatch(format!(
            "word merge requires whole 16-bit words, got {} bytes per input",
            a.len()
        )));
    }

    let mut merged = Vec::with_capacity(a.len() + b.len());
    for (wa, wb) in a.chunks_exact(2).zip(b.chunks_exact(2)) {
        merged.extend_from_slice(wa);
        merged.extend_from_slice(wb);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_split() {
        let (low, high) = equal_split(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(low, vec![1, 2, 3]);
        assert_eq!(high, vec![4, 5, 6]);
    }

    #[test]
    fn test_equal_split_drops_odd_byte() {
        let (low, high) = equal_split(&[1, 2, 3, 4, 5]);
        assert_eq!(low, vec![1, 2]);
        assert_eq!(high, vec![3, 4]);
    }

    #[test]
    fn test_byte_deinterleave() {
        let (low, high) = byte_deinterleave(&[0x10, 0x20, 0x11, 0x21, 0x12, 0x22]);
        assert_eq!(low, vec![0x10, 0x11, 0x12]);
        assert_eq!(high, vec![0x20, 0x21, 0x22]);
    }

    #[test]
    fn test_byte_deinterleave_drops_odd_byte() {
        let (low, high) = byte_deinterleave(&[1, 2, 3]);
        assert_eq!(low, vec![1]);
        assert_eq!(high, vec![2]);
    }

    #[test]
    fn test_word_deinterleave() {
        let buf = [0xA0, 0xA1, 0xB0, 0xB1, 0xA2, 0xA3, 0xB2, 0xB3];
        let (low, high) = word_deinterleave(&buf).unwrap();
        assert_eq!(low, vec![0xA0, 0xA1, 0xA2, 0xA3]);
        assert_eq!(high, vec![0xB0, 0xB1, 0xB2, 0xB3]);
    }

    #[test]
    fn test_word_deinterleave_rejects_ragged_length() {
        assert!(matches!(
            word_deinterleave(&[0; 6]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_byte_flip() {
        let flipped = byte_flip(&[0x01, 0x02, 0x03, 0x04]).unwrap();
        assert_eq!(flipped, vec![0x02, 0x01, 0x04, 0x03]);
    }

    #[test]
    fn test_byte_flip_is_involution() {
        let data: Vec<u8> = (0..128).collect();
        let twice = byte_flip(&byte_flip(&data).unwrap()).unwrap();
        assert_eq!(twice, data);
    }

    #[test]
    fn test_byte_flip_rejects_odd_length() {
        assert!(matches!(
            byte_flip(&[1, 2, 3]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_byte_interleave2() {
        let merged = byte_interleave2(&[0x10, 0x11], &[0x20, 0x21]).unwrap();
        assert_eq!(merged, vec![0x10, 0x20, 0x11, 0x21]);
    }

    #[test]
    fn test_byte_interleave2_rejects_unequal_lengths() {
        assert!(matches!(
            byte_interleave2(&[1, 2], &[3]),
            Err(RomforgeError::SizeMismatch(_))
        ));
        assert!(matches!(
            byte_interleave2(&[1], &[2, 3]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_byte_deinterleave_then_interleave2_roundtrips() {
        let data: Vec<u8> = (0..100).collect();
        let (low, high) = byte_deinterleave(&data);
        assert_eq!(byte_interleave2(&low, &high).unwrap(), data);
    }

    #[test]
    fn test_byte_interleave4() {
        let merged = byte_interleave4(&[1, 5], &[2, 6], &[3, 7], &[4, 8]).unwrap();
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_byte_interleave4_rejects_unequal_lengths() {
        assert!(matches!(
            byte_interleave4(&[1], &[2], &[3], &[4, 5]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_swap_halves() {
        assert_eq!(swap_halves(&[1, 2, 3, 4]), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_swap_halves_is_involution_for_even_length() {
        let data: Vec<u8> = (0..64).collect();
        assert_eq!(swap_halves(&swap_halves(&data)), data);
    }

    #[test]
    fn test_swap_halves_drops_odd_byte() {
        assert_eq!(swap_halves(&[1, 2, 3, 4, 5]), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_word_merge() {
        let merged = word_merge(&[0xA0, 0xA1, 0xA2, 0xA3], &[0xB0, 0xB1, 0xB2, 0xB3]).unwrap();
        assert_eq!(merged, vec![0xA0, 0xA1, 0xB0, 0xB1, 0xA2, 0xA3, 0xB2, 0xB3]);
    }

    #[test]
    fn test_word_merge_then_word_deinterleave_roundtrips() {
        let a: Vec<u8> = (0..32).collect();
        let b: Vec<u8> = (32..64).collect();
        let merged = word_merge(&a, &b).unwrap();
        let (low, high) = word_deinterleave(&merged).unwrap();
        assert_eq!(low, a);
        assert_eq!(high, b);
    }

    #[test]
    fn test_word_merge_rejects_unequal_lengths() {
        assert!(matches!(
            word_merge(&[1, 2], &[3, 4, 5, 6]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_word_merge_rejects_odd_word() {
        assert!(matches!(
            word_merge(&[1, 2, 3], &[4, 5, 6]),
            Err(RomforgeError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_empty_buffers() {
        assert_eq!(equal_split(&[]), (vec![], vec![]));
        assert_eq!(byte_deinterleave(&[]), (vec![], vec![]));
        assert_eq!(word_deinterleave(&[]).unwrap(), (vec![], vec![]));
        assert_eq!(byte_flip(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(byte_interleave2(&[], &[]).unwrap(), Vec::<u8>::new());
        assert_eq!(swap_halves(&[]), Vec::<u8>::new());
        assert_eq!(word_merge(&[], &[]).unwrap(), Vec::<u8>::new());
    }
}
