//! Codec between byte strings and the little-endian 32-bit word arrays the
//! digest core consumes.

/// Pack bytes little-endian: byte `i` lands at bit `i * 8 % 32` of word
/// `i >> 2`. A partial tail word is zero-filled.
pub fn from_bytes(bytes: &[u8]) -> Vec<u32> {
    let mut words = vec![0u32; (bytes.len() + 3) / 4];
    for (i, &byte) in bytes.iter().enumerate() {
        words[i >> 2] |= u32::from(byte) << ((i % 4) * 8);
    }
    words
}

/// Unpack `bit_len / 8` bytes, one per 8-bit step across the words.
pub fn to_bytes(words: &[u32], bit_len: u64) -> Vec<u8> {
    let len = (bit_len / 8) as usize;
    let mut bytes = Vec::with_capacity(len);
    for i in 0..len {
        bytes.push((words[i >> 2] >> ((i % 4) * 8)) as u8);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_layout() {
        assert_eq!(from_bytes(&[]), Vec::<u32>::new());
        assert_eq!(from_bytes(&[0x01]), vec![0x00000001]);
        assert_eq!(from_bytes(&[0x01, 0x02, 0x03, 0x04]), vec![0x04030201]);
        assert_eq!(
            from_bytes(&[0x01, 0x02, 0x03, 0x04, 0x05]),
            vec![0x04030201, 0x00000005],
        );
    }

    #[test]
    fn test_to_bytes_layout() {
        assert_eq!(to_bytes(&[0x04030201], 32), vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(to_bytes(&[0x04030201], 16), vec![0x01, 0x02]);
        assert_eq!(to_bytes(&[], 0), Vec::<u8>::new());
    }

    #[test]
    fn test_round_trip() {
        for length in 0..67 {
            let data = (0..length).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
            let words = from_bytes(&data);
            assert_eq!(to_bytes(&words, data.len() as u64 * 8), data);
        }
    }
}
