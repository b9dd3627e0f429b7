use super::{INITIAL_STATE, K64};
use crate::encoding::words;

/// Portable MD5 over little-endian 32-bit word arrays.
#[derive(Clone, Copy)]
pub struct Md5 {
    state: [u32; 4],
}

impl Md5 {
    pub const BLOCK_WORDS: usize = 16;
    pub const DIGEST_LEN: usize = 16;

    /// Digest a little-endian word array carrying `bit_len` significant bits.
    ///
    /// Padding happens in place: the 0x80 marker byte lands right after the
    /// message, the low 32 bits of `bit_len` land in the second-to-last word
    /// of the final block, and the padded array is always a whole number of
    /// 16-word blocks. The high length word stays zero, which is exact for
    /// all inputs under 2^32 bits.
    ///
    /// Total over any finite input; there are no error paths.
    pub fn digest_words(mut words: Vec<u32>, bit_len: u64) -> [u32; 4] {
        let len = bit_len as usize;
        let padded = (((len + 64) >> 9) << 4) + 16;
        words.resize(padded, 0);
        words[len >> 5] |= 0x80u32 << (len % 32);
        words[padded - 2] = bit_len as u32;

        let mut h = Self {
            state: INITIAL_STATE,
        };
        for block in words.chunks_exact(Self::BLOCK_WORDS) {
            h.process_block(block);
        }
        h.state
    }

    fn process_block(&mut self, w: &[u32]) {
        #[inline(always)]
        fn f(b: u32, c: u32, d: u32) -> u32 {
            (b & c) | (!b & d)
        }
        #[inline(always)]
        fn g(b: u32, c: u32, d: u32) -> u32 {
            (b & d) | (c & !d)
        }
        #[inline(always)]
        fn h(b: u32, c: u32, d: u32) -> u32 {
            b ^ c ^ d
        }
        #[inline(always)]
        fn i(b: u32, c: u32, d: u32) -> u32 {
            c ^ (b | !d)
        }

        let mut a = self.state[0];
        let mut b = self.state[1];
        let mut c = self.state[2];
        let mut d = self.state[3];

        for t in 0..4 {
            a = a.wrapping_add(f(b, c, d)).wrapping_add(w[4 * t]).wrapping_add(K64[4 * t]).rotate_left(7).wrapping_add(b);
            d = d.wrapping_add(f(a, b, c)).wrapping_add(w[4 * t + 1]).wrapping_add(K64[4 * t + 1]).rotate_left(12).wrapping_add(a);
            c = c.wrapping_add(f(d, a, b)).wrapping_add(w[4 * t + 2]).wrapping_add(K64[4 * t + 2]).rotate_left(17).wrapping_add(d);
            b = b.wrapping_add(f(c, d, a)).wrapping_add(w[4 * t + 3]).wrapping_add(K64[4 * t + 3]).rotate_left(22).wrapping_add(c);
        }

        for t in 0..4 {
            a = a.wrapping_add(g(b, c, d)).wrapping_add(w[(5 * (4 * t) + 1) % 16]).wrapping_add(K64[16 + 4 * t]).rotate_left(5).wrapping_add(b);
            d = d.wrapping_add(g(a, b, c)).wrapping_add(w[(5 * (4 * t + 1) + 1) % 16]).wrapping_add(K64[16 + 4 * t + 1]).rotate_left(9).wrapping_add(a);
            c = c.wrapping_add(g(d, a, b)).wrapping_add(w[(5 * (4 * t + 2) + 1) % 16]).wrapping_add(K64[16 + 4 * t + 2]).rotate_left(14).wrapping_add(d);
            b = b.wrapping_add(g(c, d, a)).wrapping_add(w[(5 * (4 * t + 3) + 1) % 16]).wrapping_add(K64[16 + 4 * t + 3]).rotate_left(20).wrapping_add(c);
        }

        for t in 0..4 {
            a = a.wrapping_add(h(b, c, d)).wrapping_add(w[(3 * (4 * t) + 5) % 16]).wrapping_add(K64[32 + 4 * t]).rotate_left(4).wrapping_add(b);
            d = d.wrapping_add(h(a, b, c)).wrapping_add(w[(3 * (4 * t + 1) + 5) % 16]).wrapping_add(K64[32 + 4 * t + 1]).rotate_left(11).wrapping_add(a);
            c = c.wrapping_add(h(d, a, b)).wrapping_add(w[(3 * (4 * t + 2) + 5) % 16]).wrapping_add(K64[32 + 4 * t + 2]).rotate_left(16).wrapping_add(d);
            b = b.wrapping_add(h(c, d, a)).wrapping_add(w[(3 * (4 * t + 3) + 5) % 16]).wrapping_add(K64[32 + 4 * t + 3]).rotate_left(23).wrapping_add(c);
        }

        for t in 0..4 {
            a = a.wrapping_add(i(b, c, d)).wrapping_add(w[(7 * (4 * t)) % 16]).wrapping_add(K64[48 + 4 * t]).rotate_left(6).wrapping_add(b);
            d = d.wrapping_add(i(a, b, c)).wrapping_add(w[(7 * (4 * t + 1)) % 16]).wrapping_add(K64[48 + 4 * t + 1]).rotate_left(10).wrapping_add(a);
            c = c.wrapping_add(i(d, a, b)).wrapping_add(w[(7 * (4 * t + 2)) % 16]).wrapping_add(K64[48 + 4 * t + 2]).rotate_left(15).wrapping_add(d);
            b = b.wrapping_add(i(c, d, a)).wrapping_add(w[(7 * (4 * t + 3)) % 16]).wrapping_add(K64[48 + 4 * t + 3]).rotate_left(21).wrapping_add(c);
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }

    #[inline]
    pub fn oneshot<T: AsRef<[u8]>>(data: T) -> [u8; Self::DIGEST_LEN] {
        let data = data.as_ref();
        let state = Self::digest_words(words::from_bytes(data), data.len() as u64 * 8);

        let mut output = [0u8; Self::DIGEST_LEN];
        output[0..4].copy_from_slice(&state[0].to_le_bytes());
        output[4..8].copy_from_slice(&state[1].to_le_bytes());
        output[8..12].copy_from_slice(&state[2].to_le_bytes());
        output[12..16].copy_from_slice(&state[3].to_le_bytes());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5() {
        assert_eq!(
            Md5::oneshot(b""),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
                0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e
            ],
        );
        assert_eq!(
            Md5::oneshot(b"hello world"),
            [
                0x5e, 0xb6, 0x3b, 0xbb, 0xe0, 0x1e, 0xee, 0xd0,
                0x93, 0xcb, 0x22, 0xbb, 0x8f, 0x5a, 0xcd, 0xc3,
            ],
        );
        assert_eq!(
            Md5::oneshot(b"1234567890123456789012345678901234567890"),
            [
                0xf5, 0xbf, 0x3e, 0x98, 0x44, 0x32, 0xae, 0x6f,
                0x9f, 0x98, 0x84, 0x09, 0x51, 0xe5, 0xce, 0xf3,
            ],
        );
    }

    #[test]
    fn test_md5_against_reference() {
        let random_data = (0..1000).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        for _ in 0..100 {
            let length = (rand::random::<u32>() % 1000) as usize;
            let data = &random_data[..length];
            assert_eq!(
                Md5::oneshot(data),
                md5::compute(data).0,
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_md5_block_boundaries() {
        // padding crosses into an extra block between 56 and 64 message bytes
        for length in 53..70 {
            let data = vec![0xa5u8; length];
            assert_eq!(Md5::oneshot(&data), md5::compute(&data).0);
        }
    }

    #[test]
    fn test_md5_avalanche() {
        for _ in 0..100 {
            let mut data = (0..64).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
            let before = Md5::oneshot(&data);
            let idx = (rand::random::<u32>() % 64) as usize;
            data[idx] ^= 1 << (rand::random::<u32>() % 8);
            assert_ne!(Md5::oneshot(&data), before);
        }
    }
}
