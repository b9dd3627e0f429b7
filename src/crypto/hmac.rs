// HMAC: Keyed-Hashing for Message Authentication
// https://tools.ietf.org/html/rfc2104

use crate::crypto::hash::md5::Md5;
use crate::encoding::words;

const IPAD: u32 = 0x36363636;
const OPAD: u32 = 0x5C5C5C5C;

pub struct HmacMd5;

impl HmacMd5 {
    pub const BLOCK_LEN: usize = 64;
    pub const TAG_LEN: usize = Md5::DIGEST_LEN;

    const BLOCK_WORDS: usize = Self::BLOCK_LEN / 4;

    /// H(K XOR opad, H(K XOR ipad, text)), all over little-endian word arrays.
    /// Keys longer than one block are reduced to their digest first.
    pub fn oneshot(key: &[u8], data: &[u8]) -> [u8; Self::TAG_LEN] {
        let mut bkey = words::from_bytes(key);
        if bkey.len() > Self::BLOCK_WORDS {
            bkey = Md5::digest_words(bkey, key.len() as u64 * 8).to_vec();
        }
        bkey.resize(Self::BLOCK_WORDS, 0);

        let data_bits = data.len() as u64 * 8;

        let mut inner: Vec<u32> = bkey.iter().map(|&k| k ^ IPAD).collect();
        inner.extend(words::from_bytes(data));
        let h1 = Md5::digest_words(inner, 512 + data_bits);

        let mut outer: Vec<u32> = bkey.iter().map(|&k| k ^ OPAD).collect();
        outer.extend(h1);
        let h2 = Md5::digest_words(outer, 512 + 128);

        let mut tag = [0u8; Self::TAG_LEN];
        tag.copy_from_slice(&words::to_bytes(&h2, Self::TAG_LEN as u64 * 8));
        tag
    }
}
