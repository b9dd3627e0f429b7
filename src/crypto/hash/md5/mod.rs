pub mod soft;
pub use soft::Md5;

use crate::crypto::hmac::HmacMd5;
use crate::encoding::hex;

const INITIAL_STATE: [u32; 4] = [
    0x67452301,
    0xEFCDAB89,
    0x98BADCFE,
    0x10325476,
];

/// floor(2^32 * |sin(i)|) for i = 1..64
const K64: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// One-shot MD5 over raw bytes.
#[inline]
pub fn compute<T: AsRef<[u8]>>(data: T) -> [u8; Md5::DIGEST_LEN] {
    Md5::oneshot(data)
}

/// MD5 of `text` as 16 raw digest bytes. `&str` input guarantees every byte of
/// a multi-byte character reaches the digest.
#[inline]
pub fn raw_md5(text: &str) -> [u8; Md5::DIGEST_LEN] {
    Md5::oneshot(text.as_bytes())
}

/// MD5 of `text` as 32 lowercase hex digits.
pub fn hex_md5(text: &str) -> String {
    hex::encode(&raw_md5(text))
}

/// HMAC-MD5 of `text` under `key`, raw digest bytes.
#[inline]
pub fn raw_hmac_md5(key: &str, text: &str) -> [u8; Md5::DIGEST_LEN] {
    HmacMd5::oneshot(key.as_bytes(), text.as_bytes())
}

/// HMAC-MD5 of `text` under `key`, hex encoded.
pub fn hex_hmac_md5(key: &str, text: &str) -> String {
    hex::encode(&raw_hmac_md5(key, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_md5() {
        assert_eq!(hex_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hex_md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_hex_md5_multibyte() {
        // every UTF-8 byte of a multi-byte character must contribute
        assert_eq!(hex_md5("héllo wörld"), "ed0c22cc110ede12327851863c078138");
    }

    #[test]
    fn test_hex_hmac_md5() {
        assert_eq!(
            hex_hmac_md5("key", "The quick brown fox jumps over the lazy dog"),
            "80070713463e7749b90c2dc24911e275",
        );
    }

    #[test]
    fn test_raw_matches_hex() {
        let raw = raw_md5("abc");
        assert_eq!(crate::encoding::hex::encode(&raw), hex_md5("abc"));
    }
}
