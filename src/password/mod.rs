//! Bucket-based password derivation.
//!
//! The seed's hex digest drives every choice, so the same seed and the same
//! bucket selection always reproduce the same password.

pub mod charset;

use thiserror::Error;

use crate::crypto::hash::md5;

/// Number of characters a derivation yields, one per hex-digit pair of an MD5
/// digest. A hard ceiling: longer passwords would need digest material the
/// algorithm never generates, and extending it would change every password
/// already derived.
pub const DERIVED_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("bucket set is empty")]
    EmptyBucketSet,
    #[error("bucket {0} has no characters")]
    EmptyBucket(usize),
}

/// Map the seed's digest onto the selected buckets, yielding exactly
/// [`DERIVED_LEN`] characters.
///
/// For position `k`, `x` is the sum of the ASCII codes of the k-th hex-digit
/// pair of `md5(seed)`. While `k < buckets.len()` the character comes from
/// `buckets[k]`, so the leading positions draw from distinct buckets in
/// declaration order; later positions pick the bucket from `x` itself. The
/// distinct leading draw is what lets a caller satisfy "at least one
/// uppercase/digit/symbol" composition policies, provided the requested
/// length is at least the bucket count.
pub fn derive(buckets: &[&str], seed: &str) -> Result<String, DeriveError> {
    if buckets.is_empty() {
        return Err(DeriveError::EmptyBucketSet);
    }
    for (i, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            return Err(DeriveError::EmptyBucket(i));
        }
    }

    let hex = md5::hex_md5(seed);
    let digits = hex.as_bytes();

    let mut out = String::with_capacity(DERIVED_LEN);
    for k in 0..DERIVED_LEN {
        let x = usize::from(digits[2 * k]) + usize::from(digits[2 * k + 1]);
        let bucket = if k < buckets.len() {
            buckets[k]
        } else {
            buckets[x % buckets.len()]
        };
        let count = bucket.chars().count();
        // non-empty, checked above
        out.push(bucket.chars().nth(x % count).unwrap());
    }
    Ok(out)
}

/// First `min(len, DERIVED_LEN)` characters of [`derive`]. Requests beyond
/// the ceiling return the full 16 characters unchanged, no padding.
///
/// Truncating below the bucket count silently drops the distinct-bucket
/// coverage of the discarded positions; reproducible behavior, kept as is.
pub fn derive_truncated(buckets: &[&str], seed: &str, len: usize) -> Result<String, DeriveError> {
    let full = derive(buckets, seed)?;
    if len >= DERIVED_LEN {
        return Ok(full);
    }
    Ok(full.chars().take(len).collect())
}
