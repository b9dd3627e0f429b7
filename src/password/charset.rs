//! Stock alphabets and the end-to-end generation entry point.

use super::{derive_truncated, DeriveError};

pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS_PRIMARY: &str = "!@#$%^&*()";
pub const SYMBOLS_EXTRA: &str = "~-=_+";

/// Which character classes the derived password draws from.
///
/// The resulting bucket order is fixed: upper, lower, digits, primary
/// symbols, extra symbols. Reordering would change every derived password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charsets {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols_primary: bool,
    pub symbols_extra: bool,
}

impl Default for Charsets {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols_primary: true,
            symbols_extra: true,
        }
    }
}

impl Charsets {
    pub fn buckets(self) -> Vec<&'static str> {
        let mut buckets = Vec::with_capacity(5);
        if self.upper {
            buckets.push(UPPER);
        }
        if self.lower {
            buckets.push(LOWER);
        }
        if self.digits {
            buckets.push(DIGITS);
        }
        if self.symbols_primary {
            buckets.push(SYMBOLS_PRIMARY);
        }
        if self.symbols_extra {
            buckets.push(SYMBOLS_EXTRA);
        }
        buckets
    }
}

/// Derive a password of up to `len` characters (hard ceiling 16) from the
/// three seed parts. The seed is the plain concatenation
/// `host + date + passphrase`; changing any part changes the password.
pub fn generate(
    charsets: Charsets,
    host: &str,
    date: &str,
    passphrase: &str,
    len: usize,
) -> Result<String, DeriveError> {
    let seed = [host, date, passphrase].concat();
    derive_truncated(&charsets.buckets(), &seed, len)
}
