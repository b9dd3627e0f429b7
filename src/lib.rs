//! Deterministic, seed-derived passwords.
//!
//! A password is recomputed on every call from a human-memorable seed (service
//! host + date + passphrase) and an ordered selection of character buckets;
//! nothing derived is ever stored. MD5 / HMAC-MD5 serve purely as deterministic
//! pseudo-random functions here, not as security primitives.

pub mod crypto;
pub mod encoding;
pub mod password;

pub use password::charset::{generate, Charsets};
pub use password::{derive, derive_truncated, DeriveError};
