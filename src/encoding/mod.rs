pub mod hex;
pub mod words;
