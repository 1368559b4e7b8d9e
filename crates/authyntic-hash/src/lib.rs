//! Multi-algorithm digests for Authyntic.
//!
//! # Main Components
//!
//! - [`blake2b`] - portable BLAKE2b compression, streaming and keyed hashing
//! - [`engine`] - digest dispatch over SHA-256, SHA3-512 and BLAKE2b-512

pub mod blake2b;
pub mod engine;

pub use blake2b::{blake2b, blake2b_512, blake2b_keyed, Blake2b};
pub use engine::{digest, multi_digest, multi_digest_named, sha256_hex, verify_digest};
