//! Algorithm dispatch.
//!
//! Each algorithm has exactly one implementation: `sha2` for SHA-256, `sha3`
//! for SHA3-512 and the in-crate [`crate::blake2b`] for BLAKE2b-512.

use authyntic_core::{Digest, HashAlgorithm, Result};
use rayon::prelude::*;
use sha2::Sha256;
use sha3::Sha3_512;

/// Compute the digest of `data` under `algorithm`.
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Digest {
    let bytes = match algorithm {
        HashAlgorithm::Sha256 => {
            use sha2::Digest as _;
            Sha256::digest(data).to_vec()
        }
        HashAlgorithm::Sha3_512 => {
            use sha3::Digest as _;
            Sha3_512::digest(data).to_vec()
        }
        HashAlgorithm::Blake2b512 => crate::blake2b::blake2b_512(data).to_vec(),
    };
    Digest::from_hash_output(algorithm, bytes)
}

/// Compute one digest per requested algorithm over the same input.
///
/// Algorithms are evaluated on the rayon pool. The result keeps the order
/// of `algorithms`, duplicates included.
pub fn multi_digest(data: &[u8], algorithms: &[HashAlgorithm]) -> Vec<Digest> {
    tracing::debug!(
        bytes = data.len(),
        algorithms = algorithms.len(),
        "computing multi-digest"
    );
    algorithms
        .par_iter()
        .map(|algorithm| digest(*algorithm, data))
        .collect()
}

/// Like [`multi_digest`], taking boundary identifiers (`sha-256`, `sha-3`,
/// `blake2b`).
///
/// Every name is parsed before any hashing starts, so an unknown name fails
/// the whole call with `UnsupportedAlgorithm`.
pub fn multi_digest_named(data: &[u8], names: &[&str]) -> Result<Vec<Digest>> {
    let algorithms = names
        .iter()
        .map(|name| name.parse::<HashAlgorithm>())
        .collect::<Result<Vec<_>>>()?;
    Ok(multi_digest(data, &algorithms))
}

/// Recompute the digest of `data` and compare it to `expected_hex`.
///
/// Hex comparison ignores case. A mismatch is `false`, never an error.
pub fn verify_digest(algorithm: HashAlgorithm, data: &[u8], expected_hex: &str) -> bool {
    digest(algorithm, data)
        .to_hex()
        .eq_ignore_ascii_case(expected_hex.trim())
}

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    use sha2::Digest as _;
    hex::encode(Sha256::digest(data))
}
