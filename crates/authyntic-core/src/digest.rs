//! Digest values.

use crate::algorithm::HashAlgorithm;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of one hash algorithm over one input.
///
/// Serialized as `{"algorithm": "sha-256", "digest": "<lowercase hex>"}`.
/// The byte length always equals [`HashAlgorithm::output_len`], including
/// values read back from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDigest")]
pub struct Digest {
    algorithm: HashAlgorithm,
    #[serde(rename = "digest", with = "hex")]
    bytes: Vec<u8>,
}

/// Wire form of [`Digest`] before the length check.
#[derive(Deserialize)]
struct RawDigest {
    algorithm: HashAlgorithm,
    #[serde(rename = "digest", with = "hex")]
    bytes: Vec<u8>,
}

impl TryFrom<RawDigest> for Digest {
    type Error = Error;

    fn try_from(raw: RawDigest) -> Result<Self> {
        Self::new(raw.algorithm, raw.bytes)
    }
}

impl Digest {
    /// Wrap `bytes` as the output of `algorithm`.
    ///
    /// Fails with [`Error::DigestLengthMismatch`] unless `bytes` has the
    /// algorithm's output length.
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != algorithm.output_len() {
            return Err(Error::DigestLengthMismatch {
                algorithm: algorithm.to_string(),
                expected: algorithm.output_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self { algorithm, bytes })
    }

    /// Wrap hash output without the length check.
    ///
    /// Only for hash implementations whose output length is fixed by type.
    #[doc(hidden)]
    pub fn from_hash_output(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());
        Self { algorithm, bytes }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex rendering without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_json_shape() {
        let digest = Digest::new(HashAlgorithm::Sha256, vec![0xde; 32]).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(
            json,
            format!(r#"{{"algorithm":"sha-256","digest":"{}"}}"#, "de".repeat(32))
        );

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn test_display() {
        let digest = Digest::new(HashAlgorithm::Blake2b512, vec![0x0a; 64]).unwrap();
        assert_eq!(digest.to_string(), format!("blake2b:{}", "0a".repeat(64)));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert_eq!(
            Digest::new(HashAlgorithm::Sha256, vec![0xaa]),
            Err(Error::DigestLengthMismatch {
                algorithm: "sha-256".to_string(),
                expected: 32,
                actual: 1,
            })
        );
        assert!(Digest::new(HashAlgorithm::Sha3_512, vec![0; 32]).is_err());
        assert!(Digest::new(HashAlgorithm::Sha3_512, vec![0; 64]).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let err = serde_json::from_str::<Digest>(r#"{"algorithm":"sha-256","digest":"aa"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes"), "{}", err);

        let short_blake = format!(r#"{{"algorithm":"blake2b","digest":"{}"}}"#, "00".repeat(32));
        assert!(serde_json::from_str::<Digest>(&short_blake).is_err());
    }
}
