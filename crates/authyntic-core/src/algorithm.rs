//! Hash algorithm identifiers.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash algorithms understood by the digest engine.
///
/// The string identifiers (`sha-256`, `sha-3`, `blake2b`) are the only names
/// accepted across the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "sha-256")]
    Sha256,
    /// SHA3-512.
    #[serde(rename = "sha-3")]
    Sha3_512,
    /// BLAKE2b with a 64-byte output.
    #[serde(rename = "blake2b")]
    Blake2b512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b512,
    ];

    /// The boundary identifier for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha-256",
            HashAlgorithm::Sha3_512 => "sha-3",
            HashAlgorithm::Blake2b512 => "blake2b",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha3_512 | HashAlgorithm::Blake2b512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha-3" => Ok(HashAlgorithm::Sha3_512),
            "blake2b" => Ok(HashAlgorithm::Blake2b512),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifiers() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<HashAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let result = "md5".parse::<HashAlgorithm>();
        assert_eq!(result, Err(Error::UnsupportedAlgorithm("md5".to_string())));

        // Identifiers are exact, not case-folded.
        assert!("SHA-256".parse::<HashAlgorithm>().is_err());
        assert!("sha256".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_serde_uses_boundary_names() {
        let json = serde_json::to_string(&HashAlgorithm::ALL).unwrap();
        assert_eq!(json, r#"["sha-256","sha-3","blake2b"]"#);

        let parsed: HashAlgorithm = serde_json::from_str(r#""sha-3""#).unwrap();
        assert_eq!(parsed, HashAlgorithm::Sha3_512);
    }
}
