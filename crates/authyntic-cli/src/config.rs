//! CLI settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use authyntic::core::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Defaults that command-line flags can override.
///
/// Loaded from an optional JSON file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Algorithms used by `digest` when no `--algorithm` is given
    pub algorithms: Vec<HashAlgorithm>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithms: HashAlgorithm::ALL.to_vec(),
            pretty: true,
        }
    }
}

impl Settings {
    /// Read settings from `path`, or return the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&raw)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize `value` as JSON honoring `pretty`.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.algorithms, HashAlgorithm::ALL.to_vec());
        assert!(settings.pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse(r#"{"algorithms": ["blake2b"]}"#).unwrap();
        assert_eq!(settings.algorithms, vec![HashAlgorithm::Blake2b512]);
        assert!(settings.pretty);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Settings::parse(r#"{"algorithms": ["md5"]}"#).is_err());
    }

    #[test]
    fn test_compact_json() {
        let settings = Settings {
            pretty: false,
            ..Settings::default()
        };
        assert_eq!(settings.to_json(&vec![1, 2]).unwrap(), "[1,2]");
    }
}
