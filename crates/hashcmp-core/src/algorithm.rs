//! Supported digest algorithms.
//!
//! The set is closed: every algorithm is a variant of [`HashMethod`] and maps
//! to exactly one hasher. Names are the lowercase identifiers used on the
//! command line and in `config.toml`.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Hash algorithm selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashMethod {
    Sha1,
    #[default]
    Sha256,
}

impl HashMethod {
    /// Every supported algorithm, in the order shown to users.
    pub const ALL: [HashMethod; 2] = [HashMethod::Sha1, HashMethod::Sha256];

    pub fn name(self) -> &'static str {
        match self {
            HashMethod::Sha1 => "sha1",
            HashMethod::Sha256 => "sha256",
        }
    }

    /// Hash `data` and return the digest as lowercase hex.
    pub fn digest(self, data: &[u8]) -> String {
        match self {
            HashMethod::Sha1 => hex::encode(Sha1::digest(data)),
            HashMethod::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }

    /// Length of the hex digest in characters.
    pub fn hex_len(self) -> usize {
        match self {
            HashMethod::Sha1 => 40,
            HashMethod::Sha256 => 64,
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of [`HashMethod::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported hash method `{0}` (expected one of: sha1, sha256)")]
pub struct UnknownHashMethod(pub String);

impl FromStr for HashMethod {
    type Err = UnknownHashMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownHashMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sha256() {
        assert_eq!(HashMethod::default(), HashMethod::Sha256);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("sha1".parse::<HashMethod>().unwrap(), HashMethod::Sha1);
        assert_eq!("sha256".parse::<HashMethod>().unwrap(), HashMethod::Sha256);
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_case() {
        assert_eq!(
            "md5".parse::<HashMethod>(),
            Err(UnknownHashMethod("md5".to_string()))
        );
        assert!("SHA256".parse::<HashMethod>().is_err());
        assert!("".parse::<HashMethod>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for m in HashMethod::ALL {
            assert_eq!(m.to_string(), m.name());
        }
    }

    #[test]
    fn sha256_known_digest() {
        assert_eq!(
            HashMethod::Sha256.digest(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn sha1_known_digest() {
        assert_eq!(
            HashMethod::Sha1.digest(b"hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn digest_length_matches_algorithm() {
        for m in HashMethod::ALL {
            let d = m.digest(b"some bytes");
            assert_eq!(d.len(), m.hex_len());
            assert!(d.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
}
