use crate::algorithm::HashMethod;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/hashcmp/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashcmpConfig {
    /// Algorithm used when `--hash_method` is not given.
    #[serde(default)]
    pub default_hash_method: HashMethod,
}

/// Location of an existing config file, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hashcmp")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk. A missing file yields the defaults; the file
/// is never created.
pub fn load() -> Result<HashcmpConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(HashcmpConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<HashcmpConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HashcmpConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HashcmpConfig::default();
        assert_eq!(cfg.default_hash_method, HashMethod::Sha256);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HashcmpConfig {
            default_hash_method: HashMethod::Sha1,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert!(toml.contains("default_hash_method = \"sha1\""));
        let parsed: HashcmpConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: HashcmpConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, HashcmpConfig::default());
    }

    #[test]
    fn config_rejects_unknown_method() {
        let res: Result<HashcmpConfig, _> = toml::from_str(r#"default_hash_method = "md5""#);
        assert!(res.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_hash_method = \"sha1\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.default_hash_method, HashMethod::Sha1);
    }

    #[test]
    fn load_from_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_hash_method = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("config.toml"));
    }
}
