use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;

pub fn moneyzen_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".moneyzen"))
}

pub fn ensure_moneyzen_home() -> Result<PathBuf> {
    let dir = moneyzen_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Where learned patterns are kept: `storage.data_dir` if set, else ~/.moneyzen
pub fn data_dir(cfg: &Config) -> Result<PathBuf> {
    match cfg.storage.data_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
        _ => ensure_moneyzen_home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSection;

    #[test]
    fn test_configured_data_dir_wins() {
        let cfg = Config {
            storage: StorageSection {
                data_dir: Some("/tmp/moneyzen-data".to_string()),
            },
            ..Config::default()
        };
        assert_eq!(data_dir(&cfg).unwrap(), PathBuf::from("/tmp/moneyzen-data"));
    }
}
