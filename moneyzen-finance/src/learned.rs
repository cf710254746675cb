//! Learned description -> category associations and where they are stored.
//!
//! Keys are lowercased descriptions and only ever match exactly. The
//! persisted form is a JSON array of `[description, category]` pairs.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key the learned patterns live under
pub const PATTERNS_KEY: &str = "statement-import-patterns";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnedPatterns {
    map: HashMap<String, String>,
}

impl LearnedPatterns {
    fn key(description: &str) -> String {
        description.trim().to_lowercase()
    }

    /// Insert or overwrite; returns the previous category for this key
    pub fn insert(&mut self, description: &str, category: &str) -> Option<String> {
        self.map.insert(Self::key(description), category.to_string())
    }

    pub fn get(&self, description: &str) -> Option<&str> {
        self.map.get(&Self::key(description)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn to_blob(&self) -> Result<String> {
        let mut pairs: Vec<(&String, &String)> = self.map.iter().collect();
        pairs.sort();
        Ok(serde_json::to_string(&pairs)?)
    }

    pub fn from_blob(blob: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> =
            serde_json::from_str(blob).context("parse learned patterns")?;
        let mut out = Self::default();
        for (description, category) in pairs {
            out.insert(&description, &category);
        }
        Ok(out)
    }
}

/// Persisted key-value collaborator
pub trait PatternStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, blob: &str) -> Result<()>;
}

/// One `<key>.json` file per key under a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PatternStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let p = self.path_for(key);
        if !p.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        Ok(Some(s))
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        let p = self.path_for(key);
        fs::write(&p, blob).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }
}

/// In-process storage, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, blob: &str) -> Self {
        let storage = Self::default();
        storage.lock().insert(key.to_string(), blob.to_string());
        storage
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PatternStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        self.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
