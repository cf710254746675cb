//! The statement import service: bytes -> text -> bank -> transactions ->
//! category suggestions.
//!
//! Construct one [`StatementParser`] at startup and hand it to every call
//! site (by reference or `Arc`); it owns the learned-pattern state that all
//! parses share.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use moneyzen_ingest::{
    default_profiles, extract_transactions, identify_bank, BankProfile, ParsedTransaction,
    TextExtractor,
};
use tracing::{debug, info, warn};

use crate::category_rules::{CategoryRules, Suggestion};
use crate::error::{ImportError, Result};
use crate::learned::{LearnedPatterns, PatternStorage, PATTERNS_KEY};

pub struct StatementParser {
    profiles: Vec<BankProfile>,
    rules: CategoryRules,
    learned: RwLock<LearnedPatterns>,
    storage: Box<dyn PatternStorage>,
    extractor: Box<dyn TextExtractor>,
}

impl StatementParser {
    /// Build with the shipped bank profiles and load learned patterns.
    ///
    /// A missing, unreadable or corrupt store starts empty; only regex
    /// compilation can fail here.
    pub fn new(
        storage: Box<dyn PatternStorage>,
        extractor: Box<dyn TextExtractor>,
    ) -> anyhow::Result<Self> {
        Self::with_profiles(default_profiles()?, storage, extractor)
    }

    pub fn with_profiles(
        profiles: Vec<BankProfile>,
        storage: Box<dyn PatternStorage>,
        extractor: Box<dyn TextExtractor>,
    ) -> anyhow::Result<Self> {
        let learned = load_learned(&*storage);
        Ok(Self {
            profiles,
            rules: CategoryRules::new()?,
            learned: RwLock::new(learned),
            storage,
            extractor,
        })
    }

    pub fn profiles(&self) -> &[BankProfile] {
        &self.profiles
    }

    /// Decode a raw document and parse it.
    pub fn parse_document(&self, raw: &[u8]) -> Result<Vec<ParsedTransaction>> {
        let text = self.extractor.extract_text(raw).map_err(|source| {
            warn!(error = %source, "statement text extraction failed");
            ImportError::Decode { source }
        })?;
        self.parse_text(&text)
    }

    /// Identify the bank, extract its transactions and attach suggestions.
    pub fn parse_text(&self, text: &str) -> Result<Vec<ParsedTransaction>> {
        let bank = identify_bank(&self.profiles, text)?;
        debug!(bank = bank.name, "identified statement bank");

        let mut txns = extract_transactions(text, bank);
        let learned = self.read_learned();
        for txn in &mut txns {
            if let Some(s) = self.rules.suggest(&txn.description, &learned) {
                txn.suggested_category = Some(s.category);
                txn.confidence = Some(s.confidence);
            }
        }
        Ok(txns)
    }

    pub fn suggest_category(&self, description: &str) -> Option<Suggestion> {
        self.rules.suggest(description, &self.read_learned())
    }

    /// Remember `category` for `description` and persist the whole store.
    ///
    /// A failed save is logged only; the association stays in memory. The
    /// write lock is held through the save so concurrent learns persist in
    /// order.
    pub fn learn_pattern(&self, description: &str, category: &str) {
        let mut learned = self.write_learned();
        learned.insert(description, category);

        let saved = learned
            .to_blob()
            .and_then(|blob| self.storage.save(PATTERNS_KEY, &blob));
        match saved {
            Ok(()) => info!(category, patterns = learned.len(), "learned category pattern"),
            Err(e) => warn!(error = %e, "could not persist learned patterns"),
        }
    }

    pub fn learned_count(&self) -> usize {
        self.read_learned().len()
    }

    fn read_learned(&self) -> RwLockReadGuard<'_, LearnedPatterns> {
        self.learned.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_learned(&self) -> RwLockWriteGuard<'_, LearnedPatterns> {
        self.learned.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn load_learned(storage: &dyn PatternStorage) -> LearnedPatterns {
    let blob = match storage.load(PATTERNS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return LearnedPatterns::default(),
        Err(e) => {
            warn!(error = %e, "could not load learned patterns, starting empty");
            return LearnedPatterns::default();
        }
    };

    match LearnedPatterns::from_blob(&blob) {
        Ok(learned) => {
            debug!(patterns = learned.len(), "loaded learned patterns");
            learned
        }
        Err(e) => {
            warn!(error = %e, "ignoring corrupt learned patterns");
            LearnedPatterns::default()
        }
    }
}
