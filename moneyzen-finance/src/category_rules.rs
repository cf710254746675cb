//! Deterministic category suggestions for statement descriptions.
//!
//! Priority: learned exact match > keyword table > fallback regexes >
//! no suggestion. Keyword table order is the tie-break when a description
//! hits keywords from several categories.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::learned::LearnedPatterns;

pub const LEARNED_CONFIDENCE: u8 = 100;
pub const KEYWORD_CONFIDENCE: u8 = 80;
pub const FALLBACK_CONFIDENCE: u8 = 70;

/// Category name -> merchant/service substrings (lowercase), in priority order
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Food",
        &["kaufland", "lidl", "mega", "carrefour", "auchan", "profi", "penny", "glovo", "foodpanda", "tazz"],
    ),
    (
        "Transport",
        &["omv", "petrom", "mol", "rompetrol", "lukoil", "uber", "bolt", "stb", "metrorex"],
    ),
    (
        "Utilities",
        &["enel", "engie", "eon", "digi", "orange", "vodafone", "telekom", "apa nova"],
    ),
    (
        "Entertainment",
        &["netflix", "spotify", "hbo", "cinema", "teatru", "steam", "playstation"],
    ),
    (
        "Health",
        &["farmacia", "catena", "helpnet", "sensiblu", "medlife", "regina maria"],
    ),
    (
        "Shopping",
        &["emag", "altex", "flanco", "dedeman", "ikea", "h&m", "zara", "decathlon"],
    ),
    (
        "Restaurant",
        &["restaurant", "pizzeria", "mcdonalds", "kfc", "starbucks", "tucano"],
    ),
    ("Transfer", &["transfer", "revolut", "paypal", "wise"]),
    ("Cash", &["atm", "retragere", "numerar", "bancomat"]),
    ("Salary", &["salariu", "salary", "venit", "income"]),
];

/// A suggested category and how sure we are about it (0-100)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub confidence: u8,
}

impl Suggestion {
    fn new(category: &str, confidence: u8) -> Self {
        Self {
            category: category.to_string(),
            confidence,
        }
    }
}

/// Keyword table plus the compiled fallback patterns
#[derive(Debug, Clone)]
pub struct CategoryRules {
    keywords: &'static [(&'static str, &'static [&'static str])],
    fallbacks: Vec<(Regex, &'static str)>,
}

impl CategoryRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            keywords: CATEGORY_KEYWORDS,
            fallbacks: vec![
                (Regex::new(r"restaurant|pizza|burger|kebab")?, "Restaurant"),
                (Regex::new(r"taxi|uber|bolt")?, "Transport"),
            ],
        })
    }

    /// Suggest a category for `description`, consulting `learned` first.
    ///
    /// `None` means nothing matched; there is no zero-confidence suggestion.
    pub fn suggest(&self, description: &str, learned: &LearnedPatterns) -> Option<Suggestion> {
        let desc = description.to_lowercase();

        // A blank learned category counts as a miss
        if let Some(category) = learned.get(&desc).filter(|c| !c.is_empty()) {
            return Some(Suggestion::new(category, LEARNED_CONFIDENCE));
        }

        if let Some(category) = self.keyword_match(&desc) {
            return Some(Suggestion::new(category, KEYWORD_CONFIDENCE));
        }

        self.fallbacks
            .iter()
            .find(|(re, _)| re.is_match(&desc))
            .map(|(_, category)| Suggestion::new(category, FALLBACK_CONFIDENCE))
    }

    fn keyword_match(&self, lower_desc: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower_desc.contains(w)))
            .map(|(category, _)| *category)
    }

    /// Category names in table order
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keywords.iter().map(|(category, _)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> CategoryRules {
        CategoryRules::new().unwrap()
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let s = rules().suggest("LIDL ROMANIA", &LearnedPatterns::default()).unwrap();
        assert_eq!(s, Suggestion::new("Food", KEYWORD_CONFIDENCE));
    }

    #[test]
    fn test_first_category_in_table_wins() {
        // glovo (Food) and uber (Transport) both present
        let s = rules().suggest("UBER EATS VIA GLOVO", &LearnedPatterns::default()).unwrap();
        assert_eq!(s.category, "Food");
        assert_eq!(s.confidence, 80);
    }

    #[test]
    fn test_learned_beats_keywords() {
        let mut learned = LearnedPatterns::default();
        learned.insert("LIDL ROMANIA", "Household");
        let s = rules().suggest("lidl romania", &learned).unwrap();
        assert_eq!(s, Suggestion::new("Household", LEARNED_CONFIDENCE));
    }

    #[test]
    fn test_learned_is_exact_match_only() {
        let mut learned = LearnedPatterns::default();
        learned.insert("lidl", "Household");
        let s = rules().suggest("lidl romania", &learned).unwrap();
        assert_eq!(s.category, "Food");
    }

    #[test]
    fn test_fallback_patterns() {
        let r = rules();
        let none = LearnedPatterns::default();
        assert_eq!(
            r.suggest("KEBAB HOUSE", &none),
            Some(Suggestion::new("Restaurant", FALLBACK_CONFIDENCE))
        );
        assert_eq!(
            r.suggest("TAXI MERCUR", &none),
            Some(Suggestion::new("Transport", FALLBACK_CONFIDENCE))
        );
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(rules().suggest("CHIRIE APARTAMENT", &LearnedPatterns::default()), None);
    }

    #[test]
    fn test_categories_in_table_order() {
        let cats: Vec<_> = rules().categories().collect();
        assert_eq!(cats.first(), Some(&"Food"));
        assert_eq!(cats.last(), Some(&"Salary"));
        assert_eq!(cats.len(), 10);
    }

    #[test]
    fn test_blank_learned_category_falls_through() {
        let mut learned = LearnedPatterns::default();
        learned.insert("LIDL ROMANIA", "");
        learned.insert("CHIRIE APARTAMENT", "");

        let r = rules();
        assert_eq!(
            r.suggest("LIDL ROMANIA", &learned),
            Some(Suggestion::new("Food", KEYWORD_CONFIDENCE))
        );
        assert_eq!(r.suggest("chirie apartament", &learned), None);
    }
}
