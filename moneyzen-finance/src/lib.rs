//! moneyzen-finance: category suggestions, learned patterns, the statement
//! parser service and backend import

pub mod category_rules;
pub mod error;
pub mod import;
pub mod learned;
pub mod parser;

pub use category_rules::{CategoryRules, Suggestion};
pub use error::ImportError;
pub use import::{import_transactions, ImportSummary};
pub use learned::{JsonFileStorage, LearnedPatterns, MemoryStorage, PatternStorage, PATTERNS_KEY};
pub use parser::StatementParser;
