//! moneyzen-core: entity types and the backend remote-call seam

pub mod backend;
pub mod finance;
pub mod repository;

pub use backend::{call, Backend, BackendError};
pub use finance::{
    start_of_day_utc, Account, AccountUpdate, Category, CategoryUpdate, NewTransaction, Tag,
    Transaction, TransactionType, TransactionUpdate,
};
pub use repository::{
    AccountRepository, CategoryRepository, TagRepository, TransactionRepository,
};
