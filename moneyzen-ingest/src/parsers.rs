//! Bank-specific statement profiles

pub mod banca_transilvania;
pub mod bcr;
pub mod ing;
