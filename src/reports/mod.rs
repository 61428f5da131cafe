//! Derived reports over the transaction table

pub mod summary;

pub use summary::{summarize, CategoryTotal, Summary};
