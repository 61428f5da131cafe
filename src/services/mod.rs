//! Business logic layer for Moneta

pub mod session;

pub use session::{SaveOutcome, Session, TransactionPatch};
