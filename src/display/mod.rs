//! Terminal display formatting

pub mod status;
pub mod summary;
pub mod transaction;

pub use status::{format_backend_badge, format_session_status};
pub use summary::format_summary;
pub use transaction::{format_transaction_register, format_transaction_row};
