//! Configuration and path management for Moneta

pub mod paths;
pub mod settings;

pub use paths::MonetaPaths;
pub use settings::Settings;
