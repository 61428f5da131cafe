//! Moneta - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the Moneta finance
//! tracker. Transactions live in a single table backed by whichever storage
//! backend is reachable: a remote spreadsheet when credentials and network
//! allow it, a local CSV file otherwise, and an in-memory table as the last
//! resort. A session never fails to open; it only degrades.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, periods)
//! - `storage`: Backend implementations and the fallback selector
//! - `services`: Session layer over the storage backends
//! - `reports`: Period summaries and balances
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moneta::config::{MonetaPaths, Settings};
//! use moneta::services::Session;
//!
//! let paths = MonetaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::open(&settings, &paths);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MonetaError, MonetaResult};
