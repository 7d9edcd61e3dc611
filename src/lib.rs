//! FinFlow - Terminal-based personal finance ledger
//!
//! FinFlow tracks income, expenses, savings deposits, goals, and debts, and
//! aggregates them into period summaries, budget-variance reports, a
//! composite financial health score, and debt payoff projections.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, money, periods, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Record lifecycle (validated append, list, delete)
//! - `reports`: The financial computation engine
//! - `display`: Terminal formatting and tables
//! - `export`: CSV export
//! - `sample`: Demo ledger seeding
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finflow::config::{FinFlowPaths, Settings};
//! use finflow::storage::Storage;
//!
//! let paths = FinFlowPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod sample;
pub mod services;
pub mod storage;

pub use error::{FinFlowError, FinFlowResult};
