//! Validation utilities for advertising campaign data.
//!
//! Pure, synchronous checks for campaign and keyword update payloads
//! (budgets, bids, statuses, keyword text), currency/micros conversion,
//! and a stateless daily-quota calculation. Run these before applying
//! changes to the ads platform; nothing here performs I/O or mutates state.

pub mod cli;
pub mod config;
pub mod currency;
pub mod error;
pub mod models;
pub mod quota;
pub mod validation;

pub use error::{Error, Result};
