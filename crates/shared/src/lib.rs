//! Shared vocabulary, errors, and configuration for ledgertime.
//!
//! This crate provides the pieces every other crate leans on:
//! - Field vocabulary (months, month numbers, quarters, kinds, granularities)
//! - The `TimeError` taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, PeriodSystemConfig};
pub use error::{TimeError, TimeResult};
