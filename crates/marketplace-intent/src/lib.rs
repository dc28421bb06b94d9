//! Visitor intent classification for the business marketplace.
//!
//! The [`intent`] module holds the pure classification engine; the remaining
//! modules carry the configuration, error and telemetry plumbing shared with
//! the HTTP service.

pub mod config;
pub mod error;
pub mod intent;
pub mod telemetry;
