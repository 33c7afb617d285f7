//! Shared utilities for thali crates.
//!
//! This crate provides the numeric display helpers used by the model and menu
//! crates when rendering prices.

pub mod numeric;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{format_fixed, format_numeric};
