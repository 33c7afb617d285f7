//! Thali menu formatting.
//!
//! Each operation comes in two layers:
//!
//! - a typed layer over [`Thali`] records (or any [`MenuItem`]) that takes
//!   explicit [`FormatOptions`];
//! - an untyped layer over JSON-shaped [`serde_json::Value`] input that checks
//!   the shape first and answers rejected input with an empty result
//!   (`""`, `None` or an empty list) instead of an error.
//!
//! Rejections are logged at `debug` level with their reason.

pub mod description;
pub mod receipt;
pub mod search;
pub mod stats;

pub use description::{create_thali_description, describe, describe_with};
pub use receipt::{generate_thali_receipt, render_receipt, render_receipt_with};
pub use search::{search, search_thali_menu};
pub use stats::{get_thali_stats, summarize, summarize_with};

pub use thali_model::{FormatOptions, MenuEntry, MenuItem, Thali, ThaliError, ThaliStats};
