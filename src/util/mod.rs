//! Utility functions module
//!
//! Contains helper functions for elapsed-time display and number formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{format_elapsed, format_ratio, parse_elapsed, truncate_to_seconds};
