//! API request and response types for the Syve REST API.

pub mod ohlc;

// Re-export all types for convenience
pub use ohlc::*;
