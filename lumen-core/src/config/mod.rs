//! Configuration types
//!
//! Board-agnostic driver settings, optionally stored as postcard binary data.

pub mod types;

pub use types::*;
