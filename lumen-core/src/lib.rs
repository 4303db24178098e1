//! Board-agnostic core logic for Lumen display drivers
//!
//! This crate contains all display logic that does not depend on a
//! specific controller or board:
//!
//! - RGB565 color type
//! - Rectangles and the clip filter
//! - Display state (orientation, power, backlight, clip) and control requests
//! - Driver configuration
//! - Display and diagnostic traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod geometry;
pub mod state;
pub mod traits;

// Re-export key types
pub use color::Color;
pub use config::{ClipMode, DriverConfig};
pub use geometry::{ClipRect, Rect};
pub use state::{Control, DisplayState, Orientation, PowerMode};
