//! Lumen Board Abstraction Layer
//!
//! This crate defines the narrow interface between display controller
//! drivers and the board they are wired to. A board provides a command/data
//! bus plus a handful of control primitives (reset line, delays, backlight).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Graphics layer (embedded-graphics etc) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-drivers (ILI9341, ...)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ SPI + GPIO    │       │ parallel FSMC │
//! │ (embedded-hal)│       │ (board crate) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::CommandBus`] - Command byte / data buffer writes
//! - [`board::Board`] - Reset pin, delays and backlight

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod bus;

// Re-export key traits at crate root for convenience
pub use board::Board;
pub use bus::CommandBus;
