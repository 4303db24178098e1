//! Display controller drivers
//!
//! This crate provides concrete implementations of the traits defined
//! in lumen-core:
//!
//! - ILI9341 240x320 TFT controller (RGB565)
//! - Four-wire SPI board built on embedded-hal
//! - embedded-graphics `DrawTarget` (feature `graphics`)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ili9341;
pub mod spi;

#[cfg(test)]
mod mock;

pub use ili9341::Ili9341;
pub use spi::{BoardError, SpiBoard};
