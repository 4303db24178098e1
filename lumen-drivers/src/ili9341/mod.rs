//! ILI9341 240x320 TFT controller
//!
//! Drives the panel in 16-bit RGB565 mode over a command/data bus.
//! Reference: ILI9341 datasheet V1.11

mod driver;
pub mod fill;
#[cfg(feature = "graphics")]
mod graphics;
pub mod regs;
pub mod window;

pub use driver::{Ili9341, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use fill::{ChunkPlan, StagingBuffer, STAGING_PIXELS};
