//! Batched fill engine
//!
//! A solid fill streams one color into the address window through a small
//! staging buffer. The buffer is loaded once per fill and resent as many
//! times as needed; the controller auto-increments its write pointer across
//! transfers, so MEMORY_WRITE is issued only once.

use lumen_core::color::Color;
use lumen_core::geometry::Rect;
use lumen_core::state::Orientation;
use lumen_hal::CommandBus;

use super::regs::cmd;
use super::window::write_window;

/// Staging buffer capacity in pixels (also the largest single transfer)
pub const STAGING_PIXELS: usize = 256;

/// Bytes per RGB565 pixel on the wire
const BYTES_PER_PIXEL: usize = 2;

/// Fixed-size pixel staging buffer
///
/// Holds pixels already encoded in wire order. Contents carry no meaning
/// between fills.
#[derive(Clone)]
pub struct StagingBuffer {
    bytes: [u8; STAGING_PIXELS * BYTES_PER_PIXEL],
}

impl Default for StagingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl StagingBuffer {
    /// Create a zeroed buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; STAGING_PIXELS * BYTES_PER_PIXEL],
        }
    }

    /// Load `color` into the first `min(pixels, STAGING_PIXELS)` entries
    ///
    /// Returns the number of entries loaded.
    pub fn load(&mut self, color: Color, pixels: u32) -> usize {
        let count = (pixels as usize).min(STAGING_PIXELS);
        let wire = color.to_be_bytes();
        for entry in self.bytes[..count * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
            entry.copy_from_slice(&wire);
        }
        count
    }

    /// Wire bytes for the first `pixels` entries
    pub fn chunk(&self, pixels: usize) -> &[u8] {
        &self.bytes[..pixels.min(STAGING_PIXELS) * BYTES_PER_PIXEL]
    }
}

/// Transfer sizes (in pixels) for a fill of `total` pixels
///
/// Yields `total / STAGING_PIXELS` full chunks followed by the remainder,
/// if any.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    remaining: u32,
}

impl ChunkPlan {
    /// Plan a fill of `total` pixels
    pub const fn new(total: u32) -> Self {
        Self { remaining: total }
    }

    /// Number of transfers left: `ceil(remaining / STAGING_PIXELS)`
    pub const fn transfers(&self) -> usize {
        self.remaining.div_ceil(STAGING_PIXELS as u32) as usize
    }
}

impl Iterator for ChunkPlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let chunk = self.remaining.min(STAGING_PIXELS as u32);
        self.remaining -= chunk;
        Some(chunk as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.transfers();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkPlan {}

/// Fill `rect` with `color`
///
/// `rect` must already be clipped and non-empty. Programs the window,
/// issues MEMORY_WRITE and streams `ceil(pixels / STAGING_PIXELS)` data
/// transfers.
pub fn fill_window<B: CommandBus>(
    bus: &mut B,
    staging: &mut StagingBuffer,
    rect: Rect,
    orientation: Orientation,
    color: Color,
) -> Result<(), B::Error> {
    let total = rect.pixel_count();
    staging.load(color, total);

    write_window(bus, rect, orientation)?;
    bus.write_command(cmd::MEMORY_WRITE)?;
    for pixels in ChunkPlan::new(total) {
        bus.write_data(staging.chunk(pixels))?;
    }
    Ok(())
}
