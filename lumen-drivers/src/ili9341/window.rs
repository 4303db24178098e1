//! Address window programming
//!
//! The controller keeps a fixed column/page memory layout. For the rotated
//! orientations the logical x range is programmed into the page register
//! and the logical y range into the column register.

use lumen_core::geometry::Rect;
use lumen_core::state::Orientation;
use lumen_hal::CommandBus;

use super::regs::cmd;

/// Parameter blocks for COLUMN_ADDRESS_SET and PAGE_ADDRESS_SET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowParams {
    /// COLUMN_ADDRESS_SET payload
    pub column: [u8; 4],
    /// PAGE_ADDRESS_SET payload
    pub page: [u8; 4],
}

/// Encode `[start_hi, start_lo, end_hi, end_lo]` with `end = start + extent - 1`
///
/// The end wraps like the controller's 16-bit address registers; callers
/// pass non-empty extents.
pub const fn encode_range(start: u16, extent: u16) -> [u8; 4] {
    let end = start.wrapping_add(extent).wrapping_sub(1);
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

/// Map a logical rectangle onto the controller's address registers
pub fn window_params(rect: Rect, orientation: Orientation) -> WindowParams {
    let x_range = encode_range(rect.x, rect.cx);
    let y_range = encode_range(rect.y, rect.cy);

    if orientation.is_rotated() {
        WindowParams {
            column: y_range,
            page: x_range,
        }
    } else {
        WindowParams {
            column: x_range,
            page: y_range,
        }
    }
}

/// Program the address window for `rect`
pub fn write_window<B: CommandBus>(
    bus: &mut B,
    rect: Rect,
    orientation: Orientation,
) -> Result<(), B::Error> {
    let params = window_params(rect, orientation);
    bus.write_register(cmd::COLUMN_ADDRESS_SET, &params.column)?;
    bus.write_register(cmd::PAGE_ADDRESS_SET, &params.page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusOp, MockBoard};

    #[test]
    fn test_encode_range_big_endian() {
        assert_eq!(encode_range(0, 240), [0x00, 0x00, 0x00, 0xEF]);
        assert_eq!(encode_range(0x0123, 0x0100), [0x01, 0x23, 0x02, 0x22]);
        assert_eq!(encode_range(319, 1), [0x01, 0x3F, 0x01, 0x3F]);
    }

    #[test]
    fn test_upright_maps_directly() {
        let rect = Rect::new(10, 300, 20, 5);
        for orientation in [Orientation::Rotate0, Orientation::Rotate180] {
            let params = window_params(rect, orientation);
            assert_eq!(params.column, [0x00, 10, 0x00, 29]);
            assert_eq!(params.page, [0x01, 0x2C, 0x01, 0x30]);
        }
    }

    #[test]
    fn test_rotated_swaps_registers() {
        let rect = Rect::new(300, 10, 5, 20);
        for orientation in [Orientation::Rotate90, Orientation::Rotate270] {
            let params = window_params(rect, orientation);
            // Column register carries the y range
            assert_eq!(params.column, [0x00, 10, 0x00, 29]);
            // Page register carries the x range
            assert_eq!(params.page, [0x01, 0x2C, 0x01, 0x30]);
        }
    }

    #[test]
    fn test_write_window_sequence() {
        let mut board = MockBoard::new();
        write_window(&mut board, Rect::pixel(1, 2), Orientation::Rotate0).unwrap();

        assert_eq!(
            board.ops,
            vec![
                BusOp::Command(cmd::COLUMN_ADDRESS_SET),
                BusOp::Data(vec![0x00, 0x01, 0x00, 0x01]),
                BusOp::Command(cmd::PAGE_ADDRESS_SET),
                BusOp::Data(vec![0x00, 0x02, 0x00, 0x02]),
            ]
        );
    }
}
