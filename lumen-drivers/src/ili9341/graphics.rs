//! embedded-graphics integration
//!
//! Lets `embedded-graphics` primitives, text and images draw straight onto
//! the controller. Solid fills take the batched path; everything else goes
//! pixel by pixel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use lumen_core::color::Color;
use lumen_core::traits::DiagnosticHook;
use lumen_hal::Board;

use super::driver::Ili9341;

fn to_color(color: Rgb565) -> Color {
    Color::from_raw(color.into_storage())
}

impl<B: Board, H: DiagnosticHook> OriginDimensions for Ili9341<B, H> {
    fn size(&self) -> Size {
        let state = self.state();
        Size::new(state.width() as u32, state.height() as u32)
    }
}

impl<B: Board, H: DiagnosticHook> DrawTarget for Ili9341<B, H> {
    type Color = Rgb565;
    type Error = B::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            self.draw_pixel(x, y, to_color(color))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        // Inside the bounding box, so everything fits in u16
        self.fill_area(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            to_color(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let state = self.state();
        let (width, height) = (state.width(), state.height());
        self.fill_area(0, 0, width, height, to_color(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ili9341::regs::cmd;
    use crate::mock::{BusOp, MockBoard};
    use lumen_core::config::DriverConfig;
    use lumen_core::state::{Control, Orientation};

    fn display() -> Ili9341<MockBoard> {
        let mut display = Ili9341::new(MockBoard::new(), DriverConfig::default());
        display.init().unwrap();
        display.board_mut().clear();
        display
    }

    #[test]
    fn test_size_follows_orientation() {
        let mut display = display();
        assert_eq!(display.size(), Size::new(240, 320));

        display
            .control(Control::Orientation(Orientation::Rotate270))
            .unwrap();
        assert_eq!(display.size(), Size::new(320, 240));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color(Rgb565::RED), Color::RED);
        assert_eq!(to_color(Rgb565::GREEN), Color::GREEN);
        assert_eq!(to_color(Rgb565::BLUE), Color::BLUE);
        assert_eq!(to_color(Rgb565::WHITE), Color::WHITE);
    }

    #[test]
    fn test_draw_iter_skips_negative() {
        let mut display = display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 5), Rgb565::RED),
                Pixel(Point::new(3, -4), Rgb565::RED),
                Pixel(Point::new(3, 4), Rgb565::BLUE),
            ])
            .unwrap();

        assert_eq!(display.board().ops.len(), 6);
        assert_eq!(display.board().ops[4], BusOp::Command(cmd::MEMORY_WRITE));
        assert_eq!(display.board().ops[5], BusOp::Data(vec![0x00, 0x1F]));
    }

    #[test]
    fn test_fill_solid_uses_batched_path() {
        let mut display = display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-10, -10), Size::new(20, 20)),
                Rgb565::RED,
            )
            .unwrap();

        assert_eq!(
            display.board().ops[1],
            BusOp::Data(vec![0x00, 0x00, 0x00, 0x09])
        );
        assert_eq!(display.board().commands_issued(cmd::MEMORY_WRITE), 1);
        assert_eq!(display.board().transfer_sizes_after(5), vec![100]);
    }

    #[test]
    fn test_fill_solid_off_screen() {
        let mut display = display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-30, 0), Size::new(20, 20)),
                Rgb565::RED,
            )
            .unwrap();
        assert!(display.board().ops.is_empty());
    }

    #[test]
    fn test_clear_fills_screen() {
        let mut display = display();
        DrawTarget::clear(&mut display, Rgb565::BLACK).unwrap();

        assert_eq!(display.board().commands_issued(cmd::MEMORY_WRITE), 1);
        assert_eq!(display.board().data_transfers(), 2 + 300);
    }
}
