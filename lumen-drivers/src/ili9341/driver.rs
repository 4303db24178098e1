//! ILI9341 low-level driver
//!
//! Owns the board, the display state and the staging buffer. Draw requests
//! pass through the clip filter, program the address window and stream
//! pixel data; control requests update the state and the scan-direction
//! register.

use lumen_core::color::Color;
use lumen_core::config::{ClipMode, DriverConfig};
use lumen_core::geometry::Rect;
use lumen_core::state::{Control, DisplayState, Orientation, PowerMode, BACKLIGHT_MAX};
use lumen_core::traits::{Diagnostic, DiagnosticHook, NoDiagnostics, PixelDisplay};
use lumen_hal::Board;

use super::fill::{fill_window, StagingBuffer};
use super::regs::{self, cmd};
use super::window::write_window;

/// Panel width at 0° (the controller is only used with 240x320 panels)
pub const SCREEN_WIDTH: u16 = 240;

/// Panel height at 0°
pub const SCREEN_HEIGHT: u16 = 320;

/// ILI9341 driver
///
/// - `B`: board providing the command/data bus, reset line and backlight
/// - `H`: observer for discarded/clipped draws and rejected controls
pub struct Ili9341<B, H = NoDiagnostics> {
    board: B,
    config: DriverConfig,
    state: DisplayState,
    staging: StagingBuffer,
    hook: H,
}

impl<B: Board> Ili9341<B, NoDiagnostics> {
    /// Create a driver; call [`Ili9341::init`] before drawing
    pub fn new(board: B, config: DriverConfig) -> Self {
        Self::with_diagnostics(board, config, NoDiagnostics)
    }
}

impl<B: Board, H: DiagnosticHook> Ili9341<B, H> {
    /// Create a driver that reports silent no-ops to `hook`
    pub fn with_diagnostics(board: B, config: DriverConfig, hook: H) -> Self {
        Self {
            board,
            config: config.normalized(),
            state: DisplayState::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            staging: StagingBuffer::new(),
            hook,
        }
    }

    /// Reset and configure the controller
    ///
    /// Hardware reset, pixel format and function control, sleep out, display
    /// on, initial backlight, then 0° orientation. Timing follows the
    /// datasheet minimums.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.board.init_board()?;

        self.board.set_reset_pin(true)?;
        self.board.sleep_ms(regs::RESET_PULSE_MS);
        self.board.set_reset_pin(false)?;
        self.board.sleep_ms(regs::RESET_SETTLE_MS);

        self.board
            .write_register(cmd::PIXEL_FORMAT_SET, &[regs::PIXEL_FORMAT_16BPP])?;
        self.board
            .write_register(cmd::DISPLAY_FUNCTION_CTL, &regs::DISPLAY_FUNCTION_PARAMS)?;

        self.board.write_command(cmd::SLEEP_OUT)?;
        self.board.sleep_ms(regs::SLEEP_OUT_MS);
        self.board.write_command(cmd::DISPLAY_ON)?;

        let _applied = self.board.set_backlight(self.config.initial_backlight)?;
        self.set_orientation(Orientation::Rotate0)?;
        self.state.mark_initialized(&self.config);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ILI9341 initialized: backlight {}% (applied {}%)",
            self.config.initial_backlight,
            _applied
        );

        Ok(())
    }

    /// Set one pixel
    ///
    /// Out-of-clip coordinates are silently ignored.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), B::Error> {
        let Some(rect) = self.visible(Rect::pixel(x, y)) else {
            return Ok(());
        };

        write_window(&mut self.board, rect, self.state.orientation())?;
        self.board
            .write_register(cmd::MEMORY_WRITE, &color.to_be_bytes())
    }

    /// Fill a rectangle with one color
    ///
    /// The request is trimmed to the clip; if nothing is left, nothing is
    /// sent.
    pub fn fill_area(
        &mut self,
        x: u16,
        y: u16,
        cx: u16,
        cy: u16,
        color: Color,
    ) -> Result<(), B::Error> {
        let Some(rect) = self.visible(Rect::new(x, y, cx, cy)) else {
            return Ok(());
        };

        fill_window(
            &mut self.board,
            &mut self.staging,
            rect,
            self.state.orientation(),
            color,
        )
    }

    /// Apply a control request
    pub fn control(&mut self, request: Control) -> Result<(), B::Error> {
        match request {
            Control::Power(mode) => {
                self.set_power(mode);
                Ok(())
            }
            Control::Orientation(orientation) => self.set_orientation(orientation),
            Control::Backlight(level) => self.set_backlight(level),
        }
    }

    /// Apply a raw `(opcode, value)` control pair
    ///
    /// Pairs that do not decode are ignored.
    pub fn control_raw(&mut self, what: u16, value: u32) -> Result<(), B::Error> {
        match Control::decode(what, value) {
            Some(request) => self.control(request),
            None => {
                self.hook.report(Diagnostic::UnknownControl { what, value });
                Ok(())
            }
        }
    }

    /// Restrict drawing to `rect` (intersected with the screen)
    ///
    /// The clip resets to the full screen on every orientation change.
    pub fn set_clip(&mut self, rect: Rect) {
        self.state.set_clip(rect);
    }

    /// Allow drawing anywhere on the screen
    pub fn reset_clip(&mut self) {
        self.state.reset_clip();
    }

    /// Current display state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Access the underlying board
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutable access to the underlying board
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Access the diagnostic hook
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Give the board back
    pub fn release(self) -> B {
        self.board
    }

    /// Apply the clip filter (if enabled) to a request
    fn visible(&mut self, requested: Rect) -> Option<Rect> {
        let visible = match self.config.clipping {
            ClipMode::Enabled => self.state.clip().filter(requested),
            ClipMode::Disabled => Some(requested).filter(|r| !r.is_empty()),
        };

        match visible {
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ILI9341 draw discarded: {}", requested);
                self.hook.report(Diagnostic::Discarded { requested });
            }
            Some(drawn) if drawn != requested => {
                self.hook.report(Diagnostic::Clipped { requested, drawn });
            }
            Some(_) => {}
        }

        visible
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<(), B::Error> {
        self.board.write_register(
            cmd::MEMORY_ACCESS_CONTROL,
            &[regs::scan_direction(orientation)],
        )?;
        self.state.set_orientation(orientation);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ILI9341 orientation {}: {}x{}",
            orientation,
            self.state.width(),
            self.state.height()
        );

        Ok(())
    }

    fn set_power(&mut self, mode: PowerMode) {
        // Low-power register sequencing is board specific and not driven
        // here; only the mode is tracked.
        if !self.state.set_power(mode) {
            self.hook.report(Diagnostic::PowerUnchanged(mode));
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("ILI9341 power mode {}", mode);
    }

    fn set_backlight(&mut self, level: u8) -> Result<(), B::Error> {
        let level = level.min(BACKLIGHT_MAX);
        self.board.set_backlight(level)?;
        self.state.set_backlight(level);
        Ok(())
    }
}

impl<B: Board, H: DiagnosticHook> PixelDisplay for Ili9341<B, H> {
    type Error = B::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ili9341::init(self)
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Self::Error> {
        Ili9341::draw_pixel(self, x, y, color)
    }

    fn fill_area(
        &mut self,
        x: u16,
        y: u16,
        cx: u16,
        cy: u16,
        color: Color,
    ) -> Result<(), Self::Error> {
        Ili9341::fill_area(self, x, y, cx, cy, color)
    }

    fn control(&mut self, request: Control) -> Result<(), Self::Error> {
        Ili9341::control(self, request)
    }

    fn width(&self) -> u16 {
        self.state.width()
    }

    fn height(&self) -> u16 {
        self.state.height()
    }
}
