//! Four-wire SPI board
//!
//! Connects the controller through an `embedded-hal` SPI device plus a
//! data/command select line, an active-low reset line and a PWM backlight.
//!
//! ```text
//!   SpiDevice ──► MOSI / SCK / CS
//!   DC pin    ──► low = command, high = data
//!   RST pin   ──► low = reset held
//!   PWM       ──► backlight (duty in percent)
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal::spi::SpiDevice;

use lumen_core::state::BACKLIGHT_MAX;
use lumen_hal::{Board, CommandBus};

/// SPI board errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// SPI transfer failed
    Bus,
    /// Data/command or reset line could not be driven
    Pin,
    /// Backlight PWM rejected the duty cycle
    Backlight,
}

/// Board wired over four-wire SPI
pub struct SpiBoard<SPI, DC, RST, BL, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    backlight: BL,
    delay: D,
}

impl<SPI, DC, RST, BL, D> SpiBoard<SPI, DC, RST, BL, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: SetDutyCycle,
    D: DelayNs,
{
    /// Create a board from its peripherals
    pub fn new(spi: SPI, dc: DC, rst: RST, backlight: BL, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
            delay,
        }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, DC, RST, BL, D) {
        (self.spi, self.dc, self.rst, self.backlight, self.delay)
    }
}

impl<SPI, DC, RST, BL, D> CommandBus for SpiBoard<SPI, DC, RST, BL, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: SetDutyCycle,
    D: DelayNs,
{
    type Error = BoardError;

    fn write_command(&mut self, command: u8) -> Result<(), BoardError> {
        self.dc.set_low().map_err(|_| BoardError::Pin)?;
        self.spi.write(&[command]).map_err(|_| BoardError::Bus)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), BoardError> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| BoardError::Pin)?;
        self.spi.write(data).map_err(|_| BoardError::Bus)
    }
}

impl<SPI, DC, RST, BL, D> Board for SpiBoard<SPI, DC, RST, BL, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: SetDutyCycle,
    D: DelayNs,
{
    fn init_board(&mut self) -> Result<(), BoardError> {
        self.rst.set_high().map_err(|_| BoardError::Pin)?;
        self.dc.set_high().map_err(|_| BoardError::Pin)
    }

    fn set_reset_pin(&mut self, active: bool) -> Result<(), BoardError> {
        let result = if active {
            self.rst.set_low()
        } else {
            self.rst.set_high()
        };
        result.map_err(|_| BoardError::Pin)
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn set_backlight(&mut self, percent: u8) -> Result<u8, BoardError> {
        let percent = percent.min(BACKLIGHT_MAX);
        self.backlight
            .set_duty_cycle_percent(percent)
            .map_err(|_| BoardError::Backlight)?;
        Ok(percent)
    }
}
