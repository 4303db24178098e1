//! Command/data bus abstraction
//!
//! Display controllers in the MIPI DBI family are programmed by sending a
//! single command byte followed by zero or more parameter/data bytes. How the
//! two are told apart (a D/C line, a 9th bit, an address offset on a parallel
//! bus) is the board's business.

/// Write-only command/data bus
///
/// All transfers are synchronous: each call returns once the bytes are on
/// the wire.
pub trait CommandBus {
    /// Error type for bus operations
    ///
    /// Boards whose transfers cannot fail use `core::convert::Infallible`.
    type Error;

    /// Issue a single command byte
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Write data bytes following the most recent command
    ///
    /// Consecutive calls continue the same command; the controller keeps its
    /// internal write pointer between them.
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Issue a command followed by its parameter block
    fn write_register(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.write_command(command)?;
        if params.is_empty() {
            return Ok(());
        }
        self.write_data(params)
    }
}
