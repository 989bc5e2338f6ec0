//! Command/data bus to the panel controller

/// Byte link to the panel controller, with the command/data select line
/// folded in
///
/// Implemented by the drivers crate on top of an SPI transport and a GPIO
/// pin; tests implement it directly to record traffic.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send a command byte (blocking)
    fn command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send a parameter/data byte (blocking)
    fn data(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Queue a data byte without waiting for it to go out
    ///
    /// Callers check [`is_ready`](Self::is_ready) first.
    fn data_async(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// True when another queued data byte can be accepted
    fn is_ready(&self) -> bool;

    /// Wait for the last queued byte to finish and drain what it clocked in
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Send a command followed by its parameter bytes
    fn command_with_data(&mut self, cmd: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.command(cmd)?;
        for &byte in data {
            self.data(byte)?;
        }
        Ok(())
    }
}
