//! Bus interface abstraction for the LIS2DH12 driver.

pub mod i2c;

/// Abstraction over the low-level register access required by the driver.
///
/// Each call is one complete, blocking bus exchange. Nothing here is atomic
/// across calls.
pub trait Lis2dh12Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
