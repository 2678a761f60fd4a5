//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::digital::PinState;
use embedded_hal::i2c::I2c;

use super::Lis2dh12Interface;

/// Bus address selected by the level of the SA0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// SA0 tied low: `0x18`.
    #[default]
    Sa0Low,
    /// SA0 tied high: `0x19`.
    Sa0High,
}

impl SlaveAddr {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Sa0Low => 0x18,
            Self::Sa0High => 0x19,
        }
    }
}

impl From<PinState> for SlaveAddr {
    fn from(level: PinState) -> Self {
        match level {
            PinState::Low => Self::Sa0Low,
            PinState::High => Self::Sa0High,
        }
    }
}

/// Resolves a raw logic level: `0` is low, `1` is high, anything else falls
/// back to the low address.
impl From<u8> for SlaveAddr {
    fn from(level: u8) -> Self {
        match level {
            1 => Self::Sa0High,
            _ => Self::Sa0Low,
        }
    }
}

/// I2C-based interface implementation for the LIS2DH12 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the resolved 7-bit bus address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis2dh12Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    // Address phase and data phase are separate transactions with a stop in
    // between, not a repeated start.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c.write(self.address, &[register])?;
        self.i2c.read(self.address, &mut value)?;
        Ok(value[0])
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{I2cInterface, SlaveAddr};
    use crate::interface::Lis2dh12Interface;
    use embedded_hal::digital::PinState;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
    use std::vec;

    #[test]
    fn address_follows_sa0_level() {
        assert_eq!(SlaveAddr::from(PinState::Low).addr(), 0x18);
        assert_eq!(SlaveAddr::from(PinState::High).addr(), 0x19);
        assert_eq!(SlaveAddr::from(0u8).addr(), 0x18);
        assert_eq!(SlaveAddr::from(1u8).addr(), 0x19);
    }

    #[test]
    fn unknown_level_defaults_to_low_address() {
        assert_eq!(SlaveAddr::from(2u8), SlaveAddr::Sa0Low);
        assert_eq!(SlaveAddr::from(0xFFu8), SlaveAddr::Sa0Low);
    }

    #[test]
    fn read_register_writes_address_then_reads_one_byte() {
        let expectations = [
            Transaction::write(0x19, vec![0x0F]),
            Transaction::read(0x19, vec![0x33]),
        ];
        let mut mock = Mock::new(&expectations);
        let mut interface = I2cInterface::new(mock.clone(), SlaveAddr::Sa0High);

        assert_eq!(interface.address(), 0x19);
        assert_eq!(interface.read_register(0x0F).unwrap(), 0x33);
        mock.done();
    }

    #[test]
    fn write_register_sends_address_and_value() {
        let expectations = [Transaction::write(0x18, vec![0x20, 0x27])];
        let mut mock = Mock::new(&expectations);
        let mut interface = I2cInterface::new(mock.clone(), SlaveAddr::Sa0Low);

        interface.write_register(0x20, 0x27).unwrap();
        mock.done();
    }

    #[test]
    fn read_register_skips_data_phase_when_address_is_nacked() {
        let expectations = [Transaction::write(0x18, vec![0x0F]).with_error(ErrorKind::Other)];
        let mut mock = Mock::new(&expectations);
        let mut interface = I2cInterface::new(mock.clone(), SlaveAddr::Sa0Low);

        assert_eq!(interface.read_register(0x0F), Err(ErrorKind::Other));
        mock.done();
    }
}
