//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use core::convert::Infallible;
use embedded_hal::i2c::{ErrorType, I2c, Operation};
use embedded_hal_mock::eh1::i2c::Transaction;
use lis2dh12::interface::i2c::I2cInterface;
use lis2dh12::{Lis2dh12, SlaveAddr};

/// Bus address used by every fixture (SA0 low).
pub const ADDR: u8 = 0x18;

/// One register access observed by [`RegisterFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

/// In-memory LIS2DH12 register space answering the single-byte protocol used
/// by the driver: a one-byte write sets the register pointer, a two-byte write
/// stores a value, a read returns the register under the pointer.
pub struct RegisterFile {
    pub regs: [u8; 0x40],
    pub log: Vec<Access>,
    pointer: usize,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; 0x40],
            log: Vec::new(),
            pointer: 0,
        }
    }

    pub fn with(mut self, register: u8, value: u8) -> Self {
        self.regs[register as usize] = value;
        self
    }

    pub fn writes(&self) -> usize {
        self.log
            .iter()
            .filter(|access| matches!(access, Access::Write(..)))
            .count()
    }
}

impl ErrorType for RegisterFile {
    type Error = Infallible;
}

impl I2c for RegisterFile {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, ADDR, "unexpected bus address");

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    let (&register, payload) = bytes.split_first().expect("empty write");
                    self.pointer = register as usize;
                    if let Some(&value) = payload.first() {
                        assert_eq!(payload.len(), 1, "driver writes one byte at a time");
                        self.regs[self.pointer] = value;
                        self.log.push(Access::Write(register, value));
                    }
                }
                Operation::Read(buf) => {
                    assert_eq!(buf.len(), 1, "driver reads one byte at a time");
                    buf[0] = self.regs[self.pointer];
                    self.log.push(Access::Read(self.pointer as u8));
                }
            }
        }

        Ok(())
    }
}

pub type FakeDevice = Lis2dh12<I2cInterface<RegisterFile>>;

pub fn device(file: RegisterFile) -> FakeDevice {
    Lis2dh12::new_i2c(file, SlaveAddr::Sa0Low)
}

pub fn file(device: &mut FakeDevice) -> &mut RegisterFile {
    device.interface_mut().i2c_mut()
}

/// Expected transactions for a single register read returning `value`.
pub fn read(register: u8, value: u8) -> [Transaction; 2] {
    [
        Transaction::write(ADDR, vec![register]),
        Transaction::read(ADDR, vec![value]),
    ]
}

/// Expected transaction for a single register write.
pub fn write(register: u8, value: u8) -> Transaction {
    Transaction::write(ADDR, vec![register, value])
}
