//! Register map definitions for the LIS2DH12 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Register address of `STATUS_REG_AUX`.
pub const REG_STATUS_REG_AUX: u8 = 0x07;
/// Register address of `OUT_TEMP_L`.
pub const REG_OUT_TEMP_L: u8 = 0x0C;
/// Register address of `OUT_TEMP_H`.
pub const REG_OUT_TEMP_H: u8 = 0x0D;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `TEMP_CFG_REG`.
pub const REG_TEMP_CFG: u8 = 0x1F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `REFERENCE`.
pub const REG_REFERENCE: u8 = 0x26;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;

/// Expected content of `WHO_AM_I`.
pub const EXPECTED_WHO_AM_I: u8 = 0x33;

// STATUS_REG_AUX
/// Temperature data overrun.
pub const TOR_MASK: u8 = 0x40;
/// Temperature data available.
pub const TDA_MASK: u8 = 0x04;

// TEMP_CFG_REG
/// Temperature sensor enable (both `TEMP_EN` bits).
pub const TEMP_EN_MASK: u8 = 0xC0;

// CTRL_REG1
/// Low-power mode enable.
pub const LPEN_MASK: u8 = 0x08;
/// Z-axis enable.
pub const Z_EN_MASK: u8 = 0x04;
/// Y-axis enable.
pub const Y_EN_MASK: u8 = 0x02;
/// X-axis enable.
pub const X_EN_MASK: u8 = 0x01;
/// All three axis enable bits.
pub const XYZ_EN_MASK: u8 = X_EN_MASK | Y_EN_MASK | Z_EN_MASK;

// CTRL_REG2
/// Filtered data selection for the output registers.
pub const FDS_MASK: u8 = 0x08;
/// High-pass filter on the click function.
pub const HPCLICK_MASK: u8 = 0x04;
/// High-pass filter on interrupt generator 2.
pub const HP_IA2_MASK: u8 = 0x02;
/// High-pass filter on interrupt generator 1.
pub const HP_IA1_MASK: u8 = 0x01;

// CTRL_REG3
/// Click interrupt on INT1.
pub const I1_CLICK: u8 = 0x80;
/// Interrupt generator 1 on INT1.
pub const I1_IA1: u8 = 0x40;
/// Interrupt generator 2 on INT1.
pub const I1_IA2: u8 = 0x20;
/// XYZ data ready on INT1.
pub const I1_ZYXDA: u8 = 0x10;
/// FIFO watermark on INT1.
pub const I1_WTM: u8 = 0x04;
/// FIFO overrun on INT1.
pub const I1_OVERRUN: u8 = 0x02;
/// No interrupt source routed to INT1.
pub const I1_NONE: u8 = 0x00;

// CTRL_REG4
/// Block data update.
pub const BDU_MASK: u8 = 0x80;
/// High-resolution output mode.
pub const HR_MASK: u8 = 0x08;

/// A multi-bit setting living in a shifted sub-range of one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Register holding the field.
    pub register: u8,
    /// Bits the field occupies, in register position.
    pub mask: u8,
    /// Position of the field's least significant bit.
    pub shift: u8,
    /// Largest legal logical value.
    pub max: u8,
}

impl Field {
    /// Creates a field descriptor.
    pub const fn new(register: u8, mask: u8, shift: u8, max: u8) -> Self {
        Self {
            register,
            mask,
            shift,
            max,
        }
    }

    /// Shifts a logical value into register position, or `None` when it exceeds
    /// [`Field::max`].
    pub const fn encode(&self, value: u8) -> Option<u8> {
        if value > self.max {
            None
        } else {
            Some((value << self.shift) & self.mask)
        }
    }

    /// Extracts the logical value from a raw register byte.
    pub const fn decode(&self, raw: u8) -> u8 {
        (raw & self.mask) >> self.shift
    }
}

/// Output data rate, `CTRL_REG1[7:4]`.
pub const ODR_FIELD: Field = Field::new(REG_CTRL_REG1, 0xF0, 4, 9);
/// High-pass filter mode, `CTRL_REG2[7:6]`.
pub const HPM_FIELD: Field = Field::new(REG_CTRL_REG2, 0xC0, 6, 3);
/// High-pass cutoff frequency, `CTRL_REG2[5:4]`.
pub const HPCF_FIELD: Field = Field::new(REG_CTRL_REG2, 0x30, 4, 3);
/// Full-scale selection, `CTRL_REG4[5:4]`.
pub const FS_FIELD: Field = Field::new(REG_CTRL_REG4, 0x30, 4, 3);

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register: From<u8> + Into<u8> + Copy {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
}

/// Bitfield representation of the `STATUS_REG_AUX` register (address `0x07`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAux {
    #[skip]
    __: B2,
    // New temperature data available (bit 2).
    pub temperature_available: bool,
    #[skip]
    __: B3,
    // Temperature data overwritten before being read (bit 6).
    pub temperature_overrun: bool,
    #[skip]
    __: B1,
}

impl From<u8> for StatusAux {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<StatusAux> for u8 {
    fn from(value: StatusAux) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG3` register (address `0x22`):
/// interrupt sources routed to the INT1 pin.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int1Sources {
    #[skip]
    __: B1,
    // FIFO overrun (bit 1).
    pub overrun: bool,
    // FIFO watermark (bit 2).
    pub watermark: bool,
    #[skip]
    __: B1,
    // XYZ data ready (bit 4).
    pub data_ready: bool,
    // Interrupt generator 2 (bit 5).
    pub ia2: bool,
    // Interrupt generator 1 (bit 6).
    pub ia1: bool,
    // Click (bit 7).
    pub click: bool,
}

impl From<u8> for Int1Sources {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Int1Sources> for u8 {
    fn from(value: Int1Sources) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for StatusAux {
    const ADDRESS: u8 = REG_STATUS_REG_AUX;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
}

impl Register for Int1Sources {
    const ADDRESS: u8 = REG_CTRL_REG3;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
}
