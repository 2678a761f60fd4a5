//! Strongly typed parameter enumerations for the LIS2DH12 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Each
//! carries its raw field code through [`code`](OutputDataRate::code) and can be
//! recovered from a register read with `from_code`.
//!
//! # Examples
//!
//! ```rust
//! use lis2dh12::params::{HighPassCutoff, HighPassMode, OutputDataRate};
//!
//! let odr = OutputDataRate::Hz10;
//! assert_eq!(odr.code(), 0b0010);
//! assert_eq!(OutputDataRate::from_code(0b0010), Some(odr));
//! let _ = (HighPassMode::NormalWithReset, HighPassCutoff::OdrDiv50);
//! ```

/// Available output data rate (ODR) selections, `CTRL_REG1[7:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputDataRate {
    /// Power-down mode.
    PowerDown = 0b0000,
    /// 1 Hz.
    Hz1 = 0b0001,
    /// 10 Hz.
    Hz10 = 0b0010,
    /// 25 Hz.
    Hz25 = 0b0011,
    /// 50 Hz.
    Hz50 = 0b0100,
    /// 100 Hz.
    Hz100 = 0b0101,
    /// 200 Hz.
    Hz200 = 0b0110,
    /// 400 Hz.
    Hz400 = 0b0111,
    /// 1.620 kHz, low-power mode only.
    Hz1620LowPower = 0b1000,
    /// 1.344 kHz in normal/high-resolution mode, 5.376 kHz in low-power mode.
    Hz1344OrHz5376 = 0b1001,
}

impl OutputDataRate {
    /// Returns the raw field code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a raw field code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0b0000 => Self::PowerDown,
            0b0001 => Self::Hz1,
            0b0010 => Self::Hz10,
            0b0011 => Self::Hz25,
            0b0100 => Self::Hz50,
            0b0101 => Self::Hz100,
            0b0110 => Self::Hz200,
            0b0111 => Self::Hz400,
            0b1000 => Self::Hz1620LowPower,
            0b1001 => Self::Hz1344OrHz5376,
            _ => return None,
        })
    }

    /// Returns the ODR in hertz for the given power mode.
    pub const fn hz(self, low_power: bool) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz1620LowPower => 1_620,
            Self::Hz1344OrHz5376 => {
                if low_power {
                    5_376
                } else {
                    1_344
                }
            }
        }
    }

    /// Returns `true` when the rate is only valid with low-power mode enabled.
    pub const fn requires_low_power(self) -> bool {
        matches!(self, Self::Hz1620LowPower)
    }
}

/// High-pass filter modes encoded in `CTRL_REG2[7:6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HighPassMode {
    /// Normal mode, filter reset by reading `REFERENCE`.
    NormalWithReset = 0b00,
    /// Reference signal for filtering.
    Reference = 0b01,
    /// Normal mode.
    Normal = 0b10,
    /// Autoreset on interrupt event.
    AutoresetOnInterrupt = 0b11,
}

impl HighPassMode {
    /// Returns the raw field code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a raw field code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0b00 => Self::NormalWithReset,
            0b01 => Self::Reference,
            0b10 => Self::Normal,
            0b11 => Self::AutoresetOnInterrupt,
            _ => return None,
        })
    }
}

/// High-pass cutoff selections encoded in `CTRL_REG2[5:4]`.
///
/// Variant names follow the customary `HPCF_ODR_*` constant names and are not
/// divisors. The cutoff frequency depends on the ODR and falls as the code
/// rises; at 10 Hz, code `0b00` gives about 0.2 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HighPassCutoff {
    /// `HPCF_ODR_50`, code `0b00`: highest cutoff.
    OdrDiv50 = 0b00,
    /// `HPCF_ODR_100`, code `0b01`.
    OdrDiv100 = 0b01,
    /// `HPCF_ODR_9`, code `0b10`.
    OdrDiv9 = 0b10,
    /// `HPCF_ODR_400`, code `0b11`: lowest cutoff.
    OdrDiv400 = 0b11,
}

impl HighPassCutoff {
    /// Returns the raw field code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a raw field code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0b00 => Self::OdrDiv50,
            0b01 => Self::OdrDiv100,
            0b10 => Self::OdrDiv9,
            0b11 => Self::OdrDiv400,
            _ => return None,
        })
    }
}

/// Full-scale selections encoded in `CTRL_REG4[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FullScale {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl FullScale {
    /// Returns the raw field code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a raw field code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            0b11 => Self::G16,
            _ => return None,
        })
    }
}
