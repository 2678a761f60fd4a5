//! Configuration primitives for the LIS2DH12 driver.

use crate::params::{HighPassCutoff, HighPassMode, OutputDataRate};
use crate::registers::{Int1Sources, X_EN_MASK, Y_EN_MASK, Z_EN_MASK};

/// Axis enable selection for `CTRL_REG1[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    /// X-axis enabled.
    pub x: bool,
    /// Y-axis enabled.
    pub y: bool,
    /// Z-axis enabled.
    pub z: bool,
}

impl Axes {
    /// All three axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    /// Returns the enable bits in register position.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.x {
            bits |= X_EN_MASK;
        }
        if self.y {
            bits |= Y_EN_MASK;
        }
        if self.z {
            bits |= Z_EN_MASK;
        }
        bits
    }
}

/// User-facing configuration for the LIS2DH12 sensor.
///
/// [`Config::default()`] is the baseline applied by
/// [`Lis2dh12::init`](crate::Lis2dh12::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Output data rate selection.
    pub odr: OutputDataRate,
    /// Low-power mode enable.
    pub low_power: bool,
    /// Enabled axes.
    pub axes: Axes,
    /// High-pass filter mode.
    pub high_pass_mode: HighPassMode,
    /// High-pass cutoff selection.
    pub high_pass_cutoff: HighPassCutoff,
    /// Route high-pass filtered data to the output registers.
    pub filtered_data: bool,
    /// High-pass filter on interrupt generator 1.
    pub high_pass_int1: bool,
    /// High-pass filter on the click function.
    pub high_pass_click: bool,
    /// Interrupt sources routed to INT1.
    pub int1_sources: Int1Sources,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.odr.requires_low_power() && !self.low_power {
            return Err(ConfigError::LowPowerRateWithoutLowPower);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: OutputDataRate) -> Self {
        self.config.odr = odr;
        self
    }

    /// Enables or disables low-power mode.
    pub fn low_power(mut self, enable: bool) -> Self {
        self.config.low_power = enable;
        self
    }

    /// Selects the enabled axes.
    pub fn axes(mut self, axes: Axes) -> Self {
        self.config.axes = axes;
        self
    }

    /// Sets the high-pass filter mode.
    pub fn high_pass_mode(mut self, mode: HighPassMode) -> Self {
        self.config.high_pass_mode = mode;
        self
    }

    /// Sets the high-pass cutoff selection.
    pub fn high_pass_cutoff(mut self, cutoff: HighPassCutoff) -> Self {
        self.config.high_pass_cutoff = cutoff;
        self
    }

    /// Routes filtered data to the output registers.
    pub fn filtered_data(mut self, enable: bool) -> Self {
        self.config.filtered_data = enable;
        self
    }

    /// Applies the high-pass filter to interrupt generator 1.
    pub fn high_pass_int1(mut self, enable: bool) -> Self {
        self.config.high_pass_int1 = enable;
        self
    }

    /// Applies the high-pass filter to the click function.
    pub fn high_pass_click(mut self, enable: bool) -> Self {
        self.config.high_pass_click = enable;
        self
    }

    /// Selects the interrupt sources routed to INT1.
    pub fn int1_sources(mut self, sources: Int1Sources) -> Self {
        self.config.int1_sources = sources;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Hz10,
            low_power: false,
            axes: Axes::ALL,
            high_pass_mode: HighPassMode::NormalWithReset,
            high_pass_cutoff: HighPassCutoff::OdrDiv50,
            filtered_data: true,
            high_pass_int1: true,
            high_pass_click: true,
            int1_sources: Int1Sources::new(),
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The 1.620 kHz rate only exists in low-power mode.
    LowPowerRateWithoutLowPower,
}
