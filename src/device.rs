//! High-level LIS2DH12 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::{I2cInterface, SlaveAddr};
use crate::interface::Lis2dh12Interface;
use crate::params::{FullScale, HighPassCutoff, HighPassMode, OutputDataRate};
use crate::registers::{
    Field,
    Int1Sources,
    Register,
    RegisterAccess,
    StatusAux,
    BDU_MASK,
    EXPECTED_WHO_AM_I,
    FDS_MASK,
    FS_FIELD,
    HPCF_FIELD,
    HPCLICK_MASK,
    HPM_FIELD,
    HP_IA1_MASK,
    HP_IA2_MASK,
    HR_MASK,
    LPEN_MASK,
    ODR_FIELD,
    REG_CTRL_REG1,
    REG_CTRL_REG2,
    REG_CTRL_REG3,
    REG_CTRL_REG4,
    REG_OUT_TEMP_H,
    REG_OUT_TEMP_L,
    REG_OUT_X_H,
    REG_OUT_X_L,
    REG_OUT_Y_H,
    REG_OUT_Y_L,
    REG_OUT_Z_H,
    REG_OUT_Z_L,
    REG_REFERENCE,
    REG_STATUS_REG_AUX,
    REG_TEMP_CFG,
    REG_WHO_AM_I,
    TDA_MASK,
    TEMP_EN_MASK,
    TOR_MASK,
    XYZ_EN_MASK,
    X_EN_MASK,
    Y_EN_MASK,
    Z_EN_MASK,
};
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the LIS2DH12 accelerometer.
///
/// The driver keeps no copy of the device configuration: every getter reads
/// the device and every setter is a read-modify-write of the live register.
/// None of these sequences are atomic on the bus, so the driver must have a
/// single owner, which `&mut self` enforces.
pub struct Lis2dh12<IFACE> {
    interface: IFACE,
}

impl<IFACE> Lis2dh12<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Lis2dh12<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SlaveAddr) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Lis2dh12<IFACE>
where
    IFACE: Lis2dh12Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Verifies the device identity and applies the [`Config::default()`]
    /// baseline.
    ///
    /// On an identity mismatch nothing is written and
    /// [`Error::DeviceIdMismatch`] is returned. A mismatch usually means wrong
    /// wiring or a wrong address, so retrying is rarely useful.
    pub fn init(&mut self) -> Result<(), CommE> {
        let id = self.device_id()?;
        if id != EXPECTED_WHO_AM_I {
            warn!("WHO_AM_I mismatch: read {=u8:#x}", id);
            return Err(Error::DeviceIdMismatch(id));
        }

        self.configure(&Config::default())?;
        debug!("LIS2DH12 initialized");
        Ok(())
    }

    /// Validates and applies a configuration.
    ///
    /// Registers are programmed in a fixed order: data rate, power mode, axes,
    /// high-pass mode and cutoff, filter routing, then INT1 sources. The first
    /// bus failure stops the sequence and is returned.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.set_data_rate(config.odr)?;
        self.write_masked_register_set(REG_CTRL_REG1, LPEN_MASK, config.low_power)?;
        self.write_masked_register_field(REG_CTRL_REG1, XYZ_EN_MASK, config.axes.bits())?;
        self.set_high_pass_mode(config.high_pass_mode)?;
        self.set_high_pass_cutoff(config.high_pass_cutoff)?;
        self.write_masked_register_set(REG_CTRL_REG2, FDS_MASK, config.filtered_data)?;
        self.write_masked_register_set(REG_CTRL_REG2, HP_IA1_MASK, config.high_pass_int1)?;
        self.write_masked_register_set(REG_CTRL_REG2, HPCLICK_MASK, config.high_pass_click)?;
        self.write_typed(config.int1_sources)?;
        Ok(())
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the raw `WHO_AM_I` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_WHO_AM_I)
    }

    /// Returns `true` when `WHO_AM_I` holds the LIS2DH12 signature.
    pub fn who_am_i(&mut self) -> Result<bool, CommE> {
        Ok(self.device_id()? == EXPECTED_WHO_AM_I)
    }

    /// Returns a snapshot of `STATUS_REG_AUX`.
    pub fn read_status_aux(&mut self) -> Result<StatusAux, CommE> {
        self.read_typed()
    }

    // ==================================================================
    // == Acceleration Data =============================================
    // ==================================================================
    //
    // Each axis is two independent single-byte reads. Without block data
    // update the device may refresh the pair in between and return a torn
    // sample.

    /// Reads the raw X-axis output.
    pub fn read_axis_x(&mut self) -> Result<i16, CommE> {
        self.read_registers(REG_OUT_X_H, REG_OUT_X_L)
    }

    /// Reads the raw Y-axis output.
    pub fn read_axis_y(&mut self) -> Result<i16, CommE> {
        self.read_registers(REG_OUT_Y_H, REG_OUT_Y_L)
    }

    /// Reads the raw Z-axis output.
    pub fn read_axis_z(&mut self) -> Result<i16, CommE> {
        self.read_registers(REG_OUT_Z_H, REG_OUT_Z_L)
    }

    /// Reads a raw acceleration triplet `[x, y, z]`.
    pub fn read_motion(&mut self) -> Result<[i16; 3], CommE> {
        let x = self.read_axis_x()?;
        let y = self.read_axis_y()?;
        let z = self.read_axis_z()?;
        Ok([x, y, z])
    }

    // ==================================================================
    // == Temperature ===================================================
    // ==================================================================
    /// Enables or disables the temperature sensor.
    pub fn set_temperature_enabled(&mut self, enable: bool) -> Result<(), CommE> {
        self.write_masked_register_set(REG_TEMP_CFG, TEMP_EN_MASK, enable)
    }

    /// Returns `true` when the temperature sensor is enabled.
    ///
    /// Both `TEMP_EN` bits must be set; any other combination disables it.
    pub fn is_temperature_enabled(&mut self) -> Result<bool, CommE> {
        Ok(self.read_masked_register(REG_TEMP_CFG, TEMP_EN_MASK)? == TEMP_EN_MASK)
    }

    /// Reads the raw temperature output, or `None` when no new sample is
    /// available. The output registers are not touched in that case.
    pub fn read_temperature(&mut self) -> Result<Option<i16>, CommE> {
        if !self.temperature_data_available()? {
            return Ok(None);
        }

        self.read_registers(REG_OUT_TEMP_H, REG_OUT_TEMP_L).map(Some)
    }

    /// Returns `true` when a new temperature sample is ready.
    pub fn temperature_data_available(&mut self) -> Result<bool, CommE> {
        self.flag(REG_STATUS_REG_AUX, TDA_MASK)
    }

    /// Returns `true` when a temperature sample was overwritten unread.
    pub fn temperature_has_overrun(&mut self) -> Result<bool, CommE> {
        self.flag(REG_STATUS_REG_AUX, TOR_MASK)
    }

    // ==================================================================
    // == Data Rate & Power =============================================
    // ==================================================================
    /// Programs the output data rate.
    pub fn set_data_rate(&mut self, odr: OutputDataRate) -> Result<(), CommE> {
        self.write_field(ODR_FIELD, odr.code())
    }

    /// Reads back the output data rate.
    pub fn data_rate(&mut self) -> Result<OutputDataRate, CommE> {
        let code = self.read_field(ODR_FIELD)?;
        OutputDataRate::from_code(code).ok_or_else(|| Self::invalid_value(code))
    }

    /// Enables low-power mode.
    pub fn enable_low_power(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, LPEN_MASK, true)
    }

    /// Disables low-power mode.
    pub fn disable_low_power(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, LPEN_MASK, false)
    }

    /// Returns `true` when low-power mode is enabled.
    pub fn is_low_power_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG1, LPEN_MASK)
    }

    // ==================================================================
    // == Axis Enable ===================================================
    // ==================================================================
    /// Enables the X axis.
    pub fn enable_axis_x(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, X_EN_MASK, true)
    }

    /// Disables the X axis.
    pub fn disable_axis_x(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, X_EN_MASK, false)
    }

    /// Returns `true` when the X axis is enabled.
    pub fn is_axis_x_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG1, X_EN_MASK)
    }

    /// Enables the Y axis.
    pub fn enable_axis_y(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, Y_EN_MASK, true)
    }

    /// Disables the Y axis.
    pub fn disable_axis_y(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, Y_EN_MASK, false)
    }

    /// Returns `true` when the Y axis is enabled.
    pub fn is_axis_y_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG1, Y_EN_MASK)
    }

    /// Enables the Z axis.
    pub fn enable_axis_z(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, Z_EN_MASK, true)
    }

    /// Disables the Z axis.
    pub fn disable_axis_z(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, Z_EN_MASK, false)
    }

    /// Returns `true` when the Z axis is enabled.
    pub fn is_axis_z_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG1, Z_EN_MASK)
    }

    /// Enables all three axes in one update.
    pub fn enable_axis_xyz(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, XYZ_EN_MASK, true)
    }

    /// Disables all three axes in one update.
    pub fn disable_axis_xyz(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG1, XYZ_EN_MASK, false)
    }

    // ==================================================================
    // == High-Pass Filter ==============================================
    // ==================================================================
    /// Routes high-pass filtered data to the output registers.
    pub fn enable_high_pass_filtered_data(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, FDS_MASK, true)
    }

    /// Bypasses the high-pass filter for the output registers.
    pub fn disable_high_pass_filtered_data(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, FDS_MASK, false)
    }

    /// Returns `true` when the output registers carry filtered data.
    pub fn is_high_pass_filtered_data_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG2, FDS_MASK)
    }

    /// Enables the high-pass filter on the click function.
    pub fn enable_high_pass_click(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HPCLICK_MASK, true)
    }

    /// Disables the high-pass filter on the click function.
    pub fn disable_high_pass_click(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HPCLICK_MASK, false)
    }

    /// Returns `true` when the click function sees filtered data.
    pub fn is_high_pass_click_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG2, HPCLICK_MASK)
    }

    /// Enables the high-pass filter on interrupt generator 1.
    pub fn enable_high_pass_int1(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HP_IA1_MASK, true)
    }

    /// Disables the high-pass filter on interrupt generator 1.
    pub fn disable_high_pass_int1(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HP_IA1_MASK, false)
    }

    /// Returns `true` when interrupt generator 1 sees filtered data.
    pub fn is_high_pass_int1_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG2, HP_IA1_MASK)
    }

    /// Enables the high-pass filter on interrupt generator 2.
    pub fn enable_high_pass_int2(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HP_IA2_MASK, true)
    }

    /// Disables the high-pass filter on interrupt generator 2.
    pub fn disable_high_pass_int2(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG2, HP_IA2_MASK, false)
    }

    /// Returns `true` when interrupt generator 2 sees filtered data.
    pub fn is_high_pass_int2_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG2, HP_IA2_MASK)
    }

    /// Selects the high-pass filter mode.
    pub fn set_high_pass_mode(&mut self, mode: HighPassMode) -> Result<(), CommE> {
        self.write_field(HPM_FIELD, mode.code())
    }

    /// Reads back the high-pass filter mode.
    pub fn high_pass_mode(&mut self) -> Result<HighPassMode, CommE> {
        let code = self.read_field(HPM_FIELD)?;
        HighPassMode::from_code(code).ok_or_else(|| Self::invalid_value(code))
    }

    /// Selects the high-pass cutoff frequency.
    pub fn set_high_pass_cutoff(&mut self, cutoff: HighPassCutoff) -> Result<(), CommE> {
        self.write_field(HPCF_FIELD, cutoff.code())
    }

    /// Reads back the high-pass cutoff frequency.
    pub fn high_pass_cutoff(&mut self) -> Result<HighPassCutoff, CommE> {
        let code = self.read_field(HPCF_FIELD)?;
        HighPassCutoff::from_code(code).ok_or_else(|| Self::invalid_value(code))
    }

    /// Resets the filter when running in [`HighPassMode::NormalWithReset`].
    ///
    /// The reset is a side effect of reading `REFERENCE`; the value is dropped.
    pub fn reset_high_pass_filter(&mut self) -> Result<(), CommE> {
        self.read_register(REG_REFERENCE)?;
        Ok(())
    }

    // ==================================================================
    // == Output Format =================================================
    // ==================================================================
    /// Enables block data update: output registers hold until both bytes of
    /// a sample have been read.
    pub fn enable_block_data_update(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG4, BDU_MASK, true)
    }

    /// Disables block data update (continuous output refresh).
    pub fn disable_block_data_update(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG4, BDU_MASK, false)
    }

    /// Returns `true` when block data update is enabled.
    pub fn is_block_data_update_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG4, BDU_MASK)
    }

    /// Enables high-resolution output.
    pub fn enable_high_resolution(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG4, HR_MASK, true)
    }

    /// Disables high-resolution output.
    pub fn disable_high_resolution(&mut self) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG4, HR_MASK, false)
    }

    /// Returns `true` when high-resolution output is enabled.
    pub fn is_high_resolution_enabled(&mut self) -> Result<bool, CommE> {
        self.flag(REG_CTRL_REG4, HR_MASK)
    }

    /// Selects the full-scale range.
    pub fn set_full_scale(&mut self, scale: FullScale) -> Result<(), CommE> {
        self.write_field(FS_FIELD, scale.code())
    }

    /// Reads back the full-scale range.
    pub fn full_scale(&mut self) -> Result<FullScale, CommE> {
        let code = self.read_field(FS_FIELD)?;
        FullScale::from_code(code).ok_or_else(|| Self::invalid_value(code))
    }

    // ==================================================================
    // == Interrupt Routing =============================================
    // ==================================================================
    /// Routes the given sources to INT1, leaving other sources as they are.
    ///
    /// Accepts either an [`Int1Sources`] value or a raw `CTRL_REG3` mask.
    pub fn enable_interrupt_int1(&mut self, sources: impl Into<u8>) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG3, sources.into(), true)
    }

    /// Removes the given sources from INT1, leaving other sources as they are.
    pub fn disable_interrupt_int1(&mut self, sources: impl Into<u8>) -> Result<(), CommE> {
        self.write_masked_register_set(REG_CTRL_REG3, sources.into(), false)
    }

    /// Reads the sources currently routed to INT1.
    pub fn int1_sources(&mut self) -> Result<Int1Sources, CommE> {
        self.read_typed()
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Reads a single register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        let value = self.interface.read_register(register).map_err(Error::from)?;
        trace!("read  {=u8:#x} -> {=u8:#x}", register, value);
        Ok(value)
    }

    /// Writes a single register.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        trace!("write {=u8:#x} <- {=u8:#x}", register, value);
        self.interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    /// Reads a 16-bit two's-complement value from two registers, MSB first.
    ///
    /// The two bytes come from separate bus transactions.
    pub fn read_registers(&mut self, msb_register: u8, lsb_register: u8) -> Result<i16, CommE> {
        let msb = self.read_register(msb_register)?;
        let lsb = self.read_register(lsb_register)?;
        Ok(i16::from_be_bytes([msb, lsb]))
    }

    /// Writes a pair of registers, MSB first.
    ///
    /// Both writes are attempted; the first failure is returned.
    pub fn write_registers(
        &mut self,
        msb_register: u8,
        msb_value: u8,
        lsb_register: u8,
        lsb_value: u8,
    ) -> Result<(), CommE> {
        let msb = self.write_register(msb_register, msb_value);
        let lsb = self.write_register(lsb_register, lsb_value);
        msb.and(lsb)
    }

    /// Sets (`enable`) or clears every bit of `mask`, preserving the rest.
    pub fn write_masked_register_set(
        &mut self,
        register: u8,
        mask: u8,
        enable: bool,
    ) -> Result<(), CommE> {
        let current = self.read_register(register)?;
        let updated = if enable { current | mask } else { current & !mask };
        self.write_register(register, updated)
    }

    /// Replaces the bits selected by `mask` with `shifted_value`, preserving
    /// the rest. The value must already be in register position.
    pub fn write_masked_register_field(
        &mut self,
        register: u8,
        mask: u8,
        shifted_value: u8,
    ) -> Result<(), CommE> {
        let current = self.read_register(register)?;
        let updated = (current & !mask) | (shifted_value & mask);
        self.write_register(register, updated)
    }

    /// Reads a register and keeps only the bits selected by `mask`, unshifted.
    pub fn read_masked_register(&mut self, register: u8, mask: u8) -> Result<u8, CommE> {
        Ok(self.read_register(register)? & mask)
    }

    /// Writes the logical `value` into `field`.
    ///
    /// Values above [`Field::max`] fail with [`Error::InvalidConfig`] before
    /// any bus access.
    pub fn write_field(&mut self, field: Field, value: u8) -> Result<(), CommE> {
        let Some(shifted) = field.encode(value) else {
            warn!(
                "value {=u8} out of range for register {=u8:#x} (max {=u8})",
                value, field.register, field.max
            );
            return Err(Error::InvalidConfig);
        };

        self.write_masked_register_field(field.register, field.mask, shifted)
    }

    /// Reads the logical (unshifted) value of `field`.
    pub fn read_field(&mut self, field: Field) -> Result<u8, CommE> {
        let raw = self.read_register(field.register)?;
        Ok(field.decode(raw))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn flag(&mut self, register: u8, mask: u8) -> Result<bool, CommE> {
        Ok(self.read_masked_register(register, mask)? != 0)
    }

    fn read_typed<R: Register>(&mut self) -> Result<R, CommE> {
        self.read_register(R::ADDRESS).map(R::from)
    }

    fn write_typed<R: Register>(&mut self, value: R) -> Result<(), CommE> {
        const { assert!(matches!(R::ACCESS, RegisterAccess::ReadWrite)) };
        self.write_register(R::ADDRESS, value.into())
    }

    fn invalid_value(code: u8) -> Error<CommE> {
        warn!("reserved field encoding {=u8:#x}", code);
        Error::InvalidRegisterValue(code)
    }
}
