mod common;

use common::{device, file, read, write, RegisterFile};
use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use lis2dh12::config::{Axes, Config};
use lis2dh12::params::{HighPassCutoff, HighPassMode, OutputDataRate};
use lis2dh12::registers::{
    Int1Sources,
    I1_CLICK,
    REG_CTRL_REG1,
    REG_CTRL_REG2,
    REG_CTRL_REG3,
    REG_WHO_AM_I,
};
use lis2dh12::{Error, Lis2dh12, SlaveAddr};

/// Transactions of one masked read-modify-write.
fn update(register: u8, current: u8, updated: u8) -> [Transaction; 3] {
    let [address_phase, data_phase] = read(register, current);
    [address_phase, data_phase, write(register, updated)]
}

#[test]
fn identity_mismatch_stops_before_any_write() {
    let expectations = read(REG_WHO_AM_I, 0x32);
    let mut mock = Mock::new(&expectations);
    let mut dev = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Sa0Low);

    assert_eq!(dev.init(), Err(Error::DeviceIdMismatch(0x32)));
    mock.done();
}

#[test]
fn identity_mismatch_leaves_register_file_untouched() {
    let mut dev = device(
        RegisterFile::new()
            .with(REG_WHO_AM_I, 0x00)
            .with(REG_CTRL_REG1, 0x07),
    );

    assert_eq!(dev.init(), Err(Error::DeviceIdMismatch(0x00)));
    assert_eq!(file(&mut dev).writes(), 0);
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG1 as usize], 0x07);
}

#[test]
fn init_applies_baseline_in_order() {
    // Power-on defaults: CTRL_REG1 = 0x07, CTRL_REG2 = 0x00.
    let mut expectations = Vec::new();
    expectations.extend(read(REG_WHO_AM_I, 0x33));
    expectations.extend(update(REG_CTRL_REG1, 0x07, 0x27));
    expectations.extend(update(REG_CTRL_REG1, 0x27, 0x27));
    expectations.extend(update(REG_CTRL_REG1, 0x27, 0x27));
    expectations.extend(update(REG_CTRL_REG2, 0x00, 0x00));
    expectations.extend(update(REG_CTRL_REG2, 0x00, 0x00));
    expectations.extend(update(REG_CTRL_REG2, 0x00, 0x08));
    expectations.extend(update(REG_CTRL_REG2, 0x08, 0x09));
    expectations.extend(update(REG_CTRL_REG2, 0x09, 0x0D));
    expectations.push(write(REG_CTRL_REG3, 0x00));
    let mut mock = Mock::new(&expectations);
    let mut dev = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Sa0Low);

    assert_eq!(dev.init(), Ok(()));
    mock.done();
}

#[test]
fn init_reports_first_transport_failure() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
    let mut expectations = Vec::new();
    expectations.extend(read(REG_WHO_AM_I, 0x33));
    expectations.extend(read(REG_CTRL_REG1, 0x07));
    expectations.push(write(REG_CTRL_REG1, 0x27).with_error(nack));
    let mut mock = Mock::new(&expectations);
    let mut dev = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Sa0Low);

    assert_eq!(dev.init(), Err(Error::Interface(nack)));
    mock.done();
}

#[test]
fn init_overrides_stale_configuration() {
    let mut dev = device(
        RegisterFile::new()
            .with(REG_WHO_AM_I, 0x33)
            .with(REG_CTRL_REG1, 0x98)
            .with(REG_CTRL_REG2, 0xF2)
            .with(REG_CTRL_REG3, I1_CLICK),
    );

    dev.init().unwrap();

    assert_eq!(dev.data_rate().unwrap(), OutputDataRate::Hz10);
    assert!(!dev.is_low_power_enabled().unwrap());
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG1 as usize], 0x27);
    assert_eq!(dev.high_pass_mode().unwrap(), HighPassMode::NormalWithReset);
    assert_eq!(dev.high_pass_cutoff().unwrap(), HighPassCutoff::OdrDiv50);
    // HP_IA2 is outside the baseline and keeps its previous state.
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG2 as usize], 0x0F);
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG3 as usize], 0x00);
}

#[test]
fn configure_rejects_invalid_config_before_bus_access() {
    let mut dev = device(RegisterFile::new());
    let config = Config::new().odr(OutputDataRate::Hz1620LowPower).build();

    assert_eq!(dev.configure(&config), Err(Error::InvalidConfig));
    assert!(file(&mut dev).log.is_empty());
}

#[test]
fn configure_applies_custom_settings() {
    let mut dev = device(RegisterFile::new().with(REG_CTRL_REG1, 0x07));
    let config = Config::new()
        .odr(OutputDataRate::Hz1620LowPower)
        .low_power(true)
        .axes(Axes {
            x: false,
            y: true,
            z: true,
        })
        .high_pass_mode(HighPassMode::Normal)
        .high_pass_cutoff(HighPassCutoff::OdrDiv9)
        .filtered_data(false)
        .high_pass_click(false)
        .int1_sources(Int1Sources::new().with_data_ready(true))
        .build();

    dev.configure(&config).unwrap();

    assert_eq!(file(&mut dev).regs[REG_CTRL_REG1 as usize], 0x8E);
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG2 as usize], 0xA1);
    assert_eq!(file(&mut dev).regs[REG_CTRL_REG3 as usize], 0x10);
}
