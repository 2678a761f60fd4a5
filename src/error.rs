//! Error handling primitives for the LIS2DH12 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A field value or configuration is outside its legal range.
    ///
    /// Raised before any bus access, so the device is left untouched.
    InvalidConfig,
    /// `WHO_AM_I` did not hold the LIS2DH12 signature; carries the value read.
    DeviceIdMismatch(u8),
    /// A field read back from the device holds a reserved encoding.
    InvalidRegisterValue(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
