use core::fmt;

/// Errors returned by the driver, `E` is the error type of the underlying register transport.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The `WHO_AM_I` register did not contain the LSM6DSL identity, nothing was written.
    IdentityMismatch { found: u8 },

    /// A bus transaction did not complete within the transport's bounded wait. Never retried.
    TransportTimeout(E),

    /// A full scale range selector that does not map onto one of the supported ranges.
    UnknownRange(u16),
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IdentityMismatch { found } => write!(
                f, "Unexpected device identity: found {:#04x}, expected {:#04x}", found, crate::LSM6DSL_DEVICE_ID
            ),
            Self::TransportTimeout(err) => write!(f, "Register transport error: {:?}", err),
            Self::UnknownRange(range) => write!(f, "Unknown gyroscope full scale range: {}", range),
        }
    }
}

impl<E> From<E> for Error<E>
{
    fn from(err: E) -> Self {
        Error::TransportTimeout(err)
    }
}
