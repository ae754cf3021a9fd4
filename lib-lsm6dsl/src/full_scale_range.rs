use crate::{registers::FS_G_MASK, Error};

/// Gyroscope full scale range, i.e. the largest angular velocity (in deg/s) the sensor reports
/// before clipping.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScaleRange
{
    D125,
    D250,
    D500,
    D1000,
    D2000,
}

impl FullScaleRange {

    /// Converts the given full scale range setting into the `FS_G`/`FS_125` bits one would need
    /// to write into the `CTRL2_G` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        match self {
            Self::D125 => 0b0000_0010,
            Self::D250 => 0b0000_0000,
            Self::D500 => 0b0000_0100,
            Self::D1000 => 0b0000_1000,
            Self::D2000 => 0b0000_1100,
        }
    }

    /// Gets the full scale range currently configured in the `CTRL2_G` register based on its
    /// contents. `FS_125` set together with a non-zero `FS_G` is never written by this driver and
    /// is reported as an unknown range.
    ///
    pub fn from_register<E>(value: u8) -> Result<Self, Error<E>> {
        match value & FS_G_MASK {
            0b0000_0010 => Ok(Self::D125),
            0b0000_0000 => Ok(Self::D250),
            0b0000_0100 => Ok(Self::D500),
            0b0000_1000 => Ok(Self::D1000),
            0b0000_1100 => Ok(Self::D2000),
            bits => Err(Error::UnknownRange(bits as u16)),
        }
    }

    /// Gets the sensitivity for the given scale range.
    /// (Note sensitivity is in (deg/s) / LSB).
    ///
    pub fn sensitivity(&self) -> f32 {
        match self {
            Self::D125 => 0.004375,
            Self::D250 => 0.00875,
            Self::D500 => 0.0175,
            Self::D1000 => 0.035,
            Self::D2000 => 0.07,
        }
    }

    /// Looks up the scale range for a full scale value given in deg/s.
    ///
    pub fn from_dps<E>(dps: u16) -> Result<Self, Error<E>> {
        match dps {
            125 => Ok(Self::D125),
            250 => Ok(Self::D250),
            500 => Ok(Self::D500),
            1000 => Ok(Self::D1000),
            2000 => Ok(Self::D2000),
            _ => Err(Error::UnknownRange(dps)),
        }
    }

    /// Largest representable angular velocity in deg/s.
    ///
    pub fn as_dps(&self) -> u16 {
        match self {
            Self::D125 => 125,
            Self::D250 => 250,
            Self::D500 => 500,
            Self::D1000 => 1000,
            Self::D2000 => 2000,
        }
    }
}

impl Default for FullScaleRange {
    fn default() -> Self {
        FullScaleRange::D250
    }
}

/// Converts a raw gyroscope reading into deg/s for the range it was captured with.
///
#[inline]
pub fn convert(raw: i16, range: FullScaleRange) -> f32 {
    (raw as f32) * range.sensitivity()
}
