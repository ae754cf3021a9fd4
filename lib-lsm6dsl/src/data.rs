use crate::registers::*;

/// Gyroscope axis, used to select which pair of output registers to read.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis
{
    X,
    Y,
    Z,
}

impl Axis {

    /// Address of the low byte output register, the high byte lives at the next address.
    ///
    pub fn low_register(&self) -> u8 {
        match self {
            Self::X => OUTX_L_G,
            Self::Y => OUTY_L_G,
            Self::Z => OUTZ_L_G,
        }
    }
}

/// Unscaled gyroscope output, one signed 16 bit value per axis.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample
{
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Angular velocity in deg/s.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularRate
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AngularRate {

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &AngularRate, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

/// Per axis zero rate offset in raw LSB, as measured by `Lsm6dsl::calibrate`.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationBias
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
