use embedded_hal::delay::DelayNs;

use crate::{registers::*, field::apply_field, convert, AngularRate, Axis, CalibrationBias, DeviceConfig, Error, FullScaleRange, RawSample, RegisterTransport, LSM6DSL_DEVICE_ID};

/// Number of samples averaged by `Lsm6dsl::calibrate`.
///
pub const CALIBRATION_SAMPLES: u16 = 100;

/// Time the sensor is given to settle before calibration starts sampling.
///
pub const CALIBRATION_SETTLE_MS: u32 = 1000;

/// Offset of the temperature sensor output, a raw value of 0 means 25 degrees celsius.
///
pub const TEMPERATURE_OFFSET: i16 = 25;

/// Where `Lsm6dsl::initialize` got to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState
{
    Uninitialized,
    Disabled,
    Configured,
    Enabled,
}

pub struct Lsm6dsl<'a, T: RegisterTransport>
{
    /// Register transport we use to communicate with the chip, borrowed from the caller.
    transport: &'a mut T,

    config: DeviceConfig,

    state: DeviceState,
}

impl<'a, T: RegisterTransport> Lsm6dsl<'a, T>
{
    /// Create a new LSM6DSL driver on top of the given transport. Nothing is sent to the chip
    /// until `initialize` is called.
    ///
    pub fn new(transport: &'a mut T, config: DeviceConfig) -> Self {
        Lsm6dsl {
            transport,
            config,
            state: DeviceState::Uninitialized,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Checks the chip identity and then brings the gyroscope from whatever state it is in to the
    /// configured one. The sequence always starts by switching the gyroscope and its filters off,
    /// so calling this again with the same config writes the same values in the same order.
    ///
    /// If the identity check fails nothing is written and the driver stays `Uninitialized`.
    ///
    pub fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.state = DeviceState::Uninitialized;

        let found = self.read_identity()?;
        if found != LSM6DSL_DEVICE_ID {
            log::error!("Unexpected device id {:#04x}, is the LSM6DSL connected?", found);
            return Err(Error::IdentityMismatch { found });
        }
        log::info!("Configuring LSM6DSL gyroscope: {:?}", self.config);

        // Known baseline: gyroscope powered down and both filters bypassed.
        self.disable()?;
        self.disable_filters()?;
        self.state = DeviceState::Disabled;

        self.set_full_scale()?;
        if self.config.filter.high_pass() {
            self.enable_high_pass_filter()?;
        }
        if self.config.filter.low_pass() {
            self.enable_low_pass_filter()?;
        }
        self.state = DeviceState::Configured;

        self.enable_block_data_update()?;
        // FS_G is written a second time right before power up.
        self.set_full_scale()?;
        self.set_performance_mode()?;
        self.enable()?;
        self.state = DeviceState::Enabled;

        log::info!("LSM6DSL gyroscope enabled");
        Ok(())
    }

    /// Gets the contents of the `WHO_AM_I` register, `LSM6DSL_DEVICE_ID` for a genuine chip.
    ///
    pub fn read_identity(&mut self) -> Result<u8, Error<T::Error>> {
        Ok(self.transport.read_register(WHO_AM_I)?)
    }

    /// Checks if the connection with the chip is working as expected, practically speaking this
    /// function just checks if it can read the device ID and if the device ID is the expected
    /// value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.read_identity().map(|id| id == LSM6DSL_DEVICE_ID).unwrap_or(false)
    }

    /// Reads the raw output of a single axis, low byte first.
    ///
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, Error<T::Error>> {
        let mut data = [ 0u8; 2 ];
        self.transport.read_registers(axis.low_register(), &mut data)?;
        Ok(i16::from_le_bytes(data))
    }

    pub fn read_raw(&mut self) -> Result<RawSample, Error<T::Error>> {
        Ok(RawSample {
            x: self.read_axis(Axis::X)?,
            y: self.read_axis(Axis::Y)?,
            z: self.read_axis(Axis::Z)?,
        })
    }

    /// Get the current gyroscope sensor values (in deg/s), scaled with the configured range.
    ///
    pub fn read_angular_rate(&mut self) -> Result<AngularRate, Error<T::Error>> {
        let raw = self.read_raw()?;
        let range = self.config.full_scale;
        Ok(AngularRate {
            x: convert(raw.x, range),
            y: convert(raw.y, range),
            z: convert(raw.z, range),
        })
    }

    /// Same as `read_angular_rate` but with the given zero rate offset removed first.
    ///
    pub fn read_calibrated_rate(&mut self, bias: &CalibrationBias) -> Result<AngularRate, Error<T::Error>> {
        let raw = self.read_raw()?;
        let sensitivity = self.config.full_scale.sensitivity();
        Ok(AngularRate {
            x: (raw.x as f32 - bias.x) * sensitivity,
            y: (raw.y as f32 - bias.y) * sensitivity,
            z: (raw.z as f32 - bias.z) * sensitivity,
        })
    }

    /// Gets the full scale range the chip is currently using based on the `CTRL2_G` register.
    ///
    pub fn read_full_scale(&mut self) -> Result<FullScaleRange, Error<T::Error>> {
        let value = self.transport.read_register(CTRL2_G)?;
        FullScaleRange::from_register(value)
    }

    /// Get temperature of the on chip temperature sensor in whole degrees celsius. The fraction
    /// is truncated.
    ///
    pub fn read_temperature(&mut self) -> Result<i16, Error<T::Error>> {
        Ok(self.read_temperature_raw()? / 256 + TEMPERATURE_OFFSET)
    }

    /// Get temperature of the on chip temperature sensor in degrees celsius (256 LSB/degree).
    ///
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<T::Error>> {
        Ok(self.read_temperature_raw()? as f32 / 256.0 + TEMPERATURE_OFFSET as f32)
    }

    /// Measures the zero rate offset of every axis by averaging `CALIBRATION_SAMPLES` raw
    /// readings. The sensor has to lie still for the whole call, which blocks for at least
    /// `CALIBRATION_SETTLE_MS`.
    ///
    pub fn calibrate<D: DelayNs>(&mut self, delay: &mut D) -> Result<CalibrationBias, Error<T::Error>> {
        log::debug!("Calibrating gyroscope");
        delay.delay_ms(CALIBRATION_SETTLE_MS);

        let mut sum = [ 0.0f64; 3 ];
        for _ in 0..CALIBRATION_SAMPLES {
            let raw = self.read_raw()?;
            sum[0] += raw.x as f64;
            sum[1] += raw.y as f64;
            sum[2] += raw.z as f64;
        }

        let samples = CALIBRATION_SAMPLES as f64;
        let bias = CalibrationBias {
            x: (sum[0] / samples) as f32,
            y: (sum[1] / samples) as f32,
            z: (sum[2] / samples) as f32,
        };
        log::debug!("Gyroscope bias: {:?}", bias);
        Ok(bias)
    }

    /// Reads both temperature bytes as separate transactions, high byte first.
    ///
    fn read_temperature_raw(&mut self) -> Result<i16, Error<T::Error>> {
        let high = self.transport.read_register(OUT_TEMP_H)?;
        let low = self.transport.read_register(OUT_TEMP_L)?;
        Ok(i16::from_be_bytes([ high, low ]))
    }

    fn disable(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Disabling gyroscope");
        Ok(self.transport.write_register(CTRL2_G, 0x00)?)
    }

    fn enable(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Enabling gyroscope at {:?}", self.config.odr);
        self.modify_register(CTRL2_G, ODR_G_MASK, self.config.odr.as_register())
    }

    fn disable_filters(&mut self) -> Result<(), Error<T::Error>> {
        self.modify_register(CTRL7_G, HP_EN_G_MASK, 0)?;
        self.modify_register(CTRL4_C, LPF1_SEL_G_MASK, 0)
    }

    fn enable_high_pass_filter(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Enabling high pass filter, bandwidth={:?}", self.config.hpf_bandwidth);
        let value = HP_EN_G | self.config.hpf_bandwidth.as_register();
        self.modify_register(CTRL7_G, HP_EN_G_MASK | HPM_G_MASK, value)
    }

    fn enable_low_pass_filter(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Enabling low pass filter, bandwidth={:?}", self.config.lpf_bandwidth);
        self.modify_register(CTRL4_C, LPF1_SEL_G_MASK, LPF1_SEL_G)?;
        self.modify_register(CTRL6_C, FTYPE_MASK, self.config.lpf_bandwidth.as_register())
    }

    fn set_full_scale(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Setting full scale range={:?}", self.config.full_scale);
        self.modify_register(CTRL2_G, FS_G_MASK, self.config.full_scale.as_register())
    }

    fn set_performance_mode(&mut self) -> Result<(), Error<T::Error>> {
        log::debug!("Setting performance mode={:?}", self.config.performance_mode);
        self.modify_register(CTRL7_G, G_HM_MODE_MASK, self.config.performance_mode.as_register())
    }

    /// Makes sure multi byte output registers are never updated halfway through a read.
    ///
    fn enable_block_data_update(&mut self) -> Result<(), Error<T::Error>> {
        self.modify_register(CTRL3_C, BDU_MASK, BDU_ENABLED)
    }

    /// Read, replace the bits under `mask` with `value`, write back.
    ///
    fn modify_register(&mut self, register: u8, mask: u8, value: u8) -> Result<(), Error<T::Error>> {
        let state = self.transport.read_register(register)?;
        self.transport.write_register(register, apply_field(state, mask, value))?;
        Ok(())
    }
}
