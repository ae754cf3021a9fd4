#![cfg_attr(not(test), no_std)]

pub mod full_scale_range;
pub use full_scale_range::*;

pub mod output_data_rate;
pub use output_data_rate::*;

pub mod filter;
pub use filter::*;

pub mod config;
pub use config::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod transport;
pub use transport::*;

pub mod field;
pub use field::apply_field;

pub mod registers;

pub mod lsm6dsl;
pub use lsm6dsl::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the LSM6DSL chip (SA0 pulled low).
///
pub const LSM6DSL_DEFAULT_I2C_ADDR: u8 = 0x6A;

/// I2c address of the LSM6DSL chip when SA0 is pulled high.
///
pub const LSM6DSL_ALTERNATE_I2C_ADDR: u8 = 0x6B;

/// Contents of the `WHO_AM_I` register of a LSM6DSL chip.
///
pub const LSM6DSL_DEVICE_ID: u8 = 0x6A;
