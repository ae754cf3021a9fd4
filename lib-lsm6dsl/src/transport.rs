use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::LSM6DSL_DEFAULT_I2C_ADDR;

/// Byte oriented access to the sensor's register file. Every call is a single blocking bus
/// transaction, implementations are expected to give up after a bounded wait and report that
/// through `Self::Error`.
///
pub trait RegisterTransport
{
    type Error: Debug;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads `buf.len()` consecutive registers starting at `register`. The default implementation
    /// issues one `read_register` per byte in ascending address order, transports that support
    /// auto-incrementing burst reads should override it.
    ///
    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.read_register(register.wrapping_add(offset as u8))?;
        }
        Ok(())
    }
}

/// Register transport over any `embedded-hal` I2C bus. Pass `&mut bus` to keep ownership of the
/// bus with the caller.
///
pub struct I2cTransport<I2C>
{
    i2c: I2C,

    /// 7 bit i2c address that chip is located at.
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C>
{
    /// Create a transport for a chip at the default address (SA0 pulled low).
    ///
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, LSM6DSL_DEFAULT_I2C_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        I2cTransport { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gives back the bus this transport was created with.
    ///
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport for I2cTransport<I2C>
{
    type Error = I2C::Error;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(state[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[ register, value ])
    }

    /// Relies on `IF_INC` (set by default and kept set by `initialize`) to walk the register
    /// addresses within a single transaction.
    ///
    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[ register ], buf)
    }
}
