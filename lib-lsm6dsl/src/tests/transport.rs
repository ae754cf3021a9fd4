use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

use crate::{registers::*, *};

/// Pretends to be a LSM6DSL on an i2c bus, with register address auto increment.
///
struct MockI2c
{
    registers: [u8; 256],
    pointer: u8,
    /// (address, bytes written, bytes read) per transaction.
    transactions: Vec<(u8, Vec<u8>, usize)>,
}

impl MockI2c {
    fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[WHO_AM_I as usize] = LSM6DSL_DEVICE_ID;
        MockI2c { registers, pointer: 0, transactions: Vec::new() }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != LSM6DSL_DEFAULT_I2C_ADDR {
            return Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address));
        }
        let mut written = Vec::new();
        let mut read = 0;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    self.pointer = bytes[0];
                    for value in &bytes[1..] {
                        self.registers[self.pointer as usize] = *value;
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                    written.extend_from_slice(bytes);
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.registers[self.pointer as usize];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                    read += buf.len();
                }
            }
        }
        self.transactions.push((address, written, read));
        Ok(())
    }
}

#[test]
fn i2c_single_register_access() {
    let mut i2c = MockI2c::new();
    let mut transport = I2cTransport::new(&mut i2c);
    assert_eq!(transport.address(), LSM6DSL_DEFAULT_I2C_ADDR);

    transport.write_register(CTRL3_C, 0x44).unwrap();
    assert_eq!(transport.read_register(CTRL3_C), Ok(0x44));
    assert_eq!(transport.read_register(WHO_AM_I), Ok(LSM6DSL_DEVICE_ID));

    assert_eq!(i2c.transactions, vec![
        (LSM6DSL_DEFAULT_I2C_ADDR, vec![ CTRL3_C, 0x44 ], 0),
        (LSM6DSL_DEFAULT_I2C_ADDR, vec![ CTRL3_C ], 1),
        (LSM6DSL_DEFAULT_I2C_ADDR, vec![ WHO_AM_I ], 1),
    ]);
}

#[test]
fn i2c_axis_read_is_one_burst() {
    let mut i2c = MockI2c::new();
    i2c.registers[OUTZ_L_G as usize] = 0x00;
    i2c.registers[OUTZ_H_G as usize] = 0x80;
    let mut transport = I2cTransport::new(&mut i2c);
    let mut gyro = Lsm6dsl::new(&mut transport, DeviceConfig::default());

    assert_eq!(gyro.read_axis(Axis::Z), Ok(-32768));
    assert_eq!(i2c.transactions, vec![ (LSM6DSL_DEFAULT_I2C_ADDR, vec![ OUTZ_L_G ], 2) ]);
}

#[test]
fn i2c_initialize_over_bus() {
    let mut i2c = MockI2c::new();
    let mut transport = I2cTransport::new(&mut i2c);
    let mut gyro = Lsm6dsl::new(&mut transport, DeviceConfig::default());

    gyro.initialize().unwrap();
    assert_eq!(gyro.state(), DeviceState::Enabled);
    assert_eq!(i2c.registers[CTRL2_G as usize], 0x40);
    assert_eq!(i2c.registers[CTRL3_C as usize], 0x64);
}

#[test]
fn i2c_wrong_address_fails() {
    let mut i2c = MockI2c::new();
    let mut transport = I2cTransport::with_address(&mut i2c, LSM6DSL_ALTERNATE_I2C_ADDR);
    let mut gyro = Lsm6dsl::new(&mut transport, DeviceConfig::default());

    assert!(matches!(gyro.initialize(), Err(Error::TransportTimeout(ErrorKind::NoAcknowledge(_)))));
    assert!(!gyro.connection_okay());
}
