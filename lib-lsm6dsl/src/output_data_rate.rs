/// Gyroscope output data rate, written to the `ODR_G` field of `CTRL2_G`. `PowerDown` keeps the
/// gyroscope off.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDataRate
{
    PowerDown = 0x00,
    Hz12_5 = 0x01,
    Hz26 = 0x02,
    Hz52 = 0x03,
    Hz104 = 0x04,
    Hz208 = 0x05,
    Hz416 = 0x06,
    Hz833 = 0x07,
    Hz1660 = 0x08,
    Hz3330 = 0x09,
    Hz6660 = 0x0A,
}

impl OutputDataRate {

    /// Converts the data rate into the bits one would need to write into the `CTRL2_G` register.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 4
    }
}

impl Default for OutputDataRate {
    fn default() -> Self {
        OutputDataRate::Hz104
    }
}
