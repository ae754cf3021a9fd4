use crate::registers::*;

/// Which of the on chip gyroscope filter stages `initialize` should switch on.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelect
{
    #[default]
    None,
    HighPass,
    LowPass,
    Both,
}

impl FilterSelect {
    pub fn high_pass(&self) -> bool {
        matches!(self, Self::HighPass | Self::Both)
    }

    pub fn low_pass(&self) -> bool {
        matches!(self, Self::LowPass | Self::Both)
    }
}

/// HPF (High Pass Filter) cut-off frequency, everything below this frequency is filtered out.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HpfBandwidth
{
    #[default]
    Bw16mHz = 0x00,
    Bw65mHz = 0x01,
    Bw260mHz = 0x02,
    Bw1_04Hz = 0x03,
}

impl HpfBandwidth {

    /// Bits for the `HPM_G` field of `CTRL7_G`.
    ///
    pub fn as_register(&self) -> u8 {
        (((*self) as u8) << 4) & HPM_G_MASK
    }
}

/// LPF1 (Low Pass Filter) bandwidth, selected through the `FTYPE` field of `CTRL6_C`. The actual
/// cut-off depends on the output data rate, the names below are the cut-offs at 833 Hz.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LpfBandwidth
{
    #[default]
    Bw245Hz = 0x00,
    Bw195Hz = 0x01,
    Bw155Hz = 0x02,
    Bw293Hz = 0x03,
}

impl LpfBandwidth {
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) & FTYPE_MASK
    }
}

/// Gyroscope power mode. The `G_HM_MODE` bit is active low: a cleared bit means high
/// performance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerformanceMode
{
    #[default]
    High,
    Normal,
}

impl PerformanceMode {
    pub fn as_register(&self) -> u8 {
        match self {
            Self::High => 0b0000_0000,
            Self::Normal => G_HM_MODE_MASK,
        }
    }
}
