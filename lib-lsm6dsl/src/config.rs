use crate::{FilterSelect, FullScaleRange, HpfBandwidth, LpfBandwidth, OutputDataRate, PerformanceMode};

/// Everything `Lsm6dsl::initialize` writes into the gyroscope control registers. The driver keeps
/// its own copy, so the configuration can not change after the driver has been created.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceConfig
{
    pub odr: OutputDataRate,
    pub full_scale: FullScaleRange,
    pub filter: FilterSelect,
    pub hpf_bandwidth: HpfBandwidth,
    pub lpf_bandwidth: LpfBandwidth,
    pub performance_mode: PerformanceMode,
}
