use crate::{registers::*, *};
use super::mock::*;

fn seed_axes(mock: &mut MockTransport, x: i16, y: i16, z: i16) {
    for (register, value) in [ (OUTX_L_G, x), (OUTY_L_G, y), (OUTZ_L_G, z) ] {
        let bytes = value.to_le_bytes();
        mock.registers[register as usize] = bytes[0];
        mock.registers[register as usize + 1] = bytes[1];
    }
}

#[test]
fn calibrate_constant_signal() {
    let mut mock = MockTransport::new();
    seed_axes(&mut mock, 42, 42, 42);
    let mut delay = MockDelay::default();
    let mut gyro = Lsm6dsl::new(&mut mock, DeviceConfig::default());

    let bias = gyro.calibrate(&mut delay).unwrap();
    assert_eq!(bias, CalibrationBias { x: 42.0, y: 42.0, z: 42.0 });
    assert_eq!(delay.total_ns, 1_000_000_000);
    assert_eq!(mock.reads.len(), 100 * 3 * 2);
}

#[test]
fn calibrate_per_axis() {
    let mut mock = MockTransport::new();
    seed_axes(&mut mock, -300, 7, 32767);
    let mut delay = MockDelay::default();
    let mut gyro = Lsm6dsl::new(&mut mock, DeviceConfig::default());

    let bias = gyro.calibrate(&mut delay).unwrap();
    assert_eq!(bias, CalibrationBias { x: -300.0, y: 7.0, z: 32767.0 });
}

#[test]
fn calibrated_rate_removes_bias() {
    let mut mock = MockTransport::new();
    seed_axes(&mut mock, 110, -90, 10);
    let config = DeviceConfig {
        full_scale: FullScaleRange::D2000,
        ..DeviceConfig::default()
    };
    let mut gyro = Lsm6dsl::new(&mut mock, config);

    let bias = CalibrationBias { x: 10.0, y: 10.0, z: 10.0 };
    let rate = gyro.read_calibrated_rate(&bias).unwrap();
    assert!(rate.approx_eq(&AngularRate { x: 7.0, y: -7.0, z: 0.0 }, 1e-4), "{:?}", rate);
}

#[test]
fn calibrate_aborts_on_transport_failure() {
    let mut mock = MockTransport::new();
    mock.fail_after = Some(10);
    let mut delay = MockDelay::default();
    let mut gyro = Lsm6dsl::new(&mut mock, DeviceConfig::default());

    assert_eq!(gyro.calibrate(&mut delay), Err(Error::TransportTimeout(MockTimeout)));
    assert_eq!(mock.reads.len(), 10);
}
