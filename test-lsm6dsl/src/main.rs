#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_println::print;
use hal::{delay::Delay, i2c::master::{Config, I2c}, prelude::*};
use lsm6dsl::{
    CalibrationBias, DeviceConfig, FilterSelect, FullScaleRange, HpfBandwidth, I2cTransport, Lsm6dsl,
    LpfBandwidth, OutputDataRate, PerformanceMode,
};

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Debug);
    let peripherals = hal::init(hal::Config::default());
    let mut delay = Delay::new();


    // Initialize I2C connection for the LSM6DSL
    // ============================================================================================
    let i2c = I2c::new(
        peripherals.I2C0,
        Config {
            frequency: 400.kHz(),
            ..Config::default()
        },
    )
    .with_sda(peripherals.GPIO1)
    .with_scl(peripherals.GPIO2);
    let mut transport = I2cTransport::new(i2c);


    // Configure the gyroscope
    // ============================================================================================
    let config = DeviceConfig {
        odr: OutputDataRate::Hz104,
        full_scale: FullScaleRange::D500,
        filter: FilterSelect::LowPass,
        hpf_bandwidth: HpfBandwidth::Bw16mHz,
        lpf_bandwidth: LpfBandwidth::Bw155Hz,
        performance_mode: PerformanceMode::High,
    };
    let mut gyro = Lsm6dsl::new(&mut transport, config);
    log::info!("LSM6DSL id: {:#04x}", gyro.read_identity().unwrap());
    gyro.initialize().unwrap();
    log::info!("Full scale range: {:?}", gyro.read_full_scale().unwrap());


    // Calibrate gyroscope, keep the board still!
    // ============================================================================================
    let bias = if cfg!(feature = "calibrate") {
        log::info!("Calibrating...");
        gyro.calibrate(&mut delay).unwrap()
    } else {
        CalibrationBias::default()
    };
    log::info!("gyro bias: {:?}", bias);


    // Main program loop
    // ============================================================================================
    loop {
        let rate = gyro.read_calibrated_rate(&bias).unwrap();
        let temp = gyro.read_temperature().unwrap();

        print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
        print!("x: {: >8.2} deg/s\n", rate.x);
        print!("y: {: >8.2} deg/s\n", rate.y);
        print!("z: {: >8.2} deg/s\n", rate.z);
        print!("t: {: >5} C\n", temp);

        delay.delay_millis(100);
    }
}
