
mod calibration;
mod transport;
