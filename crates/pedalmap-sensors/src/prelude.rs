//! Convenience re-exports for sensor users.

pub use crate::{
    AdcChannel, AdcDriver, ChannelTransfer, FaultIndicator, MockAdc, MockErrorLed,
    MockSpeedometer, PedalAngleReader, PedalDiagnostics, PedalSample, PedalSensorConfig,
    SensorReading, SpeedLimits, SpeedReader, Speedometer, check_plausibility, init_channels,
};
pub use pedalmap_errors::SensorFault;
