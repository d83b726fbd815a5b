//! # pedalmap-sensors
//!
//! Acquisition side of the pedal-to-torque controller.
//!
//! - [`AdcDriver`], [`FaultIndicator`] and [`Speedometer`] abstract the
//!   peripherals; [`MockAdc`], [`MockErrorLed`] and [`MockSpeedometer`]
//!   implement them for tests and hardware-free runs
//! - [`PedalAngleReader`] samples both pedal channels, converts counts to
//!   volts and degrees, and runs the plausibility checks
//! - [`SpeedReader`] range-checks the vehicle speed
//!
//! Readers never touch the fault indicator. They return a
//! [`SensorReading`] whose value is forced to zero when a fault is present,
//! and the caller decides what to signal.
//!
//! ## Example
//!
//! ```rust
//! use pedalmap_sensors::{AdcChannel, AdcDriver, MockAdc, PedalAngleReader};
//!
//! let mut adc = MockAdc::new();
//! adc.set_output(AdcChannel::Channel0, 409, true);
//! adc.set_output(AdcChannel::Channel1, 450, true);
//! adc.init(AdcChannel::Channel0)?;
//! adc.init(AdcChannel::Channel1)?;
//!
//! let sample = PedalAngleReader::default().read(&mut adc);
//! assert!(!sample.reading.is_faulted());
//! assert!((sample.reading.value - 49.97).abs() < 0.01);
//! # Ok::<(), pedalmap_errors::SensorFault>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod adc;
pub mod indicator;
pub mod pedal;
pub mod prelude;
pub mod reading;
pub mod speed;

pub use adc::{AdcChannel, AdcDriver, MockAdc, init_channels};
pub use indicator::{FaultIndicator, MockErrorLed};
pub use pedal::{
    ChannelTransfer, PedalAngleReader, PedalDiagnostics, PedalSample, PedalSensorConfig,
    check_plausibility,
};
pub use reading::SensorReading;
pub use speed::{MockSpeedometer, SpeedLimits, SpeedReader, Speedometer};
