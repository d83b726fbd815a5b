//! Convenience re-exports for controller users.

pub use crate::{CycleReport, FaultSummary, TorqueController};
pub use pedalmap_curves::{Regime, TorqueMap};
pub use pedalmap_errors::{EvaluationError, PedalMapError, SensorFault};
pub use pedalmap_sensors::{
    AdcDriver, FaultIndicator, MockAdc, MockErrorLed, MockSpeedometer, Speedometer,
};
