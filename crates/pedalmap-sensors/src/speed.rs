//! Vehicle speed input.

use pedalmap_errors::SensorFault;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::reading::SensorReading;

/// Source of the current vehicle speed.
pub trait Speedometer {
    /// Current speed in km/h, unvalidated.
    fn speed_kmh(&mut self) -> f32;
}

/// Speedometer returning a programmed value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MockSpeedometer {
    speed_kmh: f32,
}

impl MockSpeedometer {
    /// Create a speedometer reporting `speed_kmh`.
    pub fn new(speed_kmh: f32) -> Self {
        Self { speed_kmh }
    }

    /// Change the reported speed.
    pub fn set_speed(&mut self, speed_kmh: f32) {
        self.speed_kmh = speed_kmh;
    }
}

impl Speedometer for MockSpeedometer {
    fn speed_kmh(&mut self) -> f32 {
        self.speed_kmh
    }
}

/// Plausible vehicle speed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedLimits {
    /// Lowest plausible speed
    pub min_kmh: f32,
    /// Highest plausible speed
    pub max_kmh: f32,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            min_kmh: 0.0,
            max_kmh: 120.0,
        }
    }
}

impl SpeedLimits {
    /// True if `speed_kmh` lies within the limits. NaN never does.
    pub fn contains(&self, speed_kmh: f32) -> bool {
        (self.min_kmh..=self.max_kmh).contains(&speed_kmh)
    }
}

/// Reads and range-checks the vehicle speed.
///
/// ```
/// use pedalmap_sensors::{MockSpeedometer, SpeedReader};
///
/// let reader = SpeedReader::default();
/// assert_eq!(reader.read(&mut MockSpeedometer::new(100.0)).into_result(), Ok(100.0));
/// assert!(reader.read(&mut MockSpeedometer::new(130.0)).is_faulted());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedReader {
    limits: SpeedLimits,
}

impl SpeedReader {
    /// Create a reader with custom limits.
    pub fn new(limits: SpeedLimits) -> Self {
        Self { limits }
    }

    /// Limits in use.
    pub fn limits(&self) -> &SpeedLimits {
        &self.limits
    }

    /// Fetch the speed; out-of-range values become a faulted zero reading.
    pub fn read<S: Speedometer + ?Sized>(&self, speedometer: &mut S) -> SensorReading {
        let speed_kmh = speedometer.speed_kmh();
        if self.limits.contains(speed_kmh) {
            debug!("speed: {:.3} km/h", speed_kmh);
            SensorReading::ok(speed_kmh)
        } else {
            let fault = SensorFault::SpeedOutOfRange { speed_kmh };
            warn!("speed fault (code {}): {}", fault.code(), fault);
            SensorReading::faulted(fault)
        }
    }
}
