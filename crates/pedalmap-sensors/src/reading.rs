//! Sensor value paired with its fault status.

use pedalmap_errors::SensorFault;
use serde::Serialize;

/// Result of one sensor acquisition.
///
/// A faulted reading always carries a value of `0.0`, so a caller that
/// ignores the fault still sees the safe value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    /// Measured value, or `0.0` when faulted
    pub value: f32,
    /// Fault detected during acquisition
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_fault")]
    pub fault: Option<SensorFault>,
}

impl SensorReading {
    /// A healthy reading.
    #[must_use]
    pub fn ok(value: f32) -> Self {
        Self { value, fault: None }
    }

    /// A faulted reading with the value forced to zero.
    #[must_use]
    pub fn faulted(fault: SensorFault) -> Self {
        Self {
            value: 0.0,
            fault: Some(fault),
        }
    }

    /// True if a fault was detected.
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Convert into a `Result`, dropping the forced value on fault.
    ///
    /// # Errors
    ///
    /// Returns the recorded [`SensorFault`].
    pub fn into_result(self) -> Result<f32, SensorFault> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.value),
        }
    }
}

impl From<Result<f32, SensorFault>> for SensorReading {
    fn from(result: Result<f32, SensorFault>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::faulted(fault),
        }
    }
}

fn serialize_fault<S: serde::Serializer>(
    fault: &Option<SensorFault>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match fault {
        Some(fault) => serializer.collect_str(fault),
        None => serializer.serialize_none(),
    }
}
