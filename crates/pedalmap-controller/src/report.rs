//! Per-cycle diagnostic report.

use pedalmap_curves::Regime;
use pedalmap_errors::SensorFault;
use pedalmap_sensors::PedalDiagnostics;
use serde::Serialize;

/// Serializable description of a sensor fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultSummary {
    /// Stable numeric fault code
    pub code: u8,
    /// Severity label (`INFO`, `WARN`, `ERROR`, `CRITICAL`)
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

impl From<SensorFault> for FaultSummary {
    fn from(fault: SensorFault) -> Self {
        Self {
            code: fault.code(),
            severity: fault.severity().to_string(),
            message: fault.to_string(),
        }
    }
}

/// Everything one control cycle observed and decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    /// Pedal channel voltages and angles
    pub pedal: PedalDiagnostics,
    /// Validated pedal position in percent, `0.0` on fault
    pub pedal_percent: f32,
    /// Validated vehicle speed, `0.0` if the speed itself faulted
    pub speed_kmh: f32,
    /// Torque curve used; absent when no evaluation took place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,
    /// Requested torque in Nm
    pub torque_nm: f32,
    /// State of the fault indicator after the cycle
    pub indicator_on: bool,
    /// First fault detected in this cycle
    pub fault: Option<FaultSummary>,
}

impl CycleReport {
    /// Report for a cycle that was aborted by `fault`.
    ///
    /// `speed_kmh` is whatever validated speed was read before the abort.
    pub fn faulted(fault: SensorFault, pedal: PedalDiagnostics, speed_kmh: f32) -> Self {
        Self {
            pedal,
            pedal_percent: 0.0,
            speed_kmh,
            regime: None,
            torque_nm: 0.0,
            indicator_on: true,
            fault: Some(FaultSummary::from(fault)),
        }
    }

    /// True if a fault forced the torque to zero.
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Torque truncated toward zero and wrapped to an 8-bit process status.
    ///
    /// Negative torques wrap the way POSIX reduces an exit code modulo 256.
    ///
    /// ```
    /// use pedalmap_controller::CycleReport;
    /// use pedalmap_errors::SensorFault;
    /// use pedalmap_sensors::PedalDiagnostics;
    ///
    /// let mut report = CycleReport::faulted(
    ///     SensorFault::SpeedOutOfRange { speed_kmh: 130.0 },
    ///     PedalDiagnostics::default(),
    ///     0.0,
    /// );
    /// assert_eq!(report.exit_status(), 0);
    ///
    /// report.torque_nm = -29.8;
    /// assert_eq!(report.exit_status(), 227);
    /// ```
    pub fn exit_status(&self) -> u8 {
        let truncated = self.torque_nm.trunc() as i32;
        u8::try_from(truncated.rem_euclid(256)).unwrap_or(0)
    }
}
