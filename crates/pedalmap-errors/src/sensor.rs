//! Sensor acquisition faults.
//!
//! These faults are designed for the control-cycle hot path:
//! - `Copy` semantics, no heap allocations
//! - Stable numeric codes for compact logging
//!
//! A sensor fault never aborts the process. The reader that detects it
//! returns a forced safe value of zero alongside the fault, and the control
//! cycle forces torque to zero without consulting the torque map.

use crate::common::ErrorSeverity;

/// Faults raised while acquiring the pedal angle or the vehicle speed.
///
/// # Examples
///
/// ```
/// use pedalmap_errors::{ErrorSeverity, SensorFault};
///
/// let fault = SensorFault::ChannelDivergence { difference_deg: 6.0 };
///
/// assert_eq!(fault.code(), 4);
/// assert_eq!(fault.severity(), ErrorSeverity::Critical);
/// assert!(fault.is_pedal_fault());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[repr(u8)]
pub enum SensorFault {
    /// An ADC channel reported failure during initialization
    #[error("ADC channel {channel} failed to initialize")]
    AdcInitFailed {
        /// Index of the failing channel
        channel: u8,
    },

    /// An ADC channel reported failure while sampling
    #[error("ADC channel {channel} read failed")]
    AdcReadFailed {
        /// Index of the failing channel
        channel: u8,
    },

    /// The angle derived from one pedal channel is outside the mechanical travel
    #[error("Pedal channel {channel} angle {angle_deg:.3} deg is outside [{min_deg}, {max_deg}] deg")]
    AngleOutOfRange {
        /// Index of the offending channel
        channel: u8,
        /// Angle computed from the channel voltage
        angle_deg: f32,
        /// Lower bound of the valid travel
        min_deg: f32,
        /// Upper bound of the valid travel
        max_deg: f32,
    },

    /// The two redundant pedal channels disagree
    #[error("Pedal channels diverge by {difference_deg:.3} deg")]
    ChannelDivergence {
        /// Absolute angle difference between the channels
        difference_deg: f32,
    },

    /// The speedometer reported a value outside the plausible range
    #[error("Speed {speed_kmh:.3} km/h is out of range")]
    SpeedOutOfRange {
        /// Reported speed
        speed_kmh: f32,
    },
}

impl SensorFault {
    /// Get the numeric fault code.
    ///
    /// ```
    /// use pedalmap_errors::SensorFault;
    ///
    /// assert_eq!(SensorFault::AdcInitFailed { channel: 0 }.code(), 1);
    /// assert_eq!(SensorFault::SpeedOutOfRange { speed_kmh: 130.0 }.code(), 5);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            SensorFault::AdcInitFailed { .. } => 1,
            SensorFault::AdcReadFailed { .. } => 2,
            SensorFault::AngleOutOfRange { .. } => 3,
            SensorFault::ChannelDivergence { .. } => 4,
            SensorFault::SpeedOutOfRange { .. } => 5,
        }
    }

    /// Rebuild a representative fault from its numeric code.
    ///
    /// Payload fields are zeroed; only the variant survives the round trip.
    /// Returns `None` for unknown codes.
    ///
    /// ```
    /// use pedalmap_errors::SensorFault;
    ///
    /// let fault = SensorFault::from_code(4);
    /// assert!(matches!(fault, Some(SensorFault::ChannelDivergence { .. })));
    /// assert_eq!(SensorFault::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SensorFault::AdcInitFailed { channel: 0 }),
            2 => Some(SensorFault::AdcReadFailed { channel: 0 }),
            3 => Some(SensorFault::AngleOutOfRange {
                channel: 0,
                angle_deg: 0.0,
                min_deg: 0.0,
                max_deg: 0.0,
            }),
            4 => Some(SensorFault::ChannelDivergence { difference_deg: 0.0 }),
            5 => Some(SensorFault::SpeedOutOfRange { speed_kmh: 0.0 }),
            _ => None,
        }
    }

    /// Get the fault severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SensorFault::AdcInitFailed { .. } => ErrorSeverity::Critical,
            SensorFault::AdcReadFailed { .. } => ErrorSeverity::Error,
            SensorFault::AngleOutOfRange { .. } => ErrorSeverity::Error,
            SensorFault::ChannelDivergence { .. } => ErrorSeverity::Critical,
            SensorFault::SpeedOutOfRange { .. } => ErrorSeverity::Warning,
        }
    }

    /// Returns true if the fault comes from the pedal position sensors.
    pub fn is_pedal_fault(&self) -> bool {
        !matches!(self, SensorFault::SpeedOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_fits_in_sixteen_bytes() {
        // u8 tag, u8 channel, three f32 bounds
        assert_eq!(core::mem::size_of::<SensorFault>(), 16);
    }

    #[test]
    fn test_codes_are_distinct() {
        let faults = [
            SensorFault::AdcInitFailed { channel: 0 },
            SensorFault::AdcReadFailed { channel: 0 },
            SensorFault::AngleOutOfRange {
                channel: 0,
                angle_deg: -1.0,
                min_deg: 0.0,
                max_deg: 30.0,
            },
            SensorFault::ChannelDivergence {
                difference_deg: 6.0,
            },
            SensorFault::SpeedOutOfRange { speed_kmh: 130.0 },
        ];

        let mut codes: Vec<u8> = faults.iter().map(SensorFault::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), faults.len());
    }

    #[test]
    fn test_from_code_preserves_variant() {
        for code in 1..=5 {
            let fault = SensorFault::from_code(code);
            assert_eq!(fault.map(|f| f.code()), Some(code));
        }
        assert_eq!(SensorFault::from_code(6), None);
    }

    #[test]
    fn test_speed_fault_is_not_pedal_fault() {
        assert!(!SensorFault::SpeedOutOfRange { speed_kmh: -3.0 }.is_pedal_fault());
        assert!(SensorFault::AdcReadFailed { channel: 1 }.is_pedal_fault());
    }

    #[test]
    fn test_divergence_display_is_rounded() {
        let fault = SensorFault::ChannelDivergence {
            difference_deg: 5.987_654,
        };
        assert_eq!(fault.to_string(), "Pedal channels diverge by 5.988 deg");
    }
}
