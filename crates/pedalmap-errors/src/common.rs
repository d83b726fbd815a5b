//! Top-level error type and classification shared by all pedalmap crates.

use core::fmt;

use crate::{CalibrationError, EvaluationError, SensorFault};

/// Top-level error type wrapping every pedalmap sub-error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PedalMapError {
    /// Pedal or speed acquisition fault
    #[error("Sensor fault: {0}")]
    Sensor(#[from] SensorFault),

    /// Malformed calibration data
    #[error("Invalid calibration: {0}")]
    Calibration(#[from] CalibrationError),

    /// Torque evaluation refused its input
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl PedalMapError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PedalMapError::Sensor(_) => ErrorCategory::Sensor,
            PedalMapError::Calibration(_) => ErrorCategory::Calibration,
            PedalMapError::Evaluation(_) => ErrorCategory::Evaluation,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PedalMapError::Sensor(fault) => fault.severity(),
            PedalMapError::Calibration(_) => ErrorSeverity::Critical,
            PedalMapError::Evaluation(_) => ErrorSeverity::Error,
        }
    }

    /// Returns true if the process cannot continue after this error.
    ///
    /// Calibration errors are detected at startup and cannot be repaired at
    /// runtime. Sensor faults and evaluation errors only affect one cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PedalMapError::Calibration(_))
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Sensor acquisition faults
    Sensor = 0,
    /// Calibration data errors
    Calibration = 1,
    /// Evaluator input errors
    Evaluation = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Sensor => write!(f, "Sensor"),
            ErrorCategory::Calibration => write!(f, "Calibration"),
            ErrorCategory::Evaluation => write!(f, "Evaluation"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, torque must not be trusted
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Sensor.to_string(), "Sensor");
        assert_eq!(ErrorCategory::Calibration.to_string(), "Calibration");
        assert_eq!(ErrorCategory::Evaluation.to_string(), "Evaluation");
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::Error);
        assert!(ErrorSeverity::Error > ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning > ErrorSeverity::Info);
    }

    #[test]
    fn test_category_follows_variant() {
        let err: PedalMapError = SensorFault::AdcReadFailed { channel: 1 }.into();
        assert_eq!(err.category(), ErrorCategory::Sensor);

        let err: PedalMapError = CalibrationError::TooFewPoints { count: 0 }.into();
        assert_eq!(err.category(), ErrorCategory::Calibration);
    }

    #[test]
    fn test_only_calibration_is_fatal() {
        let calibration: PedalMapError = CalibrationError::TooFewPoints { count: 1 }.into();
        let sensor: PedalMapError = SensorFault::ChannelDivergence {
            difference_deg: 6.0,
        }
        .into();
        let evaluation: PedalMapError = EvaluationError::AngleOutOfRange {
            angle_percent: 120.0,
            min: 0.0,
            max: 100.0,
        }
        .into();

        assert!(calibration.is_fatal());
        assert!(!sensor.is_fatal());
        assert!(!evaluation.is_fatal());
    }

    #[test]
    fn test_pedalmap_error_is_std_error() {
        let err: PedalMapError = SensorFault::AdcInitFailed { channel: 0 }.into();
        let _: &dyn std::error::Error = &err;
    }
}
