//! Error types for the pedalmap CLI

use std::path::PathBuf;

use pedalmap_errors::{CalibrationError, EvaluationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read calibration file {}: {source}", path.display())]
    CalibrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed calibration file {}: {source}", path.display())]
    CalibrationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid calibration: {0}")]
    InvalidCalibration(#[from] CalibrationError),

    #[error("Torque evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl CliError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::CalibrationRead { .. } => 2,
            CliError::CalibrationParse { .. } | CliError::InvalidCalibration(_) => 3,
            CliError::Evaluation(_) => 4,
        }
    }

    /// Short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::CalibrationRead { .. } => "calibration_read",
            CliError::CalibrationParse { .. } => "calibration_parse",
            CliError::InvalidCalibration(_) => "invalid_calibration",
            CliError::Evaluation(_) => "evaluation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_has_a_dedicated_exit_status() {
        let errors = [
            CliError::CalibrationRead {
                path: PathBuf::from("cal.json"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            CliError::InvalidCalibration(CalibrationError::TooFewPoints { count: 1 }),
            CliError::Evaluation(EvaluationError::AngleOutOfRange {
                angle_percent: 101.0,
                min: 0.0,
                max: 100.0,
            }),
        ];
        let codes: Vec<(u8, &str)> = errors.iter().map(|e| (e.exit_code(), e.kind())).collect();
        assert_eq!(
            codes,
            [(2, "calibration_read"), (3, "invalid_calibration"), (4, "evaluation")]
        );
    }

    #[test]
    fn test_parse_error_shares_invalid_calibration_status() {
        let source = match serde_json::from_str::<u8>("{") {
            Ok(_) => panic!("malformed JSON parsed"),
            Err(e) => e,
        };
        let err = CliError::CalibrationParse {
            path: PathBuf::from("cal.json"),
            source,
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.kind(), "calibration_parse");
    }
}
