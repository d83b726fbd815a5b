//! Commonly used error types and aliases.
//!
//! ```
//! use pedalmap_errors::prelude::*;
//!
//! let err: PedalMapError = CalibrationError::TooFewPoints { count: 1 }.into();
//! assert_eq!(err.category(), ErrorCategory::Calibration);
//! ```

pub use crate::{
    Result,
    calibration::CalibrationError,
    common::{ErrorCategory, ErrorSeverity, PedalMapError},
    evaluation::EvaluationError,
    sensor::SensorFault,
};
