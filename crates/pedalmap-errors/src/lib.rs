//! Error taxonomy for pedalmap
//!
//! Every crate in the workspace reports failures through the types defined
//! here, so the control cycle and the binary can classify them uniformly.
//!
//! - [`sensor`]: faults raised by pedal and speed acquisition. These never
//!   abort a cycle; they force a safe torque of zero.
//! - [`calibration`]: malformed control-point data, detected once when the
//!   torque map is built. These are fatal.
//! - [`evaluation`]: inputs the torque evaluator refuses to extrapolate.
//! - [`common`]: the top-level [`PedalMapError`] plus category and severity
//!   classification.
//!
//! # Example
//!
//! ```
//! use pedalmap_errors::prelude::*;
//!
//! fn check_speed(speed_kmh: f32) -> Result<f32> {
//!     if !(0.0..=120.0).contains(&speed_kmh) {
//!         return Err(SensorFault::SpeedOutOfRange { speed_kmh }.into());
//!     }
//!     Ok(speed_kmh)
//! }
//!
//! assert!(check_speed(130.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod calibration;
pub mod common;
pub mod evaluation;
pub mod prelude;
pub mod sensor;

pub use calibration::CalibrationError;
pub use common::{ErrorCategory, ErrorSeverity, PedalMapError};
pub use evaluation::EvaluationError;
pub use sensor::SensorFault;

/// A specialized `Result` type for pedalmap operations.
pub type Result<T> = std::result::Result<T, PedalMapError>;
