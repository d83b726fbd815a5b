//! # pedalmap-controller
//!
//! One control cycle of the pedal-to-torque controller:
//!
//! 1. Both pedal ADC channels are initialized; a failure lights the fault
//!    indicator and every later cycle yields zero torque.
//! 2. The pedal angle and the vehicle speed are acquired.
//! 3. Any sensor fault lights the indicator and forces torque to zero
//!    without consulting the torque map.
//! 4. Otherwise the speed selects the regime and the map yields the torque.
//!
//! Every cycle produces a [`CycleReport`] with the intermediate values.
//!
//! ## Example
//!
//! ```rust
//! use pedalmap_controller::TorqueController;
//! use pedalmap_curves::TorqueMap;
//! use pedalmap_sensors::{MockAdc, MockErrorLed, MockSpeedometer};
//!
//! let map = TorqueMap::reference()?;
//! let mut controller = TorqueController::new(
//!     map,
//!     MockAdc::with_counts(409, 450),
//!     MockSpeedometer::new(0.0),
//!     MockErrorLed::new(),
//! );
//! controller.init();
//!
//! let report = controller.run_cycle()?;
//! assert!(report.fault.is_none());
//! assert!((report.torque_nm - 71.97).abs() < 0.01);
//! assert_eq!(report.exit_status(), 71);
//! # Ok::<(), pedalmap_errors::PedalMapError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod controller;
pub mod prelude;
pub mod report;

pub use controller::TorqueController;
pub use report::{CycleReport, FaultSummary};
