//! Pedal-to-Torque Maps for pedalmap
//!
//! This crate turns sparse calibration data into a piecewise-linear torque
//! curve per speed regime and evaluates it for a pedal angle and a vehicle
//! speed.
//!
//! # Overview
//!
//! - [`ControlPointSet`]: breakpoints (pedal %) with a critical torque per
//!   breakpoint for the low (0 km/h) and high (50 km/h) regime
//! - [`build_segments`]: slope/intercept pairs for every breakpoint interval
//! - [`TorqueMap`]: breakpoints plus both segment tables; evaluation selects
//!   the regime by the 50 km/h threshold and the segment by interval search
//!
//! # RT Safety
//!
//! Building a map allocates and should happen once at startup.
//! [`TorqueMap::evaluate`] does not allocate, performs a binary search over
//! the breakpoints and never reads past the segment tables: inputs outside
//! the calibrated span come back as an error.
//!
//! # Example
//!
//! ```
//! use pedalmap_curves::{ControlPointSet, TorqueMap};
//!
//! // At startup
//! let map = TorqueMap::from_control_points(&ControlPointSet::reference())?;
//!
//! // Every control cycle
//! let torque = map.evaluate(30.0, 60.0)?;
//! assert!((torque - 30.0).abs() < 1e-3);
//! # Ok::<(), pedalmap_errors::PedalMapError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod control_points;
pub mod prelude;
pub mod segment;
pub mod torque_map;

pub use builder::build_segments;
pub use control_points::{ControlPointSet, REGIME_THRESHOLD_KMH, Regime};
pub use segment::{Segment, SegmentTable};
pub use torque_map::{TorqueMap, evaluate, find_segment};
