//! Shared test utilities for pedalmap.
//!
//! - [`mod@must`]: `Result`/`Option` unwrapping with `#[track_caller]`
//! - [`assertions`]: tolerance-based float assertions for torques and angles
//! - [`fixtures`]: the reference calibration as plain arrays, for tests that
//!   must not depend on the crate under test to produce their expectations
//!
//! ```rust,ignore
//! use pedalmap_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod fixtures;
pub mod must;
pub mod prelude;

pub use must::*;
