//! Convenience re-exports for common test utilities.

pub use crate::assertions::TORQUE_TOLERANCE;
pub use crate::fixtures::{
    BREAKPOINTS, DEMO_ADC_COUNTS, DEMO_SPEED_KMH, SEGMENTS_HIGH, SEGMENTS_LOW, TORQUE_HIGH,
    TORQUE_LOW, reference_rows,
};
pub use crate::must::{must, must_err, must_some};
pub use crate::{assert_approx_eq, assert_torque_eq};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
