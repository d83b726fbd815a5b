//! Calibration data errors.
//!
//! Raised while turning a control-point set into segment tables. A torque
//! map that fails these checks would divide by zero or extrapolate outside
//! the pedal travel, so the errors are fatal at startup.

/// Malformed control-point data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    /// Fewer than two control points, so no segment can be formed
    #[error("Calibration needs at least 2 control points, got {count}")]
    TooFewPoints {
        /// Number of breakpoints supplied
        count: usize,
    },

    /// A torque sequence does not pair up with the breakpoints
    #[error("{regime} torque table has {torques} entries but there are {breakpoints} breakpoints")]
    LengthMismatch {
        /// Regime whose table is mismatched
        regime: &'static str,
        /// Number of breakpoints
        breakpoints: usize,
        /// Number of torque values
        torques: usize,
    },

    /// Breakpoints must be strictly increasing
    #[error(
        "Breakpoint {index} ({current}%) does not exceed the previous breakpoint ({previous}%)"
    )]
    NonIncreasingBreakpoints {
        /// Index of the offending breakpoint
        index: usize,
        /// Value of the preceding breakpoint
        previous: i32,
        /// Value of the offending breakpoint
        current: i32,
    },

    /// A breakpoint lies outside the pedal travel
    #[error("Breakpoint {index} ({value}%) is outside [0, 100]%")]
    BreakpointOutOfRange {
        /// Index of the offending breakpoint
        index: usize,
        /// Value of the offending breakpoint
        value: i32,
    },

    /// The breakpoints do not span the full pedal travel
    #[error("Breakpoints must span the full travel: expected {expected}% at index {index}, got {actual}%")]
    MissingEndpoint {
        /// Index of the endpoint (first or last)
        index: usize,
        /// Required value
        expected: i32,
        /// Supplied value
        actual: i32,
    },

    /// A segment's coefficients overflowed `f32`
    #[error("{regime} segment {index} has a non-finite slope or intercept")]
    NonFiniteSegment {
        /// Regime whose table contains the segment
        regime: &'static str,
        /// Index of the offending segment
        index: usize,
    },
}
