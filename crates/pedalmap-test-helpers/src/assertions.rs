//! Float assertions with explicit tolerances.

/// Default tolerance for torque comparisons, in Nm.
pub const TORQUE_TOLERANCE: f32 = 1e-3;

/// Assert that two floating-point values are within `tolerance` of each other.
///
/// NaN on either side always fails.
///
/// ```rust
/// use pedalmap_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.85_f32 * 100.0 + 35.0, 120.0, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a torque matches the expected value within [`TORQUE_TOLERANCE`].
///
/// ```rust
/// use pedalmap_test_helpers::assert_torque_eq;
///
/// assert_torque_eq!(72.0004_f32, 72.0);
/// ```
#[macro_export]
macro_rules! assert_torque_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_approx_eq!($actual, $expected, $crate::assertions::TORQUE_TOLERANCE)
    };
    ($actual:expr, $expected:expr, $($arg:tt)+) => {
        $crate::assert_approx_eq!(
            $actual,
            $expected,
            $crate::assertions::TORQUE_TOLERANCE,
            $($arg)+
        )
    };
}
