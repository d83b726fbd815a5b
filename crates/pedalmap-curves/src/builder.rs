//! Segment table construction from control points.
//!
//! Runs once at startup. For every pair of neighbouring breakpoints
//! `(x0, x1)` with torques `(y0, y1)`:
//!
//! ```text
//! slope     = (y1 - y0) / (x1 - x0)
//! intercept = y0 - slope * x0
//! ```
//!
//! Both regimes share the breakpoints. The control points are fully
//! validated before any division happens, and every resulting segment must
//! have finite coefficients.

use pedalmap_errors::CalibrationError;
use tracing::debug;

use crate::control_points::{MAX_BREAKPOINT_PERCENT, MIN_BREAKPOINT_PERCENT, Regime};
use crate::segment::{Segment, SegmentTable};

/// Build the low- and high-regime segment tables.
///
/// Returns `(segments_low, segments_high)`, each with one segment fewer than
/// there are breakpoints.
///
/// # Errors
///
/// Returns [`CalibrationError`] if fewer than two breakpoints are given, a
/// torque table does not match the breakpoints in length, a breakpoint lies
/// outside `[0, 100]`, the breakpoints are not strictly increasing, they do
/// not start at 0 and end at 100, or a segment's coefficients are not finite.
///
/// # Example
///
/// ```
/// use pedalmap_curves::build_segments;
///
/// let (low, high) = build_segments(&[0, 10, 100], &[0, 18, 120], &[-30, -10, 120])?;
/// assert_eq!(low.len(), 2);
/// assert_eq!(high.len(), 2);
/// # Ok::<(), pedalmap_errors::CalibrationError>(())
/// ```
pub fn build_segments(
    breakpoints: &[i32],
    torque_low: &[i32],
    torque_high: &[i32],
) -> Result<(SegmentTable, SegmentTable), CalibrationError> {
    validate(breakpoints, torque_low, torque_high)?;

    let low = build_table(breakpoints, torque_low, Regime::Low)?;
    let high = build_table(breakpoints, torque_high, Regime::High)?;
    Ok((low, high))
}

/// Full control-point validation shared by the builder and
/// [`ControlPointSet`](crate::ControlPointSet).
pub(crate) fn validate(
    breakpoints: &[i32],
    torque_low: &[i32],
    torque_high: &[i32],
) -> Result<(), CalibrationError> {
    if breakpoints.len() < 2 {
        return Err(CalibrationError::TooFewPoints {
            count: breakpoints.len(),
        });
    }

    for (regime, torques) in [(Regime::Low, torque_low), (Regime::High, torque_high)] {
        if torques.len() != breakpoints.len() {
            return Err(CalibrationError::LengthMismatch {
                regime: regime.name(),
                breakpoints: breakpoints.len(),
                torques: torques.len(),
            });
        }
    }

    for (index, &value) in breakpoints.iter().enumerate() {
        if !(MIN_BREAKPOINT_PERCENT..=MAX_BREAKPOINT_PERCENT).contains(&value) {
            return Err(CalibrationError::BreakpointOutOfRange { index, value });
        }
    }

    for (index, (&previous, &current)) in pairs(breakpoints).enumerate() {
        if current <= previous {
            return Err(CalibrationError::NonIncreasingBreakpoints {
                index: index.saturating_add(1),
                previous,
                current,
            });
        }
    }

    if let Some(&first) = breakpoints.first()
        && first != MIN_BREAKPOINT_PERCENT
    {
        return Err(CalibrationError::MissingEndpoint {
            index: 0,
            expected: MIN_BREAKPOINT_PERCENT,
            actual: first,
        });
    }
    if let Some(&last) = breakpoints.last()
        && last != MAX_BREAKPOINT_PERCENT
    {
        return Err(CalibrationError::MissingEndpoint {
            index: breakpoints.len().saturating_sub(1),
            expected: MAX_BREAKPOINT_PERCENT,
            actual: last,
        });
    }

    Ok(())
}

fn build_table(
    breakpoints: &[i32],
    torques: &[i32],
    regime: Regime,
) -> Result<SegmentTable, CalibrationError> {
    let mut segments = Vec::with_capacity(breakpoints.len().saturating_sub(1));

    for (index, ((&x0, &x1), (&y0, &y1))) in pairs(breakpoints).zip(pairs(torques)).enumerate() {
        let segment = Segment::through((x0, y0), (x1, y1));
        if !segment.is_finite() {
            return Err(CalibrationError::NonFiniteSegment {
                regime: regime.name(),
                index,
            });
        }
        debug!(
            "{} regime segment {}: slope {:.4}, intercept {:.4}",
            regime.name(),
            index,
            segment.slope,
            segment.intercept
        );
        segments.push(segment);
    }

    Ok(SegmentTable::from_segments(segments))
}

/// Neighbouring pairs `(v[i], v[i + 1])` without indexing.
fn pairs<T>(values: &[T]) -> impl Iterator<Item = (&T, &T)> {
    values.iter().zip(values.iter().skip(1))
}
