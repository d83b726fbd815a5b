//! Speed-dependent pedal-to-torque map.

use pedalmap_errors::{CalibrationError, EvaluationError};
use tracing::trace;

use crate::builder::build_segments;
use crate::control_points::{ControlPointSet, Regime};
use crate::segment::SegmentTable;

/// Breakpoints plus one segment table per speed regime.
///
/// The map is immutable once built and holds no interior mutability, so a
/// single instance can be shared by reference between any number of
/// evaluators.
///
/// # Example
///
/// ```
/// use pedalmap_curves::{ControlPointSet, TorqueMap};
///
/// let map = TorqueMap::from_control_points(&ControlPointSet::reference())?;
///
/// // 50 % pedal at standstill falls inside the 40-60 % segment
/// let torque = map.evaluate(50.0, 0.0)?;
/// assert!((torque - 72.0).abs() < 1e-3);
/// # Ok::<(), pedalmap_errors::PedalMapError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueMap {
    breakpoints: Vec<f32>,
    low: SegmentTable,
    high: SegmentTable,
}

impl TorqueMap {
    /// Build the map from validated control points.
    ///
    /// # Errors
    ///
    /// Propagates [`CalibrationError`] from the segment builder.
    pub fn from_control_points(points: &ControlPointSet) -> Result<Self, CalibrationError> {
        let (low, high) = build_segments(
            points.breakpoints(),
            points.torques(Regime::Low),
            points.torques(Regime::High),
        )?;

        Ok(Self {
            breakpoints: points.breakpoints().iter().map(|&b| b as f32).collect(),
            low,
            high,
        })
    }

    /// Build the map from [`ControlPointSet::reference`].
    ///
    /// # Errors
    ///
    /// Only fails if the built-in calibration is malformed.
    pub fn reference() -> Result<Self, CalibrationError> {
        Self::from_control_points(&ControlPointSet::reference())
    }

    /// Breakpoints in percent of pedal travel.
    pub fn breakpoints(&self) -> &[f32] {
        &self.breakpoints
    }

    /// Segment table for a regime.
    pub fn table(&self, regime: Regime) -> &SegmentTable {
        match regime {
            Regime::Low => &self.low,
            Regime::High => &self.high,
        }
    }

    /// Index of the segment whose interval contains `angle_percent`.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::AngleOutOfRange`] if the angle lies outside
    /// the breakpoint span or is not finite.
    pub fn segment_index(&self, angle_percent: f32) -> Result<usize, EvaluationError> {
        find_segment(&self.breakpoints, angle_percent).ok_or_else(|| self.out_of_range(angle_percent))
    }

    /// Torque for a pedal angle and vehicle speed.
    ///
    /// Selects the regime with [`Regime::for_speed`], then evaluates the
    /// containing segment.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::AngleOutOfRange`] if the angle lies outside
    /// the breakpoint span or is not finite.
    pub fn evaluate(&self, angle_percent: f32, speed_kmh: f32) -> Result<f32, EvaluationError> {
        self.evaluate_in(Regime::for_speed(speed_kmh), angle_percent)
    }

    /// Torque for a pedal angle on an explicitly chosen regime curve.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::AngleOutOfRange`] if the angle lies outside
    /// the breakpoint span or is not finite.
    pub fn evaluate_in(&self, regime: Regime, angle_percent: f32) -> Result<f32, EvaluationError> {
        let index = self.segment_index(angle_percent)?;
        let segment = self
            .table(regime)
            .get(index)
            .ok_or_else(|| self.out_of_range(angle_percent))?;

        let torque = segment.evaluate(angle_percent);
        trace!(
            "angle {:.3}% on {} curve, segment {} -> torque {:.3}",
            angle_percent,
            regime.name(),
            index,
            torque
        );
        Ok(torque)
    }

    fn out_of_range(&self, angle_percent: f32) -> EvaluationError {
        EvaluationError::AngleOutOfRange {
            angle_percent,
            min: self.breakpoints.first().copied().unwrap_or(f32::NAN),
            max: self.breakpoints.last().copied().unwrap_or(f32::NAN),
        }
    }
}

/// Torque for `angle_percent` at `speed_kmh` on `map`.
///
/// Free-function form of [`TorqueMap::evaluate`].
///
/// # Errors
///
/// See [`TorqueMap::evaluate`].
#[inline]
pub fn evaluate(angle_percent: f32, speed_kmh: f32, map: &TorqueMap) -> Result<f32, EvaluationError> {
    map.evaluate(angle_percent, speed_kmh)
}

/// Find the segment `i` with `breakpoints[i] <= x < breakpoints[i + 1]`.
///
/// `x` equal to the last breakpoint belongs to the last segment. Returns
/// `None` for fewer than two breakpoints, for `x` outside
/// `[first, last]` and for NaN. Breakpoints must be strictly increasing.
///
/// ```
/// use pedalmap_curves::find_segment;
///
/// let breakpoints = [0.0, 10.0, 20.0, 30.0, 40.0, 60.0, 80.0, 100.0];
/// assert_eq!(find_segment(&breakpoints, 50.0), Some(4));
/// assert_eq!(find_segment(&breakpoints, 60.0), Some(5));
/// assert_eq!(find_segment(&breakpoints, 100.0), Some(6));
/// assert_eq!(find_segment(&breakpoints, 100.5), None);
/// ```
pub fn find_segment(breakpoints: &[f32], x: f32) -> Option<usize> {
    let first = *breakpoints.first()?;
    let last = *breakpoints.last()?;
    if breakpoints.len() < 2 || !(first..=last).contains(&x) {
        return None;
    }

    // `first <= x`, so at least one breakpoint is counted.
    let at_or_below = breakpoints.partition_point(|&b| b <= x);
    let last_segment = breakpoints.len().saturating_sub(2);
    Some(at_or_below.saturating_sub(1).min(last_segment))
}
