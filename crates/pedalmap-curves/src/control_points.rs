//! Calibration control points and speed regimes.

use core::fmt;

use pedalmap_errors::CalibrationError;
use serde::{Deserialize, Serialize};

use crate::builder::validate;

/// Speed at or above which the high-speed torque curve applies, in km/h.
pub const REGIME_THRESHOLD_KMH: f32 = 50.0;

/// Lowest admissible breakpoint, in percent of pedal travel.
pub const MIN_BREAKPOINT_PERCENT: i32 = 0;

/// Highest admissible breakpoint, in percent of pedal travel.
pub const MAX_BREAKPOINT_PERCENT: i32 = 100;

/// One of the two torque curves, selected by vehicle speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Calibrated at standstill; used below [`REGIME_THRESHOLD_KMH`].
    Low,
    /// Calibrated at 50 km/h; used at or above [`REGIME_THRESHOLD_KMH`].
    High,
}

impl Regime {
    /// Select the regime for a vehicle speed.
    ///
    /// The speed is not range-checked here; a NaN speed selects [`Regime::Low`].
    ///
    /// ```
    /// use pedalmap_curves::Regime;
    ///
    /// assert_eq!(Regime::for_speed(49.999), Regime::Low);
    /// assert_eq!(Regime::for_speed(50.0), Regime::High);
    /// ```
    #[inline]
    pub fn for_speed(speed_kmh: f32) -> Self {
        if speed_kmh >= REGIME_THRESHOLD_KMH {
            Regime::High
        } else {
            Regime::Low
        }
    }

    /// Speed at which this regime's curve was calibrated.
    pub fn nominal_speed_kmh(self) -> f32 {
        match self {
            Regime::Low => 0.0,
            Regime::High => REGIME_THRESHOLD_KMH,
        }
    }

    /// Short lowercase name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Regime::Low => "low",
            Regime::High => "high",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} km/h)", self.name(), self.nominal_speed_kmh())
    }
}

/// Critical torque values for both regimes at a shared set of breakpoints.
///
/// Breakpoints are pedal-angle percentages; they must be strictly increasing,
/// start at 0 and end at 100. Both torque sequences pair up one-to-one with
/// the breakpoints. A set can only be obtained through [`ControlPointSet::new`],
/// [`ControlPointSet::reference`] or deserialization, all of which validate.
///
/// # Example
///
/// ```
/// use pedalmap_curves::{ControlPointSet, Regime};
///
/// let points = ControlPointSet::new(
///     vec![0, 50, 100],
///     vec![0, 40, 100],
///     vec![-20, 30, 100],
/// )?;
/// assert_eq!(points.len(), 3);
/// assert_eq!(points.torques(Regime::High), &[-20, 30, 100]);
/// # Ok::<(), pedalmap_errors::CalibrationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawControlPoints")]
pub struct ControlPointSet {
    breakpoints: Vec<i32>,
    low: Vec<i32>,
    high: Vec<i32>,
}

/// Unvalidated wire form of [`ControlPointSet`].
#[derive(Deserialize)]
struct RawControlPoints {
    breakpoints: Vec<i32>,
    low: Vec<i32>,
    high: Vec<i32>,
}

impl TryFrom<RawControlPoints> for ControlPointSet {
    type Error = CalibrationError;

    fn try_from(raw: RawControlPoints) -> Result<Self, Self::Error> {
        ControlPointSet::new(raw.breakpoints, raw.low, raw.high)
    }
}

impl ControlPointSet {
    /// Validate and wrap calibration data.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if there are fewer than two points, the
    /// torque tables do not match the breakpoints in length, a breakpoint lies
    /// outside `[0, 100]`, the breakpoints are not strictly increasing, or
    /// they do not start at 0 and end at 100.
    pub fn new(breakpoints: Vec<i32>, low: Vec<i32>, high: Vec<i32>) -> Result<Self, CalibrationError> {
        validate(&breakpoints, &low, &high)?;
        Ok(Self {
            breakpoints,
            low,
            high,
        })
    }

    /// The production calibration for the demo vehicle.
    ///
    /// | breakpoint % | 0 | 10 | 20 | 30 | 40 | 60 | 80 | 100 |
    /// |---|---|---|---|---|---|---|---|---|
    /// | low (0 km/h) | 0 | 18 | 35 | 50 | 62 | 82 | 103 | 120 |
    /// | high (50 km/h) | -30 | -10 | 10 | 30 | 45 | 72 | 95 | 120 |
    pub fn reference() -> Self {
        Self {
            breakpoints: vec![0, 10, 20, 30, 40, 60, 80, 100],
            low: vec![0, 18, 35, 50, 62, 82, 103, 120],
            high: vec![-30, -10, 10, 30, 45, 72, 95, 120],
        }
    }

    /// Breakpoints in percent of pedal travel.
    pub fn breakpoints(&self) -> &[i32] {
        &self.breakpoints
    }

    /// Critical torque values for a regime, one per breakpoint.
    pub fn torques(&self, regime: Regime) -> &[i32] {
        match regime {
            Regime::Low => &self.low,
            Regime::High => &self.high,
        }
    }

    /// Number of control points per regime.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always false for a validated set; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Iterate `(breakpoint, torque)` pairs of one regime.
    pub fn points(&self, regime: Regime) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.breakpoints
            .iter()
            .copied()
            .zip(self.torques(regime).iter().copied())
    }
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::reference()
    }
}
