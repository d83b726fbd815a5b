//! Torque evaluation errors.

/// Input the torque evaluator refuses to map.
///
/// The evaluator only interpolates inside the calibrated pedal travel; it
/// never extrapolates past the first or last breakpoint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    /// Pedal angle outside the breakpoint span, or not a finite number
    #[error("Pedal angle {angle_percent}% is outside the calibrated span [{min}, {max}]%")]
    AngleOutOfRange {
        /// The rejected angle percentage
        angle_percent: f32,
        /// First breakpoint
        min: f32,
        /// Last breakpoint
        max: f32,
    },
}
