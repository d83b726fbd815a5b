//! Convenience re-exports for torque map users.

pub use crate::{
    ControlPointSet, REGIME_THRESHOLD_KMH, Regime, Segment, SegmentTable, TorqueMap,
    build_segments, evaluate, find_segment,
};
pub use pedalmap_errors::{CalibrationError, EvaluationError};
