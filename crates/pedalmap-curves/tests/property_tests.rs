//! Property-based tests for segment construction and torque evaluation.

use pedalmap_curves::{ControlPointSet, Regime, TorqueMap, build_segments};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

/// Tolerance for randomly generated tables; f32 intercepts grow with slope.
const TOLERANCE: f32 = 0.05;

/// Valid calibrations: 0 and 100 plus up to six interior breakpoints, with
/// torques in a range that keeps f32 cancellation error small.
fn calibration() -> impl Strategy<Value = ControlPointSet> {
    prop::collection::btree_set(1i32..100, 0..7).prop_flat_map(|interior| {
        let mut breakpoints = vec![0];
        breakpoints.extend(interior);
        breakpoints.push(100);
        let n = breakpoints.len();
        (
            Just(breakpoints),
            prop::collection::vec(-200i32..200, n),
            prop::collection::vec(-200i32..200, n),
        )
            .prop_filter_map("valid calibration", |(breakpoints, low, high)| {
                ControlPointSet::new(breakpoints, low, high).ok()
            })
    })
}

fn sanitize_f32(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn segments_are_continuous_at_breakpoints(points in calibration()) {
        let (low, high) = build_segments(
            points.breakpoints(),
            points.torques(Regime::Low),
            points.torques(Regime::High),
        )?;

        for table in [&low, &high] {
            let interior = points.breakpoints().iter().skip(1);
            let neighbours = table.iter().zip(table.iter().skip(1));
            for (&breakpoint, (left, right)) in interior.zip(neighbours) {
                let x = breakpoint as f32;
                prop_assert!(
                    (left.evaluate(x) - right.evaluate(x)).abs() < TOLERANCE,
                    "discontinuity at {}%: {} vs {}",
                    breakpoint,
                    left.evaluate(x),
                    right.evaluate(x)
                );
            }
        }
    }

    #[test]
    fn control_points_are_recovered(points in calibration()) {
        let map = TorqueMap::from_control_points(&points)?;

        for regime in [Regime::Low, Regime::High] {
            for (breakpoint, torque) in points.points(regime) {
                let evaluated = map.evaluate(breakpoint as f32, regime.nominal_speed_kmh())?;
                prop_assert!(
                    (evaluated - torque as f32).abs() < TOLERANCE,
                    "{} regime at {}%: expected {}, got {}",
                    regime.name(),
                    breakpoint,
                    torque,
                    evaluated
                );
            }
        }
    }

    #[test]
    fn torque_stays_between_segment_endpoints(points in calibration(), angle in 0.0f32..=100.0) {
        let map = TorqueMap::from_control_points(&points)?;
        let index = map.segment_index(angle)?;

        for regime in [Regime::Low, Regime::High] {
            let torques = points.torques(regime);
            let (Some(&y0), Some(&y1)) = (torques.get(index), torques.get(index + 1)) else {
                return Err(TestCaseError::fail(format!("segment {index} has no endpoints")));
            };
            let lower = y0.min(y1) as f32 - TOLERANCE;
            let upper = y0.max(y1) as f32 + TOLERANCE;
            let torque = map.evaluate_in(regime, angle)?;
            prop_assert!(
                (lower..=upper).contains(&torque),
                "{} regime at {}%: {} outside [{}, {}]",
                regime.name(),
                angle,
                torque,
                lower,
                upper
            );
        }
    }

    #[test]
    fn segment_contains_angle(points in calibration(), angle in 0.0f32..=100.0) {
        let map = TorqueMap::from_control_points(&points)?;
        let index = map.segment_index(angle)?;
        let breakpoints = map.breakpoints();
        let (Some(&start), Some(&end)) = (breakpoints.get(index), breakpoints.get(index + 1)) else {
            return Err(TestCaseError::fail(format!("segment {index} out of bounds")));
        };
        prop_assert!(start <= angle && angle <= end);
    }
}

#[quickcheck]
fn prop_regime_switch_at_fifty(angle: f32) -> bool {
    let angle = sanitize_f32(angle).abs() % 100.0;
    let Ok(map) = TorqueMap::reference() else {
        return false;
    };

    let below = map.evaluate(angle, 49.999);
    let at = map.evaluate(angle, 50.0);
    below == map.evaluate_in(Regime::Low, angle) && at == map.evaluate_in(Regime::High, angle)
}

#[quickcheck]
fn prop_out_of_span_always_rejected(angle: f32, speed: f32) -> bool {
    let Ok(map) = TorqueMap::reference() else {
        return false;
    };
    let angle = sanitize_f32(angle);
    let inside = (0.0..=100.0).contains(&angle);
    inside == map.evaluate(angle, sanitize_f32(speed)).is_ok()
}

#[quickcheck]
fn prop_evaluation_is_deterministic(angle: f32, speed: f32) -> bool {
    let Ok(map) = TorqueMap::reference() else {
        return false;
    };
    let angle = sanitize_f32(angle).abs() % 100.0;
    let speed = sanitize_f32(speed);
    map.evaluate(angle, speed) == map.evaluate(angle, speed)
}
