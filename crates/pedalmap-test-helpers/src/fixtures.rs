//! Reference calibration as plain data.
//!
//! Tests compare the builder and evaluator against these arrays rather than
//! against values produced by the code under test.

/// Reference breakpoints, in percent of pedal travel.
pub const BREAKPOINTS: [i32; 8] = [0, 10, 20, 30, 40, 60, 80, 100];

/// Reference critical torques at standstill.
pub const TORQUE_LOW: [i32; 8] = [0, 18, 35, 50, 62, 82, 103, 120];

/// Reference critical torques at 50 km/h.
pub const TORQUE_HIGH: [i32; 8] = [-30, -10, 10, 30, 45, 72, 95, 120];

/// Hand-computed `(slope, intercept)` of every low-regime segment.
pub const SEGMENTS_LOW: [(f32, f32); 7] = [
    (1.8, 0.0),
    (1.7, 1.0),
    (1.5, 5.0),
    (1.2, 14.0),
    (1.0, 22.0),
    (1.05, 19.0),
    (0.85, 35.0),
];

/// Hand-computed `(slope, intercept)` of every high-regime segment.
pub const SEGMENTS_HIGH: [(f32, f32); 7] = [
    (2.0, -30.0),
    (2.0, -30.0),
    (2.0, -30.0),
    (1.5, -15.0),
    (1.35, -9.0),
    (1.15, 3.0),
    (1.25, -5.0),
];

/// Raw ADC counts fed to the two pedal channels in the demo run.
pub const DEMO_ADC_COUNTS: (u16, u16) = (103, 205);

/// Speedometer reading of the demo run, in km/h.
pub const DEMO_SPEED_KMH: f32 = 100.0;

/// Iterate `(breakpoint, low torque, high torque)` rows of the reference table.
pub fn reference_rows() -> impl Iterator<Item = (i32, i32, i32)> {
    BREAKPOINTS
        .into_iter()
        .zip(TORQUE_LOW)
        .zip(TORQUE_HIGH)
        .map(|((b, low), high)| (b, low, high))
}
