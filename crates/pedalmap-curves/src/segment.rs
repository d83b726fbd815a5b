//! Linear segments and per-regime segment tables.

use serde::{Deserialize, Serialize};

/// One linear piece of a torque curve: `torque = slope * angle + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Torque change per percent of pedal travel.
    pub slope: f32,
    /// Torque at 0 % when the line is extended.
    pub intercept: f32,
}

impl Segment {
    /// Create a segment from its coefficients.
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    /// The line through `(x0, y0)` and `(x1, y1)`.
    ///
    /// Equal abscissas yield non-finite coefficients; see [`is_finite`](Self::is_finite).
    ///
    /// ```
    /// use pedalmap_curves::Segment;
    ///
    /// let segment = Segment::through((40, 62), (60, 82));
    /// assert!((segment.slope - 1.0).abs() < 1e-6);
    /// assert!((segment.intercept - 22.0).abs() < 1e-4);
    /// ```
    pub fn through((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Self {
        let slope = (y1 as f32 - y0 as f32) / (x1 as f32 - x0 as f32);
        let intercept = y0 as f32 - slope * x0 as f32;
        Self { slope, intercept }
    }

    /// True if both coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    /// Evaluate the line at `angle_percent`.
    #[inline]
    pub fn evaluate(&self, angle_percent: f32) -> f32 {
        self.slope * angle_percent + self.intercept
    }
}

/// The segments of one regime, in breakpoint order.
///
/// Built once from a [`ControlPointSet`](crate::ControlPointSet) and
/// immutable afterwards. Segment `i` spans breakpoints `i` and `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Number of segments (one less than the number of breakpoints).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the table holds no segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// All segments in order.
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the segments in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentTable {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
