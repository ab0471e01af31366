use crate::math::{point, Point};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        point(
            self.from.x * one_t2 + self.ctrl.x * 2.0 * one_t * t + self.to.x * t2,
            self.from.y * one_t2 + self.ctrl.y * 2.0 * one_t * t + self.to.y * t2,
        )
    }

    /// Return the parameter value at which the curve's x derivative is zero,
    /// if there is one in the open interval (0, 1).
    pub fn local_x_extremum_t(&self) -> Option<f64> {
        local_extremum(self.from.x, self.ctrl.x, self.to.x)
    }

    /// Return the parameter value at which the curve's y derivative is zero,
    /// if there is one in the open interval (0, 1).
    pub fn local_y_extremum_t(&self) -> Option<f64> {
        local_extremum(self.from.y, self.ctrl.y, self.to.y)
    }
}

// P'(t) = 0  <=>  t = (from - ctrl) / (from - 2 * ctrl + to)
//
// When the control point is exactly in the middle the coordinate is linear
// in t and there is no interior extremum.
fn local_extremum(from: f64, ctrl: f64, to: f64) -> Option<f64> {
    let div = from - 2.0 * ctrl + to;
    if div == 0.0 {
        return None;
    }

    let t = (from - ctrl) / div;
    if t > 0.0 && t < 1.0 {
        return Some(t);
    }

    None
}
