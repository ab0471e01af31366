use crate::math::{point, Point};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        point(
            self.from.x * one_t3
                + self.ctrl1.x * 3.0 * one_t2 * t
                + self.ctrl2.x * 3.0 * one_t * t2
                + self.to.x * t3,
            self.from.y * one_t3
                + self.ctrl1.y * 3.0 * one_t2 * t
                + self.ctrl2.y * 3.0 * one_t * t2
                + self.to.y * t3,
        )
    }

    /// Parameter values in the open interval (0, 1) at which the curve's x
    /// derivative is zero, in no particular order.
    pub fn local_x_extrema(&self) -> ArrayVec<[f64; 2]> {
        local_extrema(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x)
    }

    /// Parameter values in the open interval (0, 1) at which the curve's y
    /// derivative is zero, in no particular order.
    pub fn local_y_extrema(&self) -> ArrayVec<[f64; 2]> {
        local_extrema(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y)
    }
}

// The derivative is a quadratic with coefficients expressed from the control
// polygon's edge vectors. Roots outside of (0, 1) are discarded.
fn local_extrema(from: f64, ctrl1: f64, ctrl2: f64, to: f64) -> ArrayVec<[f64; 2]> {
    let mut result = ArrayVec::new();

    let p0 = ctrl1 - from;
    let p1 = ctrl2 - ctrl1;
    let p2 = to - ctrl2;

    let a = p0 - 2.0 * p1 + p2;
    let b = 2.0 * (p1 - p0);
    let c = p0;

    let mut push_if_interior = |t: f64| {
        if t > 0.0 && t < 1.0 {
            result.push(t);
        }
    };

    if a.abs() < 1e-12 {
        if b != 0.0 {
            push_if_interior(-c / b);
        }
        return result;
    }

    let delta = b * b - 4.0 * a * c;
    if delta < 0.0 {
        return result;
    }

    let sqrt_delta = delta.sqrt();
    push_if_interior((-b - sqrt_delta) / (2.0 * a));
    if delta > 0.0 {
        push_if_interior((-b + sqrt_delta) / (2.0 * a));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_end_points() {
        let curve = CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(1.0, 2.0),
            ctrl2: point(9.0, 2.0),
            to: point(10.0, 0.0),
        };

        assert_eq!(curve.sample(0.0), curve.from);
        assert_eq!(curve.sample(1.0), curve.to);
    }

    #[test]
    fn symmetric_y_extremum() {
        let curve = CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(0.0, 5.0),
            ctrl2: point(10.0, 5.0),
            to: point(10.0, 0.0),
        };

        let extrema = curve.local_y_extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-12);
        assert_eq!(curve.sample(0.5).y, 3.75);
    }

    #[test]
    fn monotonic_axis_has_no_extrema() {
        let curve = CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(2.0, 1.0),
            ctrl2: point(6.0, 2.0),
            to: point(10.0, 3.0),
        };

        assert!(curve.local_x_extrema().is_empty());
        assert!(curve.local_y_extrema().is_empty());
    }
}
