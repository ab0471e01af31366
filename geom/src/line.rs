use crate::math::{Point, Vector};
use crate::utils::min_max;
use crate::EPSILON;

// Determinants below this value are treated as parallel segments.
const PARALLEL_EPSILON: f64 = 1e-14;

/// A line segment going from `from` to `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.to_vector().length()
    }

    #[inline]
    pub fn bounding_range_x(&self) -> (f64, f64) {
        min_max(self.from.x, self.to.x)
    }

    #[inline]
    pub fn bounding_range_y(&self) -> (f64, f64) {
        min_max(self.from.y, self.to.y)
    }

    /// Parameter of the point on the segment closest to `p`, clamped to
    /// the segment's extent.
    ///
    /// Projects `p` onto the supporting line and clamps the result to
    /// `[0, 1]`, so a degenerate (zero length) segment yields `0`.
    pub fn closest_point_t(&self, p: Point) -> f64 {
        let v = self.to_vector();
        let sq_len = v.square_length();
        if sq_len == 0.0 {
            return 0.0;
        }

        let t = (p - self.from).dot(v) / sq_len;
        t.max(0.0).min(1.0)
    }

    /// The point on the segment closest to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point) -> Point {
        self.sample(self.closest_point_t(p))
    }

    /// Squared distance from `p` to the closest point on the segment.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point) -> f64 {
        (self.closest_point(p) - p).square_length()
    }

    #[inline]
    pub fn distance_to_point(&self, p: Point) -> f64 {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the intersection of two segments, `None` if the segments
    /// are parallel or the supporting lines cross outside of either
    /// segment's extent.
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        let (a1, a2) = (self.from, self.to);
        let (b1, b2) = (other.from, other.to);

        let d = (a1.x - a2.x) * (b2.y - b1.y) - (a1.y - a2.y) * (b2.x - b1.x);
        if d.abs() < PARALLEL_EPSILON {
            return None;
        }

        let da = (a1.x - b1.x) * (b2.y - b1.y) - (a1.y - b1.y) * (b2.x - b1.x);
        let db = (a1.x - a2.x) * (a1.y - b1.y) - (a1.y - a2.y) * (a1.x - b1.x);

        let ta = da / d;
        let tb = db / d;
        if (0.0..=1.0).contains(&ta) && (0.0..=1.0).contains(&tb) {
            return Some(self.sample(ta));
        }

        None
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Whether `p` lies on the segment, within [EPSILON](../constant.EPSILON.html).
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.square_distance_to_point(p) <= EPSILON * EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn closest_point_clamps_to_extent() {
        let seg = LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 0.0),
        };

        assert_eq!(seg.closest_point(point(5.0, 3.0)), point(5.0, 0.0));
        assert_eq!(seg.closest_point(point(-4.0, 3.0)), point(0.0, 0.0));
        assert_eq!(seg.closest_point(point(25.0, -1.0)), point(10.0, 0.0));
        assert_eq!(seg.square_distance_to_point(point(5.0, 3.0)), 9.0);
    }

    #[test]
    fn degenerate_segment_distance() {
        let seg = LineSegment {
            from: point(2.0, 2.0),
            to: point(2.0, 2.0),
        };

        assert_eq!(seg.closest_point_t(point(5.0, 2.0)), 0.0);
        assert_eq!(seg.square_distance_to_point(point(5.0, 2.0)), 9.0);
    }

    #[test]
    fn segment_intersection() {
        let a = LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 10.0),
        };
        let b = LineSegment {
            from: point(0.0, 10.0),
            to: point(10.0, 0.0),
        };

        assert_eq!(a.intersection(&b), Some(point(5.0, 5.0)));

        // Supporting lines cross, but outside of b's extent.
        let c = LineSegment {
            from: point(0.0, 10.0),
            to: point(4.0, 6.0),
        };
        assert_eq!(a.intersection(&c), None);

        // Parallel.
        let d = LineSegment {
            from: point(0.0, 1.0),
            to: point(10.0, 11.0),
        };
        assert_eq!(a.intersection(&d), None);
    }
}
