//! Elliptic arc approximation with cubic bezier segments.
//!
//! The number of segments is chosen so that the maximum deviation between
//! each bezier segment and the true ellipse stays below a provided
//! threshold, using the error bound from Luc Maisonobe's "Drawing an
//! elliptical arc using polylines, quadratic or cubic Bezier curves".

use crate::cubic_bezier::CubicBezierSegment;
use crate::math::{point, vector, Angle, Point, Transform2D, Vector};
use crate::utils::{modulo, PI2};
use crate::EPSILON;
use std::f64::consts::FRAC_PI_2;

/// Hard cap on the number of bezier segments approximating a single arc.
const MAX_SEGMENTS: u32 = 1024;

// Error estimation coefficients for 0 < rb/ra < 1/4.
const COEFFS_LOW: [[[f64; 4]; 4]; 2] = [
    [
        [3.85268, -21.229, -0.330434, 0.0127842],
        [-1.61486, 0.706564, 0.225945, 0.263682],
        [-0.910164, 0.388383, 0.00551445, 0.00671814],
        [-0.630184, 0.192402, 0.0098871, 0.0102527],
    ],
    [
        [-0.162211, 9.94329, 0.13723, 0.0124084],
        [-0.253135, 0.00187735, 0.0230286, 0.01264],
        [-0.0695069, -0.0437594, 0.0120636, 0.0163087],
        [-0.0328856, -0.00926032, -0.00173573, 0.00527385],
    ],
];

// Error estimation coefficients for 1/4 <= rb/ra <= 1.
const COEFFS_HIGH: [[[f64; 4]; 4]; 2] = [
    [
        [0.0899116, -19.2349, -4.11711, 0.183362],
        [0.138148, -1.45804, 1.32044, 1.38474],
        [0.230903, -0.450262, 0.219963, 0.414038],
        [0.0590565, -0.101062, 0.0430592, 0.0204699],
    ],
    [
        [0.0164649, 9.89394, 0.0919496, 0.00760802],
        [0.0191603, -0.0322058, 0.0134667, -0.0825018],
        [0.0156192, -0.017535, 0.00326508, -0.228157],
        [-0.0236752, 0.0405821, -0.0173086, 0.176187],
    ],
];

// Safety factor turning the "best" error approximation into a max bound.
const SAFETY: [f64; 4] = [0.001, 4.98, 0.207, 0.0067];

// Rational function with a quadratic numerator and a linear denominator.
#[inline]
fn rational_function(x: f64, c: &[f64; 4]) -> f64 {
    (x * (x * c[0] + c[1]) + c[2]) / (x + c[3])
}

/// Upper bound of the deviation between a single cubic bezier segment
/// covering the sub-arc `[eta_a, eta_b]` and the true ellipse of radii
/// `ra` and `rb`.
///
/// Angles follow the y-up math convention and the sub-arc is expected to
/// span at most a quarter turn.
pub fn estimate_error(ra: f64, rb: f64, eta_a: f64, eta_b: f64) -> f64 {
    let eta = 0.5 * (eta_a + eta_b);

    let x = rb / ra;
    let d_eta = eta_b - eta_a;
    let cos2 = (2.0 * eta).cos();
    let cos4 = (4.0 * eta).cos();
    let cos6 = (6.0 * eta).cos();

    let coeffs = if x < 0.25 { &COEFFS_LOW } else { &COEFFS_HIGH };

    let c0 = rational_function(x, &coeffs[0][0])
        + cos2 * rational_function(x, &coeffs[0][1])
        + cos4 * rational_function(x, &coeffs[0][2])
        + cos6 * rational_function(x, &coeffs[0][3]);

    let c1 = rational_function(x, &coeffs[1][0])
        + cos2 * rational_function(x, &coeffs[1][1])
        + cos4 * rational_function(x, &coeffs[1][2])
        + cos6 * rational_function(x, &coeffs[1][3]);

    rational_function(x, &SAFETY) * ra * (c0 + c1 * d_eta).exp()
}

#[inline]
fn next_angle(ccw: bool, delta: f64, prev: f64) -> f64 {
    if ccw {
        prev + delta
    } else {
        prev - delta
    }
}

/// An elliptic arc, defined by its center, its two half axes and a pair
/// of angles.
///
/// As constructed by users the angles are expressed in the y-down
/// coordinate space. [normalized](#method.normalized) flips them into the
/// y-up math convention that the sampling and approximation methods
/// expect.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radii: Vector,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
}

impl Arc {
    /// Flip the angles from the y-down coordinate space into the y-up math
    /// convention and put them in a canonical order.
    ///
    /// After normalization both angles are non-negative, a span that
    /// amounts to a full turn (within [EPSILON](../constant.EPSILON.html))
    /// becomes exactly `0..2π` (or `2π..0` when clockwise), and the angle
    /// order agrees with the winding so that stepping from `start_angle`
    /// towards `end_angle` never wraps.
    pub fn normalized(&self) -> Self {
        let mut start = -self.start_angle.radians;
        let mut end = -self.end_angle.radians;
        let clockwise = !self.clockwise;

        let mut diff = (end - start).abs();
        if diff + EPSILON > PI2 {
            diff = modulo(diff, PI2);
            if diff < EPSILON || PI2 - diff < EPSILON {
                if !clockwise {
                    start = 0.0;
                    end = PI2;
                } else {
                    start = PI2;
                    end = 0.0;
                }
            } else {
                start = modulo(start, PI2);
                end = modulo(end, PI2);
            }
        } else {
            start = modulo(start, PI2);
            end = modulo(end, PI2);
        }

        if start < 0.0 {
            start += PI2;
        }
        if end < 0.0 {
            end += PI2;
        }
        if start < end && clockwise {
            start += PI2;
        }
        if end < start && !clockwise {
            end += PI2;
        }

        Arc {
            start_angle: Angle::radians(start),
            end_angle: Angle::radians(end),
            clockwise,
            ..*self
        }
    }

    /// Sample the ellipse at the given angle (y-up convention).
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        point(
            self.center.x + self.radii.x * angle.cos(),
            self.center.y + self.radii.y * angle.sin(),
        )
    }

    /// Derivative of the ellipse parametrization at the given angle.
    #[inline]
    pub fn tangent_at_angle(&self, angle: f64) -> Vector {
        vector(-self.radii.x * angle.sin(), self.radii.y * angle.cos())
    }

    /// The start point of the arc.
    #[inline]
    pub fn from(&self) -> Point {
        self.point_at_angle(self.start_angle.radians)
    }

    /// The end point of the arc.
    #[inline]
    pub fn to(&self) -> Point {
        self.point_at_angle(self.end_angle.radians)
    }

    /// Whether the arc covers the whole ellipse.
    ///
    /// Only meaningful on a [normalized](#method.normalized) arc, which
    /// snaps a full span to exactly `2π`.
    #[inline]
    pub fn is_full_turn(&self) -> bool {
        (self.end_angle.radians - self.start_angle.radians).abs() == PI2
    }

    /// Number of cubic bezier segments needed to approximate the arc with
    /// a deviation of at most `threshold`, assuming normalized angles.
    ///
    /// Starts at one segment and doubles until every sub-arc spans no more
    /// than a quarter turn and passes the error estimate, capped at 1024
    /// segments.
    pub fn segment_count(&self, threshold: f64) -> u32 {
        let ccw = !self.clockwise;
        let start = self.start_angle.radians;
        let diff = (self.end_angle.radians - start).abs();

        let mut n = 1;
        while n < MAX_SEGMENTS {
            let delta = diff / n as f64;
            if delta <= FRAC_PI_2 + EPSILON {
                let mut found = true;
                let mut eta_b = start;
                for _ in 0..n {
                    let eta_a = eta_b;
                    eta_b = next_angle(ccw, delta, eta_a);
                    if estimate_error(self.radii.x, self.radii.y, eta_a, eta_b) > threshold {
                        found = false;
                        break;
                    }
                }
                if found {
                    return n;
                }
            }
            n <<= 1;
        }

        n
    }

    /// Approximate the arc with a sequence of cubic bezier segments, each
    /// deviating from the true ellipse by at most `threshold`.
    ///
    /// The arc is expected to be [normalized](#method.normalized) first.
    /// The last segment ends exactly at [to](#method.to), or back at
    /// [from](#method.from) when the arc is a full turn, so that closed
    /// shapes do not accumulate rounding error.
    pub fn for_each_cubic_bezier<F>(&self, threshold: f64, callback: &mut F)
    where
        F: FnMut(&CubicBezierSegment),
    {
        let ccw = !self.clockwise;
        let start = self.start_angle.radians;
        let end = self.end_angle.radians;
        let full_turn = self.is_full_turn();

        let n = self.segment_count(threshold);
        let delta = (end - start).abs() / n as f64;

        let t = (0.5 * delta).tan();
        let alpha = delta.sin() * ((4.0 + 3.0 * t * t).sqrt() - 1.0) / 3.0;
        let alpha = if ccw { alpha } else { -alpha };

        let start_point = self.point_at_angle(start);
        let mut eta_b = start;
        let mut p_b = start_point;
        let mut tangent_b = self.tangent_at_angle(start);

        for i in 0..n {
            let p_a = p_b;
            let tangent_a = tangent_b;

            // The last sub-arc ends at end_angle rather than at the
            // accumulated angle, so rounding error never changes the end
            // point. A full turn lands back on the exact start point.
            if i == n - 1 {
                eta_b = end;
                p_b = if full_turn {
                    start_point
                } else {
                    self.point_at_angle(end)
                };
            } else {
                eta_b = next_angle(ccw, delta, eta_b);
                p_b = self.point_at_angle(eta_b);
            }
            tangent_b = self.tangent_at_angle(eta_b);

            callback(&CubicBezierSegment {
                from: p_a,
                ctrl1: p_a + tangent_a * alpha,
                ctrl2: p_b - tangent_b * alpha,
                to: p_b,
            });
        }
    }

    /// Apply a 2d transform to the arc.
    ///
    /// The arc is seen as the image of the unit circle under the
    /// transform `T0` scaling by the radii and translating to the center.
    /// Composing `T0` with `transform` yields the new center and radii.
    /// The angles are left untouched.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        let t0 = Transform2D::new(
            self.radii.x,
            0.0,
            0.0,
            self.radii.y,
            self.center.x,
            self.center.y,
        );
        let m = t0.then(transform);

        Arc {
            center: point(m.m31, m.m32),
            radii: vector(
                (m.m11 * m.m11 + m.m12 * m.m12).sqrt(),
                (m.m21 * m.m21 + m.m22 * m.m22).sqrt(),
            ),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Transform2D;

    fn arc(start: f64, end: f64, clockwise: bool) -> Arc {
        Arc {
            center: point(10.0, 20.0),
            radii: vector(5.0, 3.0),
            start_angle: Angle::radians(start),
            end_angle: Angle::radians(end),
            clockwise,
        }
    }

    #[test]
    fn normalization_flips_y_axis() {
        // A quarter turn in the y-down space, from the positive x axis.
        let a = arc(0.0, FRAC_PI_2, true).normalized();

        assert!(!a.clockwise);
        assert!((a.start_angle.radians - 0.0).abs() < 1e-12);
        assert!((a.end_angle.radians - 1.5 * std::f64::consts::PI).abs() < 1e-12);

        // The end point sits above the center in the y-down space.
        let to = a.to();
        assert!((to.x - 10.0).abs() < 1e-12);
        assert!((to.y - 17.0).abs() < 1e-12);
    }

    #[test]
    fn normalization_snaps_full_turns() {
        let a = arc(0.3, 0.3 + PI2, false).normalized();
        // Flipped to clockwise, so the full turn goes from 2π down to 0.
        assert!(a.is_full_turn());
        assert!(a.clockwise);
        assert_eq!(a.start_angle.radians, PI2);
        assert_eq!(a.end_angle.radians, 0.0);

        let b = arc(0.3, 0.3 + 3.0 * PI2, false).normalized();
        assert!(b.is_full_turn());
    }

    #[test]
    fn angle_order_agrees_with_winding() {
        let a = arc(1.0, 2.0, false).normalized();
        // Flipped to clockwise, so start must be above end.
        assert!(a.clockwise);
        assert!(a.start_angle.radians > a.end_angle.radians);

        let b = arc(2.0, 1.0, true).normalized();
        assert!(!b.clockwise);
        assert!(b.start_angle.radians < b.end_angle.radians);
    }

    #[test]
    fn approximation_stays_within_threshold() {
        // On a circle the deviation is simply the difference between the
        // distance to the center and the radius.
        let threshold = 0.01;
        let a = Arc {
            center: point(10.0, 20.0),
            radii: vector(40.0, 40.0),
            start_angle: Angle::radians(0.0),
            end_angle: Angle::radians(PI2),
            clockwise: false,
        }
        .normalized();

        let mut max_deviation: f64 = 0.0;
        a.for_each_cubic_bezier(threshold, &mut |curve| {
            for i in 0..=100 {
                let p = curve.sample(i as f64 / 100.0);
                let deviation = ((p - a.center).length() - 40.0).abs();
                max_deviation = max_deviation.max(deviation);
            }
        });

        assert!(max_deviation <= threshold + 1e-9);
    }

    // Distance from `p` to the ellipse, measured against a dense angle
    // sampling around the radial projection of `p`. Every sampled point
    // sits on the ellipse, so the result upper-bounds the true distance.
    fn deviation_from_ellipse(a: &Arc, p: Point) -> f64 {
        let guess = ((p.y - a.center.y) / a.radii.y).atan2((p.x - a.center.x) / a.radii.x);
        let mut min = std::f64::MAX;
        for i in -1000..=1000 {
            let phi = guess + i as f64 * 2e-4;
            min = min.min((p - a.point_at_angle(phi)).length());
        }
        min
    }

    #[test]
    fn error_bound_holds_on_eccentric_ellipses() {
        // Aspect ratios on both sides of the coefficient table split at
        // rb/ra = 0.25.
        for &(ra, rb) in &[(10.0, 1.0), (10.0, 4.0)] {
            let threshold = 0.05;
            let a = Arc {
                center: point(3.0, -2.0),
                radii: vector(ra, rb),
                start_angle: Angle::radians(0.0),
                end_angle: Angle::radians(PI2),
                clockwise: false,
            }
            .normalized();

            let mut max_deviation: f64 = 0.0;
            a.for_each_cubic_bezier(threshold, &mut |curve| {
                for i in 0..=100 {
                    let p = curve.sample(i as f64 / 100.0);
                    max_deviation = max_deviation.max(deviation_from_ellipse(&a, p));
                }
            });

            // The angle sampling overestimates the distance by at most
            // the spacing between consecutive sampled points.
            assert!(
                max_deviation <= threshold + 2e-3,
                "radii {}x{}: deviation {}",
                ra,
                rb,
                max_deviation
            );
        }
    }

    #[test]
    fn full_turn_ends_on_exact_start_point() {
        let a = arc(0.0, PI2, false).normalized();

        let mut first = None;
        let mut last = None;
        a.for_each_cubic_bezier(0.5, &mut |curve| {
            if first.is_none() {
                first = Some(curve.from);
            }
            last = Some(curve.to);
        });

        assert_eq!(first.unwrap(), last.unwrap());
    }

    #[test]
    fn segment_count_is_capped() {
        // A degenerate flat ellipse never passes the error estimate.
        let a = Arc {
            center: point(0.0, 0.0),
            radii: vector(1000.0, 0.0),
            start_angle: Angle::radians(0.0),
            end_angle: Angle::radians(PI2),
            clockwise: false,
        };

        assert_eq!(a.segment_count(1e-9), MAX_SEGMENTS);
    }

    #[test]
    fn transformed_arc() {
        let a = arc(0.0, FRAC_PI_2, true);
        let b = a.transformed(&Transform2D::new(2.0, 0.0, 0.0, 3.0, 1.0, -1.0));

        assert_eq!(b.center, point(21.0, 59.0));
        assert_eq!(b.radii, vector(10.0, 9.0));
        assert_eq!(b.start_angle, a.start_angle);
        assert_eq!(b.clockwise, a.clockwise);
    }
}
