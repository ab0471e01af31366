//! Generators producing ellipse, pie, chord, polygon and star outlines
//! into a vertex target.
//!
//! Angles are expressed in the y-down coordinate space and swept
//! clockwise from `start_angle` to `end_angle`. A span that amounts to a
//! full turn produces a closed shape whose last point is exactly the
//! first one.

use crate::geom::math::{point, Angle, Point, Transform2D, Vector};
use crate::geom::utils::PI2;
use crate::geom::{Arc, LineSegment, DEFAULT_FLATNESS, EPSILON};
use crate::{Vertex, VertexTarget};

/// How the two end points of a partial ellipse are connected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum EllipseStyle {
    /// Two straight edges through the center, closed.
    Pie,
    /// A straight edge between the end points, closed.
    Chord,
    /// The bare arc, left open.
    Arc,
}

/// Generate an elliptic arc outline into `target`.
///
/// `Pie` and `Chord` outlines start with a `Move` record and end with a
/// `Close`, a bare `Arc` starts with a `Line` record carrying the arc's
/// start point so it can extend an outline already in progress.
///
/// A non-positive or absent `threshold` falls back to
/// [DEFAULT_FLATNESS](../geom/constant.DEFAULT_FLATNESS.html).
/// Returns `false` without writing anything when a radius is not
/// positive.
pub fn build_ellipse<T: VertexTarget>(
    target: &mut T,
    center: Point,
    radii: Vector,
    start_angle: f64,
    end_angle: f64,
    style: EllipseStyle,
    threshold: Option<f64>,
) -> bool {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }

    let arc = Arc {
        center,
        radii,
        start_angle: Angle::radians(start_angle),
        end_angle: Angle::radians(end_angle),
        clockwise: true,
    }
    .normalized();

    let threshold = match threshold {
        Some(t) if t > 0.0 => t,
        _ => DEFAULT_FLATNESS,
    };

    let start = arc.from();
    match style {
        EllipseStyle::Pie => {
            target.add_vertex(Vertex::move_to(center.x, center.y));
            target.add_vertex(Vertex::line_to(start.x, start.y));
        }
        EllipseStyle::Chord => {
            target.add_vertex(Vertex::move_to(start.x, start.y));
        }
        EllipseStyle::Arc => {
            target.add_vertex(Vertex::line_to(start.x, start.y));
        }
    }

    arc.for_each_cubic_bezier(threshold, &mut |curve| {
        target.add_vertex(Vertex::curve2(curve.to.x, curve.to.y));
        target.add_vertex(Vertex::curve2(curve.ctrl1.x, curve.ctrl1.y));
        target.add_vertex(Vertex::curve2(curve.ctrl2.x, curve.ctrl2.y));
    });

    match style {
        EllipseStyle::Pie | EllipseStyle::Chord => target.add_vertex(Vertex::close()),
        EllipseStyle::Arc => {}
    }

    true
}

/// Same as [build_ellipse](fn.build_ellipse.html), with the ellipse
/// mapped through `transform` first. The transformed ellipse keeps its
/// angle parameters.
pub fn build_ellipse_with_transform<T: VertexTarget>(
    target: &mut T,
    center: Point,
    radii: Vector,
    start_angle: f64,
    end_angle: f64,
    style: EllipseStyle,
    transform: &Transform2D,
    threshold: Option<f64>,
) -> bool {
    let arc = Arc {
        center,
        radii,
        start_angle: Angle::radians(start_angle),
        end_angle: Angle::radians(end_angle),
        clockwise: true,
    }
    .transformed(transform);

    build_ellipse(
        target,
        arc.center,
        arc.radii,
        start_angle,
        end_angle,
        style,
        threshold,
    )
}

// Angles of the two generated vertices surrounding `angle`, stepping in
// the winding direction, along with the step index of the first one.
fn neighbour_angles(ccw: bool, angle: f64, delta: f64) -> (f64, f64, u32) {
    let n = (angle / delta).floor() as u32;
    if ccw {
        let prev = delta * n as f64;
        (prev, prev + delta, n)
    } else {
        let prev = delta * (n + 1) as f64;
        (prev, prev - delta, n + 1)
    }
}

/// Generate a star outline into `target`, or a regular polygon when the
/// inner and outer radii are equal.
///
/// `vertex_count` is the number of outer vertices; the generated
/// vertices alternate between the outer and inner ellipses. A partial
/// span cuts the outline edges along the radius vectors at `start_angle`
/// and `end_angle`, and starts with a `Line` record like a bare arc
/// does.
///
/// Returns `false` without writing anything when `vertex_count` is two
/// or less, or when an edge cut cannot be resolved.
pub fn build_star<T: VertexTarget>(
    target: &mut T,
    center: Point,
    inner_radii: Vector,
    outer_radii: Vector,
    start_angle: f64,
    end_angle: f64,
    vertex_count: u32,
    roundness: f64,
) -> bool {
    if vertex_count <= 2 {
        return false;
    }

    // TODO: support edge roundness.
    let _ = roundness;

    let steps = if inner_radii == outer_radii {
        // A polygon only has the outer vertices.
        vertex_count
    } else {
        vertex_count * 2
    };

    let arc = Arc {
        center,
        radii: outer_radii,
        start_angle: Angle::radians(start_angle),
        end_angle: Angle::radians(end_angle),
        clockwise: true,
    }
    .normalized();
    let start = arc.start_angle.radians;
    let end = arc.end_angle.radians;
    let ccw = !arc.clockwise;
    let full_shape = arc.is_full_turn();

    let point_at = |angle: f64, i: u32| -> Point {
        let radii = if i % 2 == 0 { outer_radii } else { inner_radii };
        point(
            center.x + radii.x * angle.cos(),
            center.y + radii.y * angle.sin(),
        )
    };

    let delta = PI2 / steps as f64;
    let step = |prev: f64| if ccw { prev + delta } else { prev - delta };

    let mut i: u32;
    let mut prev_pt;
    let mut next_angle;
    let mut next_pt;
    let start_pt;

    if full_shape {
        i = 0;
        prev_pt = point_at(start, i);
        next_angle = step(start);
        i += 1;
        next_pt = point_at(next_angle, i);
        start_pt = prev_pt;
        target.add_vertex(Vertex::move_to(start_pt.x, start_pt.y));
    } else {
        let (prev_angle, next, order) = neighbour_angles(ccw, start, delta);
        next_angle = next;
        i = order;
        prev_pt = point_at(prev_angle, i);
        i += 1;
        next_pt = point_at(next_angle, i);

        if prev_angle == start {
            start_pt = prev_pt;
        } else {
            // Cut the edge along the radius vector at the start angle.
            let edge = LineSegment {
                from: prev_pt,
                to: next_pt,
            };
            let ray = LineSegment {
                from: center,
                to: point_at(start, 0),
            };
            start_pt = match edge.intersection(&ray) {
                Some(p) => p,
                None => return false,
            };
        }
        target.add_vertex(Vertex::line_to(start_pt.x, start_pt.y));
    }

    let reached_end =
        |next_angle: f64| (next_angle + EPSILON > end) && ccw || (next_angle - EPSILON < end) && !ccw;

    let mut finished = reached_end(next_angle);
    while !finished {
        target.add_vertex(Vertex::line_to(next_pt.x, next_pt.y));
        prev_pt = next_pt;
        next_angle = step(next_angle);
        i += 1;
        next_pt = point_at(next_angle, i);
        finished = reached_end(next_angle);
    }

    // Compute the last vertex from the end angle rather than from the
    // accumulated angle, so rounding error never changes the end point.
    if (next_angle - end).abs() < EPSILON {
        let last = if full_shape { start_pt } else { next_pt };
        target.add_vertex(Vertex::line_to(last.x, last.y));
    } else {
        // Cut the edge along the radius vector at the end angle.
        let edge = LineSegment {
            from: prev_pt,
            to: next_pt,
        };
        let ray = LineSegment {
            from: center,
            to: point_at(end, 0),
        };
        let end_pt = match edge.intersection(&ray) {
            Some(p) => p,
            None => return false,
        };
        target.add_vertex(Vertex::line_to(end_pt.x, end_pt.y));
    }

    true
}
