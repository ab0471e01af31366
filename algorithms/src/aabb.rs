//! Bounding rectangle computation for vertex streams.

use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::{point, Point, Rect};
use crate::path::{Events, PathEvent, VertexSource};

/// Compute a conservative axis-aligned rectangle containing the stream,
/// based on the positions of all records including curve control
/// vertices.
///
/// The result contains the path but may be larger than its tight bounds
/// where a curve does not reach its control vertices. `None` for an
/// empty stream.
pub fn fast_bounding_rect<S: VertexSource>(source: &mut S) -> Option<Rect> {
    let mut min = point(std::f64::MAX, std::f64::MAX);
    let mut max = point(std::f64::MIN, std::f64::MIN);
    let mut empty = true;

    let mut add = |p: Point| {
        min = min.min(p);
        max = max.max(p);
    };

    for event in Events::new(source) {
        empty = false;
        match event {
            PathEvent::Begin { at } => add(at),
            PathEvent::Line { to, .. } => add(to),
            PathEvent::Quadratic { ctrl, to, .. } => {
                add(ctrl);
                add(to);
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                add(ctrl1);
                add(ctrl2);
                add(to);
            }
            PathEvent::End { .. } => {}
        }
    }

    if empty {
        return None;
    }

    Some(Rect::new(min, (max - min).to_size()))
}

/// Compute the tight axis-aligned bounding rectangle of the stream,
/// taking the actual extent of the curves into account. `None` for an
/// empty stream.
pub fn bounding_rect<S: VertexSource>(source: &mut S) -> Option<Rect> {
    let mut min = point(std::f64::MAX, std::f64::MAX);
    let mut max = point(std::f64::MIN, std::f64::MIN);
    let mut empty = true;

    let mut add = |p: Point| {
        min = min.min(p);
        max = max.max(p);
    };

    for event in Events::new(source) {
        empty = false;
        match event {
            PathEvent::Begin { at } => add(at),
            PathEvent::Line { to, .. } => add(to),
            PathEvent::Quadratic { from, ctrl, to } => {
                let curve = QuadraticBezierSegment { from, ctrl, to };
                if let Some(t) = curve.local_x_extremum_t() {
                    add(curve.sample(t));
                }
                if let Some(t) = curve.local_y_extremum_t() {
                    add(curve.sample(t));
                }
                add(to);
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let curve = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                for t in curve.local_x_extrema() {
                    add(curve.sample(t));
                }
                for t in curve.local_y_extrema() {
                    add(curve.sample(t));
                }
                add(to);
            }
            PathEvent::End { .. } => {}
        }
    }

    if empty {
        return None;
    }

    Some(Rect::new(min, (max - min).to_size()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rect;
    use crate::path::{Vertex, VertexBuffer, VertexTarget};

    #[test]
    fn empty_stream() {
        let mut buffer = VertexBuffer::new();
        assert_eq!(fast_bounding_rect(&mut buffer), None);
        assert_eq!(bounding_rect(&mut buffer), None);
    }

    #[test]
    fn line_path() {
        let mut buffer = VertexBuffer::new();
        buffer.move_to(1.0, 1.0);
        buffer.line_to(3.0, -2.0);
        buffer.line_to(-1.0, 4.0);
        buffer.close();

        let expected = Some(rect(-1.0, -2.0, 4.0, 6.0));
        assert_eq!(fast_bounding_rect(&mut buffer), expected);
        assert_eq!(bounding_rect(&mut buffer), expected);
    }

    #[test]
    fn quadratic_control_vertex_overestimates() {
        let mut buffer = VertexBuffer::new();
        buffer.move_to(0.0, 0.0);
        buffer.add_vertex(Vertex::curve(10.0, 0.0));
        buffer.add_vertex(Vertex::curve(5.0, 5.0));

        assert_eq!(fast_bounding_rect(&mut buffer), Some(rect(0.0, 0.0, 10.0, 5.0)));
        // The curve only reaches half way to its control vertex.
        assert_eq!(bounding_rect(&mut buffer), Some(rect(0.0, 0.0, 10.0, 2.5)));
    }

    #[test]
    fn cubic_tight_bounds() {
        let mut buffer = VertexBuffer::new();
        buffer.move_to(0.0, 0.0);
        buffer.add_vertex(Vertex::curve2(10.0, 0.0));
        buffer.add_vertex(Vertex::curve2(0.0, 5.0));
        buffer.add_vertex(Vertex::curve2(10.0, 5.0));

        assert_eq!(fast_bounding_rect(&mut buffer), Some(rect(0.0, 0.0, 10.0, 5.0)));
        assert_eq!(bounding_rect(&mut buffer), Some(rect(0.0, 0.0, 10.0, 3.75)));
    }
}
