//! An iterator resolving a flat vertex stream into whole path events.

use crate::math::Point;
use crate::{Command, Vertex, VertexSource};

/// A whole path segment, with the curve pairing between end points and
/// control vertices already resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

/// Iterates over the events of a vertex source.
///
/// Every subpath is delimited by a `Begin` and an `End` event, including
/// subpaths the stream leaves open. A `Line` record with no open subpath
/// starts one at the record's position, the way generated arc outlines
/// begin.
///
/// Panics if a curve end point is not followed by its control vertex
/// records, or if a curve record shows up with no open subpath.
pub struct Events<'l, S> {
    source: &'l mut S,
    current: Point,
    first: Point,
    in_subpath: bool,
    pending: Option<Vertex>,
    done: bool,
}

impl<'l, S: VertexSource> Events<'l, S> {
    pub fn new(source: &'l mut S) -> Self {
        source.rewind(0);
        Events {
            source,
            current: Point::zero(),
            first: Point::zero(),
            in_subpath: false,
            pending: None,
            done: false,
        }
    }

    fn begin(&mut self, at: Point) -> PathEvent {
        self.first = at;
        self.current = at;
        self.in_subpath = true;

        PathEvent::Begin { at }
    }

    fn read_control(&mut self, command: Command) -> Point {
        match self.source.read_vertex() {
            Some(v) if v.command == command => v.position(),
            _ => panic!("curve end point without its control vertex records"),
        }
    }
}

impl<'l, S: VertexSource> Iterator for Events<'l, S> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        if self.done {
            return None;
        }

        if let Some(v) = self.pending.take() {
            return Some(self.begin(v.position()));
        }

        loop {
            let vertex = match self.source.read_vertex() {
                Some(v) => v,
                None => {
                    self.done = true;
                    if self.in_subpath {
                        self.in_subpath = false;
                        return Some(PathEvent::End {
                            last: self.current,
                            first: self.first,
                            close: false,
                        });
                    }
                    return None;
                }
            };

            match vertex.command {
                Command::Move => {
                    if self.in_subpath {
                        self.in_subpath = false;
                        self.pending = Some(vertex);
                        return Some(PathEvent::End {
                            last: self.current,
                            first: self.first,
                            close: false,
                        });
                    }
                    return Some(self.begin(vertex.position()));
                }
                Command::Line => {
                    if !self.in_subpath {
                        return Some(self.begin(vertex.position()));
                    }
                    let from = self.current;
                    self.current = vertex.position();
                    return Some(PathEvent::Line {
                        from,
                        to: self.current,
                    });
                }
                Command::Curve => {
                    assert!(self.in_subpath, "curve record with no open subpath");
                    let ctrl = self.read_control(Command::Curve);
                    let from = self.current;
                    self.current = vertex.position();
                    return Some(PathEvent::Quadratic {
                        from,
                        ctrl,
                        to: self.current,
                    });
                }
                Command::Curve2 => {
                    assert!(self.in_subpath, "curve record with no open subpath");
                    let ctrl1 = self.read_control(Command::Curve2);
                    let ctrl2 = self.read_control(Command::Curve2);
                    let from = self.current;
                    self.current = vertex.position();
                    return Some(PathEvent::Cubic {
                        from,
                        ctrl1,
                        ctrl2,
                        to: self.current,
                    });
                }
                Command::Close => {
                    if !self.in_subpath {
                        continue;
                    }
                    self.in_subpath = false;
                    let last = self.current;
                    self.current = self.first;
                    return Some(PathEvent::End {
                        last,
                        first: self.first,
                        close: true,
                    });
                }
            }
        }
    }
}
