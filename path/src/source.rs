use crate::math::{point, Point};

/// The role of a vertex in a path.
///
/// A `Curve` end point is followed by one control vertex, a `Curve2` end
/// point by two. `Close` carries no meaningful coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Command {
    Move,
    Line,
    Curve,
    Curve2,
    Close,
}

/// A command/coordinate record in a vertex stream.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub command: Command,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub fn move_to(x: f64, y: f64) -> Self {
        Vertex {
            command: Command::Move,
            x,
            y,
        }
    }

    #[inline]
    pub fn line_to(x: f64, y: f64) -> Self {
        Vertex {
            command: Command::Line,
            x,
            y,
        }
    }

    /// A quadratic curve record: either the end point or its control
    /// vertex, depending on position in the stream.
    #[inline]
    pub fn curve(x: f64, y: f64) -> Self {
        Vertex {
            command: Command::Curve,
            x,
            y,
        }
    }

    /// A cubic curve record: either the end point or one of its two
    /// control vertices, depending on position in the stream.
    #[inline]
    pub fn curve2(x: f64, y: f64) -> Self {
        Vertex {
            command: Command::Curve2,
            x,
            y,
        }
    }

    #[inline]
    pub fn close() -> Self {
        Vertex {
            command: Command::Close,
            x: 0.0,
            y: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        point(self.x, self.y)
    }
}

/// A sink that vertex generators write records into.
pub trait VertexTarget {
    fn add_vertex(&mut self, vertex: Vertex);
}

/// A rewindable stream of vertex records.
pub trait VertexSource {
    /// Move the read cursor to the given vertex index. Returns `false`
    /// when the stream is empty or the index is out of bounds, leaving
    /// the cursor untouched.
    fn rewind(&mut self, index: usize) -> bool;

    /// Read the vertex at the cursor and advance, `None` at the end of
    /// the stream.
    fn read_vertex(&mut self) -> Option<Vertex>;
}

/// A growable vertex stream backed by a `Vec`, usable both as a
/// generator target and as a source.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    cursor: usize,
}

impl VertexBuffer {
    pub fn new() -> Self {
        VertexBuffer {
            vertices: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        VertexBuffer {
            vertices: Vec::with_capacity(cap),
            cursor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.cursor = 0;
    }

    /// Change the number of vertices in the buffer. Shrinking drops the
    /// records past the new length and pulls the cursor back if it now
    /// points past the end; growing reserves space without adding
    /// records.
    pub fn resize(&mut self, len: usize) {
        if len < self.vertices.len() {
            self.vertices.truncate(len);
            if self.cursor > len {
                self.cursor = len;
            }
        } else {
            self.vertices.reserve(len - self.vertices.len());
        }
    }

    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.add_vertex(Vertex::move_to(x, y));
    }

    #[inline]
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.add_vertex(Vertex::line_to(x, y));
    }

    #[inline]
    pub fn close(&mut self) {
        self.add_vertex(Vertex::close());
    }
}

impl VertexTarget for VertexBuffer {
    #[inline]
    fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }
}

impl VertexSource for VertexBuffer {
    fn rewind(&mut self, index: usize) -> bool {
        if self.vertices.is_empty() || index > self.vertices.len() {
            return false;
        }

        self.cursor = index;
        true
    }

    fn read_vertex(&mut self) -> Option<Vertex> {
        let vertex = self.vertices.get(self.cursor).cloned();
        if vertex.is_some() {
            self.cursor += 1;
        }

        vertex
    }
}
