#![deny(bare_trait_objects)]

//! Vertex streams of command/coordinate records, and generators producing
//! ellipse, pie, chord, polygon and star outlines into them.
//!
//! A path is a flat sequence of [Vertex](struct.Vertex.html) records. A
//! curve uses several consecutive records: the on-curve end point comes
//! first, followed by one control record for a quadratic curve or two for
//! a cubic one. The [Events](events/struct.Events.html) iterator resolves
//! this pairing into whole segments.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate hitpath_geom as geom;

pub mod events;
pub mod shapes;
mod source;

pub use crate::events::{Events, PathEvent};
pub use crate::source::*;

/// The math module of the geom crate, re-exported for convenience.
pub use crate::geom::math;
