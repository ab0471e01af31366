#![deny(bare_trait_objects)]

//! Algorithms operating on vertex streams: hit testing against outlines
//! and interiors, and bounding rectangle computation.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate hitpath_path as path;

pub use crate::path::geom;
pub use crate::path::math;

pub mod aabb;

pub use crate::aabb::{bounding_rect, fast_bounding_rect};
pub use crate::hit_test::{hit_test, Hit, OutlineHit};
