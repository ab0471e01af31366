#![deny(bare_trait_objects)]

//! Geometric primitives for the hitpath crates: line segments, quadratic
//! and cubic bezier segments, and elliptic arc approximation with a
//! bounded deviation from the true ellipse.
//!
//! All scalars are `f64` and all 2d types come from [euclid](https://docs.rs/euclid/)
//! through the [math](math/index.html) module.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate euclid;

mod arc;
mod cubic_bezier;
mod line;
mod quadratic_bezier;
pub mod utils;

pub use crate::arc::*;
pub use crate::cubic_bezier::*;
pub use crate::line::*;
pub use crate::quadratic_bezier::*;

/// Accuracy used when comparing angles, distances at zero tolerance, and
/// when deciding whether an angle span amounts to a full turn.
pub const EPSILON: f64 = 1e-6;

/// Default maximum deviation between a generated bezier approximation and
/// the true curve, in the unit of the coordinate space.
pub const DEFAULT_FLATNESS: f64 = 0.5;

pub mod math {
    //! f64 alias definitions for the common euclid types.

    pub type Point = euclid::default::Point2D<f64>;
    pub type Vector = euclid::default::Vector2D<f64>;
    pub type Size = euclid::default::Size2D<f64>;
    pub type Rect = euclid::default::Rect<f64>;
    pub type Transform2D = euclid::default::Transform2D<f64>;
    pub type Angle = euclid::Angle<f64>;

    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }

    #[inline]
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(point(x, y), size(w, h))
    }
}
