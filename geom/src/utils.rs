//! Various math tools that are usually not needed by users of this crate.

use std::f64::consts::PI;

/// Two times pi, the angle span of a full turn.
pub const PI2: f64 = 2.0 * PI;

/// Sign-preserving floating point modulo: `modulo(-x, y) == -modulo(x, y)`.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    if x < 0.0 {
        -modulo(-x, y)
    } else {
        x - (x / y).floor() * y
    }
}

#[inline]
pub fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn test_modulo() {
    assert!((modulo(3.0 * PI, PI2) - PI).abs() < 1e-12);
    assert!((modulo(-3.0 * PI, PI2) + PI).abs() < 1e-12);
    assert_eq!(modulo(0.0, PI2), 0.0);
}
