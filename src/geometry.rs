//! Point geometry shared by the Rust API and the FFI structs.

/// A 2-D point with the exact field order and layout the C header declares:
/// `struct Point { double x; double y; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Euclidean distance between two points.
/// Internal helper only; never exported across the C boundary.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Path sum over `points` in reverse-adjacency order:
/// `d(p[0], p[n-1]) + sum of d(p[i], p[i-1]) for i in 1..n`.
///
/// The original library sums the wrap-around edge first and then walks each
/// point against its predecessor. Numerically this equals the closed-loop
/// perimeter, but the summation order is preserved as observed so that
/// floating-point results match the reference bit for bit.
pub fn path_length(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut d = distance(points[0], points[points.len() - 1]);
    for i in 1..points.len() {
        d += distance(points[i], points[i - 1]);
    }
    d
}
