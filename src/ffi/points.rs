//! Point-struct FFI functions.
//!
//! `FourPoints` and `NPoints` demonstrate the two ways aggregates cross the
//! boundary: a fixed-size struct passed entirely by value, and a struct
//! carrying a count plus a raw pointer into a caller-owned array.

// FFI functions intentionally take raw pointers and are called from foreign
// code. The caller is responsible for ensuring pointer validity.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::os::raw::c_int;
use std::slice;

use crate::geometry::{self, Point};

/// Exactly four points, passed by value.
/// Layout matches `struct FourPoints { Point points[4]; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FourPoints {
    pub points: [Point; 4],
}

/// A count plus a pointer into a caller-owned contiguous `Point` array.
/// Layout matches `struct NPoints { int n; Point* points; }`.
/// The array is borrowed for the duration of the call; the library never
/// takes ownership.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NPoints {
    pub n: c_int,
    pub points: *mut Point,
}

/// Total distance connecting four points, summed in reverse-adjacency order:
/// `d(p0,p3) + d(p1,p0) + d(p2,p1) + d(p3,p2)`.
#[no_mangle]
pub extern "C" fn distance_4_points(p: FourPoints) -> f64 {
    geometry::path_length(&p.points)
}

/// Total distance connecting `p.n` points, same summation order as
/// `distance_4_points`. Returns 0.0 when `p.n < 2` or the pointer is null.
/// The caller guarantees the array holds at least `p.n` valid points.
#[no_mangle]
pub extern "C" fn distance_n_points(p: NPoints) -> f64 {
    if p.n < 2 || p.points.is_null() {
        return 0.0;
    }
    let points = unsafe { slice::from_raw_parts(p.points, p.n as usize) };
    geometry::path_length(points)
}
