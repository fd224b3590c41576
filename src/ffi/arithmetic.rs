//! Scalar FFI functions.
//!
//! Fixed-size arguments passed by value; nothing here touches memory owned by
//! the caller.

use std::os::raw::c_int;

use crate::math;

/// `a + b` with native C `int` wraparound on overflow.
#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    math::add(a, b)
}

/// `a - b` in single precision.
#[no_mangle]
pub extern "C" fn subtract(a: f32, b: f32) -> f32 {
    math::subtract(a, b)
}

/// `a + b` if `do_addition` is true, else `a - b`.
#[no_mangle]
pub extern "C" fn add_or_subtract(a: f64, b: f64, do_addition: bool) -> f64 {
    math::add_or_subtract(a, b, do_addition)
}

/// Cumulative product `1 * 2 * ... * n` as a double.
#[no_mangle]
pub extern "C" fn factorial(n: u8) -> f64 {
    math::factorial(n)
}
