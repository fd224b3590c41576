//! Array FFI functions: caller-owned buffers passed as pointer + length.
//!
//! The caller retains ownership of every buffer and guarantees that each
//! pointer is valid, aligned, and at least `n` elements long for the duration
//! of the call. The library never allocates or frees through these arguments.

// FFI functions intentionally take raw pointers and are called from foreign
// code. The caller is responsible for ensuring pointer validity.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::os::raw::c_int;
use std::slice;

use crate::math;

/// Multiply each element of `xin` by `a`, writing results into `xout`.
/// Both arrays must hold at least `n` elements and must not overlap.
/// No writes occur when `n <= 0`.
#[no_mangle]
pub extern "C" fn scalar_multiply(a: f64, xin: *const f64, n: c_int, xout: *mut f64) {
    if n <= 0 || xin.is_null() || xout.is_null() {
        return;
    }
    let xin = unsafe { slice::from_raw_parts(xin, n as usize) };
    let xout = unsafe { slice::from_raw_parts_mut(xout, n as usize) };
    math::scalar_multiply(a, xin, xout);
}

/// Element-wise sum `out[i] = a[i] + b[i]` for `i` in `[0, n)`.
#[no_mangle]
pub extern "C" fn add_1d_arrays(out: *mut f64, a: *const f64, b: *const f64, n: c_int) {
    if n <= 0 || out.is_null() || a.is_null() || b.is_null() {
        return;
    }
    let len = n as usize;
    let out = unsafe { slice::from_raw_parts_mut(out, len) };
    let a = unsafe { slice::from_raw_parts(a, len) };
    let b = unsafe { slice::from_raw_parts(b, len) };
    math::add_arrays(out, a, b);
}

/// Sample standard deviation of the first `n` elements of `data`.
/// Returns 0.0 for fewer than two samples or a null pointer.
#[no_mangle]
pub extern "C" fn standard_deviation(data: *const f64, n: c_int) -> f64 {
    if n <= 0 || data.is_null() {
        return 0.0;
    }
    let data = unsafe { slice::from_raw_parts(data, n as usize) };
    math::standard_deviation(data)
}

/// Row-major matrix product: `out = a (r1 x c1) * b (r2 x c2)`.
/// `out` must hold `r1 * c2` elements and `c1` must equal `r2`;
/// on any shape mismatch nothing is written.
#[no_mangle]
pub extern "C" fn matrix_multiply(
    out: *mut f64,
    a: *const f64,
    r1: c_int,
    c1: c_int,
    b: *const f64,
    r2: c_int,
    c2: c_int,
) {
    if out.is_null() || a.is_null() || b.is_null() {
        return;
    }
    if r1 <= 0 || c1 <= 0 || r2 <= 0 || c2 <= 0 {
        return;
    }
    let (r1, c1, r2, c2) = (r1 as usize, c1 as usize, r2 as usize, c2 as usize);
    let a = unsafe { slice::from_raw_parts(a, r1 * c1) };
    let b = unsafe { slice::from_raw_parts(b, r2 * c2) };
    if let Some(product) = math::matrix_multiply(a, r1, c1, b, r2, c2) {
        let out = unsafe { slice::from_raw_parts_mut(out, r1 * c2) };
        out.copy_from_slice(&product);
    }
}
