//! Pure scalar and array math.
//!
//! This module provides the ergonomic Rust functions that the FFI layer wraps.
//! Everything here is safe code over owned values and slices; the raw-pointer
//! handling lives entirely in `ffi`.

use nalgebra::DMatrix;

/// Wrapping integer sum, matching native C `int` overflow semantics.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Single-precision difference.
pub fn subtract(a: f32, b: f32) -> f32 {
    a - b
}

/// Sum if `do_addition`, difference otherwise.
pub fn add_or_subtract(a: f64, b: f64, do_addition: bool) -> f64 {
    if do_addition {
        a + b
    } else {
        a - b
    }
}

/// Multiply every element of `xin` by `a`, writing into `xout`.
/// Writes `min(xin.len(), xout.len())` elements.
pub fn scalar_multiply(a: f64, xin: &[f64], xout: &mut [f64]) {
    for (out, x) in xout.iter_mut().zip(xin) {
        *out = a * x;
    }
}

/// Element-wise sum of `a` and `b` into `out`.
pub fn add_arrays(out: &mut [f64], a: &[f64], b: &[f64]) {
    for (i, out) in out.iter_mut().enumerate() {
        *out = a[i] + b[i];
    }
}

/// Cumulative product `1 * 2 * ... * n` as a double.
/// `factorial(0)` is `1.0`; `n = 170` is the last finite value.
pub fn factorial(n: u8) -> f64 {
    (1..=u32::from(n)).map(f64::from).product()
}

/// Sample standard deviation (divides by `n - 1`).
/// Returns `0.0` for fewer than two samples.
pub fn standard_deviation(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Row-major matrix product of an `r1 x c1` matrix and an `r2 x c2` matrix.
/// Returns `None` when the shapes do not agree or a slice is undersized.
pub fn matrix_multiply(
    a: &[f64],
    r1: usize,
    c1: usize,
    b: &[f64],
    r2: usize,
    c2: usize,
) -> Option<Vec<f64>> {
    if c1 != r2 || a.len() < r1 * c1 || b.len() < r2 * c2 {
        return None;
    }
    let a = DMatrix::from_row_slice(r1, c1, &a[..r1 * c1]);
    let b = DMatrix::from_row_slice(r2, c2, &b[..r2 * c2]);
    let product = a * b;
    // DMatrix stores column-major; emit row-major for the C caller.
    let mut out = Vec::with_capacity(r1 * c2);
    for row in 0..r1 {
        for col in 0..c2 {
            out.push(product[(row, col)]);
        }
    }
    Some(out)
}
