//! FFI (Foreign Function Interface) module.
//!
//! This module provides the C ABI of the library. Every function here is
//! exposed as `extern "C"` and can be called from Python, C, Swift, etc. once
//! the crate is built as a shared library. The functions are pure and
//! stateless; all buffers are caller-owned unless a matching free function is
//! documented.

mod arithmetic;
mod arrays;
mod manifest;
mod points;
mod strings;

// Re-export all FFI functions and types at the module level
pub use arithmetic::{add, add_or_subtract, factorial, subtract};

pub use arrays::{add_1d_arrays, matrix_multiply, scalar_multiply, standard_deviation};

pub use manifest::{free_string, library_manifest, library_version};

pub use points::{distance_4_points, distance_n_points, FourPoints, NPoints};

pub use strings::{free_reversed_string, reverse_string_v1, reverse_string_v2};
