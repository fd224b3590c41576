// Prevent accidental debug output in library code.
// This library is loaded in-process by foreign callers and must stay silent.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

// Core modules
pub mod geometry;
pub mod math;
pub mod text;

pub use geometry::Point;

// FFI module (C ABI functions)
pub mod ffi;

// Re-export all FFI functions and types at the crate root so foreign-header
// generators and in-process tests see a flat surface.
pub use ffi::{
    // Scalar exports
    add,
    add_1d_arrays,
    add_or_subtract,
    distance_4_points,
    distance_n_points,
    factorial,
    free_reversed_string,
    // Introspection exports
    free_string,
    library_manifest,
    library_version,
    matrix_multiply,
    // String exports
    reverse_string_v1,
    reverse_string_v2,
    // Array exports
    scalar_multiply,
    standard_deviation,
    subtract,
    // Point struct exports
    FourPoints,
    NPoints,
};
