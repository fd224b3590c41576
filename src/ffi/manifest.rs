//! Introspection FFI functions.
//!
//! A foreign harness that has just loaded the shared library can ask it what
//! it exports and which version it is, without parsing any header. Both
//! functions return heap-allocated NUL-terminated strings that must be freed
//! with `free_string`.

// FFI functions intentionally take raw pointers and are called from foreign
// code. The caller is responsible for ensuring pointer validity.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::CString;
use std::os::raw::c_char;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One exported symbol and its C signature.
#[derive(Debug, Clone, Serialize)]
pub struct Export {
    pub name: &'static str,
    pub signature: &'static str,
}

/// Every symbol this library exports, in header order.
pub static EXPORTS: Lazy<Vec<Export>> = Lazy::new(|| {
    let sig = |name, signature| Export { name, signature };
    vec![
        sig("add", "int add(int a, int b)"),
        sig("subtract", "float subtract(float a, float b)"),
        sig(
            "add_or_subtract",
            "double add_or_subtract(double a, double b, bool do_addition)",
        ),
        sig("factorial", "double factorial(uint8_t n)"),
        sig(
            "scalar_multiply",
            "void scalar_multiply(double a, double* xin, int n, double* xout)",
        ),
        sig(
            "add_1d_arrays",
            "void add_1d_arrays(double* out, double* a, double* b, int n)",
        ),
        sig(
            "standard_deviation",
            "double standard_deviation(double* data, int n)",
        ),
        sig(
            "matrix_multiply",
            "void matrix_multiply(double* out, double* a, int r1, int c1, double* b, int r2, int c2)",
        ),
        sig(
            "reverse_string_v1",
            "void reverse_string_v1(const char* original, int n, char* reversed)",
        ),
        sig(
            "reverse_string_v2",
            "char* reverse_string_v2(char* original, int n)",
        ),
        sig(
            "free_reversed_string",
            "void free_reversed_string(char* ptr, int n)",
        ),
        sig(
            "distance_4_points",
            "double distance_4_points(FourPoints p)",
        ),
        sig(
            "distance_n_points",
            "double distance_n_points(NPoints p)",
        ),
        sig("library_version", "char* library_version(void)"),
        sig("library_manifest", "char* library_manifest(void)"),
        sig("free_string", "void free_string(char* ptr)"),
    ]
});

/// Crate version as a heap-allocated C string.
/// The result must be freed with `free_string`.
#[no_mangle]
pub extern "C" fn library_version() -> *mut c_char {
    match CString::new(env!("CARGO_PKG_VERSION")) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// JSON array of `{name, signature}` for every exported symbol.
/// Returns a heap-allocated C string that must be freed with `free_string`,
/// or null on serialization failure.
#[no_mangle]
pub extern "C" fn library_manifest() -> *mut c_char {
    let json = match serde_json::to_string(&*EXPORTS) {
        Ok(j) => j,
        Err(_) => return std::ptr::null_mut(),
    };
    match CString::new(json) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string allocated by `library_version` or `library_manifest`.
#[no_mangle]
pub extern "C" fn free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}
