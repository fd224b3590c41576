//! String-reversal FFI functions.
//!
//! Buffers cross the boundary as raw `char` pointers with explicit lengths and
//! are treated as opaque bytes, never as NUL-terminated C strings: the length
//! `n` alone decides how much is read or written.

// FFI functions intentionally take raw pointers and are called from foreign
// code. The caller is responsible for ensuring pointer validity.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::os::raw::{c_char, c_int};
use std::slice;

use crate::text;

/// Write the reverse of the first `n` bytes of `original` into `reversed`.
/// The output buffer is caller-owned, must hold at least `n` bytes, and must
/// not alias the input.
#[no_mangle]
pub extern "C" fn reverse_string_v1(original: *const c_char, n: c_int, reversed: *mut c_char) {
    if n <= 0 || original.is_null() || reversed.is_null() {
        return;
    }
    let len = n as usize;
    let original = unsafe { slice::from_raw_parts(original as *const u8, len) };
    let reversed = unsafe { slice::from_raw_parts_mut(reversed as *mut u8, len) };
    reversed.copy_from_slice(&text::reverse_bytes(original));
}

/// Reverse the first `n` bytes of `original` into a newly allocated buffer of
/// exactly `n` bytes (not NUL-terminated) and return it.
///
/// Ownership of the returned buffer transfers to the caller, who must release
/// it with `free_reversed_string` using the same `n`. Returns null when `n` is
/// not positive or `original` is null.
#[no_mangle]
pub extern "C" fn reverse_string_v2(original: *mut c_char, n: c_int) -> *mut c_char {
    if n <= 0 || original.is_null() {
        return std::ptr::null_mut();
    }
    let original = unsafe { slice::from_raw_parts(original as *const u8, n as usize) };
    let reversed = text::reverse_bytes(original).into_boxed_slice();
    Box::into_raw(reversed) as *mut c_char
}

/// Free a buffer returned by `reverse_string_v2`.
/// `n` must be the length passed to the call that produced the buffer.
/// Freeing twice, or freeing a pointer from any other source, is undefined
/// behavior.
#[no_mangle]
pub extern "C" fn free_reversed_string(ptr: *mut c_char, n: c_int) {
    if ptr.is_null() || n <= 0 {
        return;
    }
    unsafe {
        let slice = std::ptr::slice_from_raw_parts_mut(ptr as *mut u8, n as usize);
        drop(Box::from_raw(slice));
    }
}
