//! Tests for the introspection exports.

use std::ffi::CStr;

use marshal_demo::{free_string, library_manifest, library_version};

fn take_string(ptr: *mut std::os::raw::c_char) -> String {
    assert!(!ptr.is_null());
    let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    free_string(ptr);
    s
}

#[test]
fn test_version_matches_crate() {
    let version = take_string(library_version());
    assert_eq!(version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_manifest_is_valid_json() {
    let manifest = take_string(library_manifest());
    let entries: Vec<serde_json::Value> = serde_json::from_str(&manifest).unwrap();
    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(entry["name"].is_string());
        assert!(entry["signature"].is_string());
    }
}

#[test]
fn test_manifest_lists_every_export() {
    let manifest = take_string(library_manifest());
    let entries: Vec<serde_json::Value> = serde_json::from_str(&manifest).unwrap();
    let names: Vec<&str> = entries.iter().filter_map(|e| e["name"].as_str()).collect();
    for expected in [
        "add",
        "subtract",
        "add_or_subtract",
        "factorial",
        "scalar_multiply",
        "add_1d_arrays",
        "standard_deviation",
        "matrix_multiply",
        "reverse_string_v1",
        "reverse_string_v2",
        "free_reversed_string",
        "distance_4_points",
        "distance_n_points",
        "library_version",
        "library_manifest",
        "free_string",
    ] {
        assert!(names.contains(&expected), "missing export: {expected}");
    }
}

#[test]
fn test_manifest_snapshot() {
    let manifest = take_string(library_manifest());
    let entries: Vec<serde_json::Value> = serde_json::from_str(&manifest).unwrap();
    let listing = entries
        .iter()
        .map(|e| e["signature"].as_str().unwrap().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r###"
int add(int a, int b)
float subtract(float a, float b)
double add_or_subtract(double a, double b, bool do_addition)
double factorial(uint8_t n)
void scalar_multiply(double a, double* xin, int n, double* xout)
void add_1d_arrays(double* out, double* a, double* b, int n)
double standard_deviation(double* data, int n)
void matrix_multiply(double* out, double* a, int r1, int c1, double* b, int r2, int c2)
void reverse_string_v1(const char* original, int n, char* reversed)
char* reverse_string_v2(char* original, int n)
void free_reversed_string(char* ptr, int n)
double distance_4_points(FourPoints p)
double distance_n_points(NPoints p)
char* library_version(void)
char* library_manifest(void)
void free_string(char* ptr)
"###);
}
