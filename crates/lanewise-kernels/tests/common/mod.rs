//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Generate array lengths that test edge cases for lane chunking
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // 128-bit f64 width
        3,   // 128-bit f64 width + 1
        4,   // 128-bit f32 width
        5,   // 128-bit f32 width + 1
        7,   // 256-bit f32 width - 1
        8,   // 256-bit f32 width
        9,   // 256-bit f32 width + 1
        15,  // Multiple of no register width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
    ]
}

/// Deterministic float data with mixed signs
pub fn float_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

/// Deterministic integer data with mixed signs
pub fn int_data(len: usize) -> Vec<i64> {
    (0..len).map(|i| (i as i64 * 7919) % 1000 - 500).collect()
}
