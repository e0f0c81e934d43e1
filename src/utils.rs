//! Basic integer arithmetic.
//!
//! All operations work on `i32` and wrap on overflow instead of panicking,
//! matching two's-complement machine arithmetic in both debug and release
//! builds.

/// Sum of two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Difference `a - b`.
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Product of two integers.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Whether `n` is evenly divisible by 2. Negative numbers included.
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}
