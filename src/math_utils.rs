use crate::utils::{add, multiply};

/// `a² + b²`, wrapping on overflow.
pub fn square_sum(a: i32, b: i32) -> i32 {
    add(multiply(a, a), multiply(b, b))
}

/// Mean of two integers. The sum is taken in integer arithmetic first,
/// then halved in floating point, so `average(5, 4)` is `4.5`.
pub fn average(a: i32, b: i32) -> f64 {
    f64::from(add(a, b)) / 2.0
}
