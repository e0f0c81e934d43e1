//! Property-based tests for the arithmetic helpers.
//!
//! Each property must hold for every representable `i32`, overflow included.

use numkit::{add, average, fibonacci, is_even, multiply, sequence_string, square_sum, subtract};
use proptest::prelude::*;

proptest! {
    /// Property: addition is commutative
    #[test]
    fn prop_add_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    /// Property: swapping subtraction operands negates the result
    #[test]
    fn prop_subtract_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(a, b), subtract(b, a).wrapping_neg());
    }

    /// Property: subtraction undoes addition, even across overflow
    #[test]
    fn prop_subtract_inverts_add(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }

    #[test]
    fn prop_multiply_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    /// Property: is_even agrees with divisibility by 2
    #[test]
    fn prop_is_even_matches_remainder(n in any::<i32>()) {
        prop_assert_eq!(is_even(n), n.rem_euclid(2) == 0);
    }

    /// Property: consecutive integers have opposite parity
    #[test]
    fn prop_parity_alternates(n in any::<i32>()) {
        prop_assert_ne!(is_even(n), is_even(n.wrapping_add(1)));
    }

    #[test]
    fn prop_square_sum_symmetric(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(square_sum(a, b), square_sum(b, a));
        prop_assert_eq!(square_sum(a, b), square_sum(a.wrapping_neg(), b));
    }

    /// Property: without overflow, square_sum is the exact integer sum of squares
    #[test]
    fn prop_square_sum_exact_in_range(a in -30_000i32..30_000, b in -30_000i32..30_000) {
        let exact = i64::from(a) * i64::from(a) + i64::from(b) * i64::from(b);
        prop_assume!(exact <= i64::from(i32::MAX));
        prop_assert_eq!(i64::from(square_sum(a, b)), exact);
    }

    /// Property: average times two recovers the (non-overflowing) sum
    #[test]
    fn prop_average_doubles_to_sum(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
        prop_assert_eq!(average(a, b) * 2.0, f64::from(a + b));
    }

    /// Property: negative indices come back unchanged
    #[test]
    fn prop_fibonacci_negative_identity(n in i32::MIN..=1) {
        prop_assert_eq!(fibonacci(n), n);
    }

    /// Property: the printed sequence has exactly `count` space-terminated terms
    #[test]
    fn prop_sequence_term_count(count in 0u32..20) {
        let text = sequence_string(count);
        prop_assert_eq!(text.matches(' ').count(), count as usize);
        prop_assert!(!text.contains('\n'));
    }
}
