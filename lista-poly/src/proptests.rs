//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::dense::Polynomial;

// Zeros are over-represented so trailing-zero trimming gets exercised.
fn coeff() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), -100i64..100i64]
}

fn raw_coeffs() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(coeff(), 1..=6)
}

// Degree 0-5
fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
    raw_coeffs().prop_map(|c| Polynomial::new(c).unwrap())
}

// Evaluation points stay small so products of degree-10 polynomials fit in i64.
fn point() -> impl Strategy<Value = i64> {
    -10i64..=10i64
}

proptest! {
    // Canonical form

    #[test]
    fn construct_is_canonical(coeffs in raw_coeffs()) {
        let p = Polynomial::new(coeffs.clone()).unwrap();
        let stored = p.coeffs();
        prop_assert!(!stored.is_empty());
        if stored.len() > 1 {
            prop_assert_ne!(*stored.last().unwrap(), 0);
        }
        // Only trailing zeros are dropped.
        prop_assert_eq!(stored, &coeffs[..stored.len()]);
        prop_assert!(coeffs[stored.len()..].iter().all(|&c| c == 0));
    }

    #[test]
    fn degree_matches_stored_length(p in small_poly()) {
        prop_assert_eq!(p.degree(), p.coeffs().len() - 1);
    }

    // Ring axioms

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn mul_identity(a in small_poly()) {
        let one = Polynomial::one();
        prop_assert_eq!(&a * &one, a.clone());
        prop_assert_eq!(&one * &a, a);
    }

    #[test]
    fn mul_zero(a in small_poly()) {
        let zero = Polynomial::zero();
        prop_assert!((&a * &zero).is_zero());
        let product = &zero * &a;
        prop_assert_eq!(product.coeffs(), &[0]);
    }

    #[test]
    fn self_difference_is_zero(a in small_poly()) {
        let diff = &a - &a;
        prop_assert!(diff.is_zero());
        prop_assert_eq!(diff.to_string(), "W(x) = 0");
    }

    #[test]
    fn sub_is_add_neg(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    // Degree bounds

    #[test]
    fn add_degree_bound(a in small_poly(), b in small_poly()) {
        prop_assert!((&a + &b).degree() <= a.degree().max(b.degree()));
    }

    #[test]
    fn mul_degree(a in small_poly(), b in small_poly()) {
        let product = &a * &b;
        if !a.is_zero() && !b.is_zero() {
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        }
    }

    // Evaluation is a ring homomorphism

    #[test]
    fn eval_add(a in small_poly(), b in small_poly(), x in point()) {
        prop_assert_eq!((&a + &b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
    }

    #[test]
    fn eval_mul(a in small_poly(), b in small_poly(), x in point()) {
        prop_assert_eq!((&a * &b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
    }

    #[test]
    fn eval_matches_power_sum(a in small_poly(), x in point()) {
        let expected: i64 = a
            .coeffs()
            .iter()
            .zip(0u32..)
            .map(|(c, i)| c * x.pow(i))
            .sum();
        prop_assert_eq!(a.evaluate(&x), expected);
    }

    // Rendering

    #[test]
    fn display_leading_term_unsigned_when_positive(a in small_poly()) {
        let s = a.to_string();
        prop_assert!(s.starts_with("W(x) = "));
        let body = &s["W(x) = ".len()..];
        prop_assert!(!body.starts_with('+'));
        prop_assert_eq!(body.starts_with("- "), *a.leading_coeff() < 0);
        let nonzero = a.coeffs().iter().filter(|&&c| c != 0).count();
        let signs = body.matches(" + ").count() + body.matches(" - ").count();
        prop_assert_eq!(signs, nonzero.saturating_sub(1));
    }
}
