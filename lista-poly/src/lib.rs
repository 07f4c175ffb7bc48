//! # lista-poly
//!
//! Dense single-variable polynomials over signed numeric coefficients.
//!
//! A [`Polynomial`] stores its coefficients in ascending degree order and is
//! always kept in canonical form: no trailing zero coefficients, except the
//! zero polynomial itself, which is stored as `[0]`.
//!
//! ```
//! use lista_poly::Polynomial;
//!
//! let p = Polynomial::new(vec![1, 2]).unwrap(); // 1 + 2x
//! let q = Polynomial::new(vec![3, 4, 5]).unwrap(); // 3 + 4x + 5x^2
//!
//! assert_eq!((&p + &q).to_string(), "W(x) = 5x^2 + 6x + 4");
//! assert_eq!((&p * &p).coeffs(), &[1, 4, 4]);
//! assert_eq!(q.evaluate(&1), 12);
//! assert!((&q - &q).is_zero());
//! ```

#![warn(missing_docs)]

pub mod coefficient;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use coefficient::Coefficient;
pub use dense::Polynomial;
