//! Dense univariate polynomials.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use lista_core::{ListaError, Result, Summarizable};

use crate::coefficient::Coefficient;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index `i` holds the
/// coefficient of `x^i`. The list is never empty and never ends in a zero,
/// except for the zero polynomial `[0]`.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T: Coefficient> {
    coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Trailing zero coefficients are trimmed.
    ///
    /// # Errors
    ///
    /// [`ListaError::InvalidArgument`] if `coeffs` is empty.
    pub fn new(coeffs: impl Into<Vec<T>>) -> Result<Self> {
        let coeffs = coeffs.into();
        if coeffs.is_empty() {
            return Err(ListaError::InvalidArgument(
                "coefficient list must not be empty".into(),
            ));
        }
        Ok(Self::from_nonempty(coeffs))
    }

    fn from_nonempty(mut coeffs: Vec<T>) -> Self {
        debug_assert!(!coeffs.is_empty());
        while coeffs.len() > 1 && coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::from_nonempty(vec![c])
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0, the same as any other constant.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| f(self.coeff(i), other.coeff(i))).collect();
        Self::from_nonempty(result)
    }

    fn convolve(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::from_nonempty(result)
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = ListaError;

    fn try_from(coeffs: Vec<T>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: Self) -> Polynomial<T> {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: Self) -> Polynomial<T> {
        self.zip_with(other, |a, b| a - b)
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: Self) -> Polynomial<T> {
        self.convolve(other)
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($tr:ident :: $method:ident),*) => {$(
        impl<T: Coefficient> $tr for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: Self) -> Polynomial<T> {
                $tr::$method(&self, &other)
            }
        }
    )*};
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

/// Renders `W(x) = ...` with terms in descending degree, e.g.
/// `W(x) = - 3x^2 + 1`. Zero terms are skipped; a positive leading term has
/// no sign.
impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("W(x) = ")?;

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let sign = match (first, c.is_negative()) {
                (true, false) => "",
                (true, true) => "- ",
                (false, false) => " + ",
                (false, true) => " - ",
            };
            // Strip the rendered sign rather than negating, which overflows at T::MIN.
            let rendered = c.to_string();
            let magnitude = rendered.strip_prefix('-').unwrap_or(&rendered);
            match i {
                0 => write!(f, "{sign}{magnitude}")?,
                1 => write!(f, "{sign}{magnitude}x")?,
                _ => write!(f, "{sign}{magnitude}x^{i}")?,
            }
            first = false;
        }

        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl<T: Coefficient> Summarizable for Polynomial<T> {
    fn summary(&self) -> String {
        let terms = self.coeffs.iter().filter(|c| !c.is_zero()).count();
        format!("polynomial of degree {} with {} nonzero terms", self.degree(), terms)
    }
}

#[cfg(feature = "serde")]
impl<T: Coefficient + serde::Serialize> serde::Serialize for Polynomial<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.coeffs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Coefficient + serde::Deserialize<'de>> serde::Deserialize<'de> for Polynomial<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let coeffs = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(coeffs).map_err(serde::de::Error::custom)
    }
}
