//! The numeric bound on polynomial coefficients.

use std::fmt;

use num_traits::Signed;

/// A signed numeric type usable as a polynomial coefficient.
///
/// Implemented for every type meeting the bounds, which covers the signed
/// primitive integers and floats.
pub trait Coefficient: Signed + Clone + PartialOrd + fmt::Display {}

impl<T> Coefficient for T where T: Signed + Clone + PartialOrd + fmt::Display {}
