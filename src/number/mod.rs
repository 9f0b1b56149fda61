//! Numeric domains the search can run over.
//!
//! Values double as lookup keys for the open and closed sets, so every domain
//! provides an exact [`Numeric::Key`]. Floating-point values are keyed by their
//! bit pattern: two results that differ in the last bit are two different
//! values with two different derivations.

mod errors;
mod float;
mod integer;
mod window;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

pub use errors::NumberError;
pub use window::RelevanceWindow;

/// Multiplier applied to the largest seed magnitude to get the default upper
/// relevance bound.
pub const RELEVANCE_FACTOR: u32 = 3000;

/// Default lower relevance bound for floating-point searches.
pub const FLOAT_EPSILON: f64 = 1e-9;

/// Which arithmetic the search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Exact 64-bit integers; division must divide evenly
    Integer,
    /// IEEE 754 doubles; values compared bit for bit
    Float,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Domain::Integer => write!(f, "integer"),
            Domain::Float => write!(f, "float"),
        }
    }
}

/// A number type the search can combine, key and bound.
///
/// All arithmetic is checked: `None` means the candidate has no value in this
/// domain (overflow, non-finite result, zero divisor, inexact quotient) and is
/// skipped by the caller.
pub trait Numeric:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    type Key: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync;

    const DOMAIN: Domain;

    fn key(self) -> Self::Key;

    fn magnitude(self) -> Self;

    fn is_zero(self) -> bool;

    fn is_finite(self) -> bool;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Quotient, only when it is representable exactly in this domain.
    fn exact_div(self, rhs: Self) -> Option<Self>;

    /// `self * factor`, `None` if that does not fit.
    fn scaled(self, factor: u32) -> Option<Self>;

    fn default_min_relevant() -> Option<Self>;
}

/// Parse a single value of domain `N`
///
/// # Errors
///
/// Returns an error if the text is not a number of this domain or, for
/// floats, if it is not finite.
pub fn parse_value<N: Numeric>(raw: &str) -> Result<N, NumberError> {
    let value = raw
        .trim()
        .parse::<N>()
        .map_err(|_| NumberError::Invalid {
            raw: raw.to_string(),
            domain: N::DOMAIN,
        })?;

    if !value.is_finite() {
        return Err(NumberError::NonFinite(raw.to_string()));
    }
    Ok(value)
}

/// Parse every entry of `raw`, stopping at the first bad one
///
/// # Errors
///
/// See [`parse_value`].
pub fn parse_values<N: Numeric>(raw: &[String]) -> Result<Vec<N>, NumberError> {
    raw.iter().map(|s| parse_value(s)).collect()
}
