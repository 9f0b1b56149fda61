use crate::number::{Domain, FLOAT_EPSILON, Numeric};

#[inline]
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Numeric for f64 {
    type Key = u64;

    const DOMAIN: Domain = Domain::Float;

    #[inline]
    fn key(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn magnitude(self) -> f64 {
        f64::abs(self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == 0.0
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn checked_add(self, rhs: f64) -> Option<f64> {
        finite(self + rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: f64) -> Option<f64> {
        finite(self - rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: f64) -> Option<f64> {
        finite(self * rhs)
    }

    #[inline]
    fn exact_div(self, rhs: f64) -> Option<f64> {
        if rhs == 0.0 {
            return None;
        }
        finite(self / rhs)
    }

    fn scaled(self, factor: u32) -> Option<f64> {
        finite(self * f64::from(factor))
    }

    fn default_min_relevant() -> Option<f64> {
        Some(FLOAT_EPSILON)
    }
}
