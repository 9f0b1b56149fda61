use crate::number::{Domain, Numeric};

impl Numeric for i64 {
    type Key = i64;

    const DOMAIN: Domain = Domain::Integer;

    #[inline]
    fn key(self) -> i64 {
        self
    }

    #[inline]
    fn magnitude(self) -> i64 {
        // i64::MIN has no positive counterpart; saturating keeps it out of any window
        self.saturating_abs()
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == 0
    }

    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn checked_add(self, rhs: i64) -> Option<i64> {
        i64::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: i64) -> Option<i64> {
        i64::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: i64) -> Option<i64> {
        i64::checked_mul(self, rhs)
    }

    #[inline]
    fn exact_div(self, rhs: i64) -> Option<i64> {
        match i64::checked_rem(self, rhs) {
            Some(0) => i64::checked_div(self, rhs),
            _ => None,
        }
    }

    fn scaled(self, factor: u32) -> Option<i64> {
        i64::checked_mul(self, i64::from(factor))
    }

    fn default_min_relevant() -> Option<i64> {
        None
    }
}
