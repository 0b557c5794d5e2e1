//! Exchange rate value type and the precision policy applied to it.
//!
//! A [`Rate`] is the number of PLN paid for one unit of a foreign currency.
//! Every rate produced by arithmetic goes through [`RATE_PRECISION`], so the
//! same inputs always give the same digits regardless of platform.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt::Display;

use crate::core::error::RateError;

/// Significant-digit count and rounding mode used for rate arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub digits: u32,
    pub strategy: RoundingStrategy,
}

/// Three significant digits, rounded toward positive infinity.
pub const RATE_PRECISION: Precision = Precision {
    digits: 3,
    strategy: RoundingStrategy::ToPositiveInfinity,
};

impl Precision {
    /// Rounds `value` to `self.digits` significant digits.
    ///
    /// The result is normalized (no trailing zeros), so applying the same
    /// policy twice yields the same value.
    pub fn apply(&self, value: Decimal) -> Decimal {
        let value = value.normalize();
        if value.is_zero() {
            return Decimal::ZERO;
        }

        let significant = digit_count(value.mantissa().unsigned_abs());
        if significant <= self.digits {
            return value;
        }

        let excess = significant - self.digits;
        let scale = value.scale();
        if excess <= scale {
            return value
                .round_dp_with_strategy(scale - excess, self.strategy)
                .normalize();
        }

        // Rounding lands left of the decimal point, e.g. 12345 -> 12400.
        let shift = excess - scale;
        let factor = Decimal::from_i128_with_scale(10_i128.pow(shift), 0);
        let rounded = (value / factor).round_dp_with_strategy(0, self.strategy);
        rounded
            .checked_mul(factor)
            .map(|v| v.normalize())
            .unwrap_or(if value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}

fn digit_count(mut n: u128) -> u32 {
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Wraps `value` exactly as given.
    pub fn new(value: Decimal) -> Self {
        Rate { value }
    }

    /// Builds a rate from a raw quote, applying [`RATE_PRECISION`].
    pub fn of(value: Decimal) -> Self {
        Rate {
            value: RATE_PRECISION.apply(value),
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns `dividend / divisor` rounded with [`RATE_PRECISION`].
    pub fn divide(dividend: Rate, divisor: Rate) -> Result<Rate, RateError> {
        let quotient = dividend
            .value
            .checked_div(divisor.value)
            .ok_or(RateError::ZeroRate)?;
        Ok(Rate::of(quotient))
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
