use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use catalog_core::{DataValidationError, ValidationResult, ValueObject};

/// Fractional digits kept for every price (matches `NUMERIC(14,2)`).
pub const PRICE_SCALE: u32 = 2;

/// Fixed-point monetary amount.
///
/// Always normalised to [`PRICE_SCALE`] digits so that equality, storage and
/// the string form agree: `12.5` and `12.50` are the same price and both
/// render as `"12.50"`. Amounts too large to carry those digits (more than
/// 26 integer digits) are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: Decimal) -> ValidationResult<Self> {
        let mut amount =
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(PRICE_SCALE);
        // rescale stops short of the target scale when the mantissa would overflow
        if amount.scale() != PRICE_SCALE {
            return Err(DataValidationError::invalid_price(format!(
                "{amount} exceeds {PRICE_SCALE}-digit precision"
            )));
        }
        Ok(Self(amount))
    }

    /// Price from an integer number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, PRICE_SCALE))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DataValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl FromStr for Price {
    type Err = DataValidationError;

    /// Parses decimal text; surrounding spaces and double quotes are ignored,
    /// so a JSON-quoted query value like `"\"12.50\""` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(|c: char| c == ' ' || c == '"');
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| DataValidationError::invalid_price(format!("{s:?}: {e}")))?;
        Self::new(amount)
    }
}

impl TryFrom<&str> for Price {
    type Error = DataValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&serde_json::Number> for Price {
    type Error = DataValidationError;

    fn try_from(value: &serde_json::Number) -> Result<Self, Self::Error> {
        value.to_string().parse()
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
