use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
/// A currency amount owed on the card.
///
/// Balances compound by plain floating-point multiplication, so the wrapped
/// value is an `f64`. `Money` keeps amounts from being mixed up with the
/// day/month integers that travel alongside them and gives them a fixed
/// 4-decimal text form.
///
/// # Examples
/// ```
/// use credit_card::common::money::Money;
///
/// let amount: Money = "100".parse().unwrap();
/// assert_eq!(amount.scaled(1.05).to_string_4dp(), "105.0000");
/// ```
pub struct Money(f64);

impl Money {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0.0)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Multiplies the amount by `factor`.
    pub fn scaled(self, factor: f64) -> Money {
        Money(self.0 * factor)
    }

    pub fn to_string_4dp(&self) -> String {
        // avoid printing "-0.0000"
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        format!("{:.4}", v)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        let value = bd
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseBigDecimalError::Other("amount out of range".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
