//! The number currently being typed.
//!
//! A plain numeric value cannot represent everything a calculator display
//! needs mid-entry: a minus pressed before any digit, a decimal point with
//! no fractional digit yet, and typed trailing zeros such as `1.20` all
//! carry intent beyond the numeral. `Entry` keeps the exact decimal value
//! together with the two intent flags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The current entry: the decimal being typed plus display intent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Exact decimal value typed so far.
    value: Decimal,
    /// Leading-minus intent. Stays meaningful at zero, where the numeral
    /// itself has no sign to carry it.
    negative: bool,
    /// Decimal-point intent. Stays meaningful at scale zero, where `3.`
    /// has been typed but no fractional digit has followed.
    decimal: bool,
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    /// The zero entry every session and every operator press starts from.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
            negative: false,
            decimal: false,
        }
    }

    /// Builds an entry around a value, re-deriving both flags from the
    /// numeral: negative iff strictly below zero, decimal iff the scale is
    /// positive. Digit presses and evaluation results go through here.
    ///
    /// A negatively-signed zero would render as `-0` inside the numeral,
    /// so the sign bit is cleared on zero; the `negative` flag alone
    /// carries minus intent at zero.
    #[must_use]
    pub fn from_value(mut value: Decimal) -> Self {
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Self {
            value,
            negative: value < Decimal::ZERO,
            decimal: value.scale() > 0,
        }
    }

    /// The exact decimal value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Whether a leading minus is intended.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether a decimal point has been typed and not committed away.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.decimal
    }

    /// Appends one digit.
    ///
    /// At exact zero with no decimal point the digit replaces the value,
    /// collapsing leading zeros. In decimal mode the digit lands at the
    /// next fractional place, signed like the rest of the entry; once
    /// `fraction_limit` places are filled further digits are rejected.
    /// Otherwise the value shifts one decimal place left and takes the
    /// signed digit. Digits whose magnitude would not fit the decimal
    /// representation are rejected the same way as over-limit fractions.
    #[must_use]
    pub fn push_digit(&self, digit: u8, fraction_limit: u32) -> Self {
        debug_assert!(digit <= 9);
        let unsigned = Decimal::from(digit);
        let signed = if self.negative { -unsigned } else { unsigned };

        if self.value.is_zero() && !self.decimal {
            return Self::from_value(signed);
        }

        if self.decimal {
            if self.value.scale() >= fraction_limit {
                return *self;
            }
            let place = Decimal::new(i64::from(digit), self.value.scale() + 1);
            let fraction = if self.negative { -place } else { place };
            return match self.value.checked_add(fraction) {
                Some(value) => Self::from_value(value),
                None => *self,
            };
        }

        match self
            .value
            .checked_mul(Decimal::TEN)
            .and_then(|shifted| shifted.checked_add(signed))
        {
            Some(value) => Self::from_value(value),
            None => *self,
        }
    }

    /// Negates the value and flips the minus intent. At zero the value is
    /// numerically untouched and only the flag changes.
    #[must_use]
    pub fn toggle_sign(&self) -> Self {
        Self {
            value: if self.value.is_zero() {
                self.value
            } else {
                -self.value
            },
            negative: !self.negative,
            decimal: self.decimal,
        }
    }

    /// Enters decimal mode, or on a second press commits the truncation
    /// toward zero and leaves decimal mode. The minus intent survives the
    /// commit.
    #[must_use]
    pub fn toggle_decimal_point(&self) -> Self {
        if self.decimal {
            let mut truncated = self.value.trunc();
            if truncated.is_zero() {
                truncated.set_sign_positive(true);
            }
            Self {
                value: truncated,
                negative: self.negative,
                decimal: false,
            }
        } else {
            Self {
                value: self.value,
                negative: self.negative,
                decimal: true,
            }
        }
    }

    /// The display text for this entry: an extra minus while the numeral is
    /// still zero, the canonical decimal text, and a trailing dot while no
    /// fractional digit has been typed yet.
    #[must_use]
    pub fn label(&self) -> String {
        let minus = if self.negative && self.value.is_zero() {
            "-"
        } else {
            ""
        };
        let dot = if self.decimal && self.value.scale() == 0 {
            "."
        } else {
            ""
        };
        format!("{minus}{}{dot}", self.value)
    }
}
