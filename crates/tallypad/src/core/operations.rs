//! The four binary operators.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{EntryError, EntryResult};

/// Type-safe operator enum with a display glyph and an exact decimal
/// function per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Returns the glyph shown in the pending-expression display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a keyboard character to an operator. Both the ASCII characters
    /// and the display glyphs are accepted.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two exact decimals.
    ///
    /// Division rejects a zero divisor, rounds the quotient half-up to
    /// `fraction_limit` places and strips trailing zeros. All arithmetic is
    /// checked; a result outside the representable decimal range is an
    /// [`EntryError::Overflow`].
    pub fn apply(
        &self,
        lhs: Decimal,
        rhs: Decimal,
        fraction_limit: u32,
    ) -> EntryResult<Decimal> {
        match self {
            Self::Add => lhs.checked_add(rhs).ok_or(EntryError::Overflow),
            Self::Subtract => lhs.checked_sub(rhs).ok_or(EntryError::Overflow),
            Self::Multiply => lhs.checked_mul(rhs).ok_or(EntryError::Overflow),
            Self::Divide => {
                if rhs.is_zero() {
                    return Err(EntryError::DivisionByZero);
                }
                let quotient = lhs.checked_div(rhs).ok_or(EntryError::Overflow)?;
                Ok(quotient
                    .round_dp_with_strategy(fraction_limit, RoundingStrategy::MidpointAwayFromZero)
                    .normalize())
            }
        }
    }
}
