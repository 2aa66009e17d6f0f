//! The entry state machine.
//!
//! One button press maps to one pure transition. The whole machine is a
//! small `Copy` value, so the presentation layer can hold the current
//! state, feed a press in, and swap in the returned state; a failed
//! transition returns an error and the caller keeps the state it had.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Entry, EntryError, EntryResult, Operator, MAX_SCALE};

/// A captured left operand awaiting its right operand and an evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    /// Value captured when the operator was chosen.
    left: Decimal,
    /// The chosen operator.
    op: Operator,
}

impl Pending {
    /// Creates a pending operation.
    #[must_use]
    pub fn new(left: Decimal, op: Operator) -> Self {
        Self { left, op }
    }

    /// The captured left operand.
    #[must_use]
    pub fn left(&self) -> Decimal {
        self.left
    }

    /// The chosen operator.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// The pending-expression display text, `"<left> <glyph>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.left, self.op.symbol())
    }
}

/// One button press, as reducer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The `+/-` key.
    ToggleSign,
    /// The `.` key.
    DecimalPoint,
    /// One of the four operator keys.
    Operator(Operator),
    /// The `=` key.
    Evaluate,
    /// Reset to the initial zero state.
    Clear,
}

/// The two text fields the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Pending-expression line, empty when nothing is pending.
    pub expression: String,
    /// The number being typed, with its sign and decimal-point adornments.
    pub entry: String,
}

/// The complete machine: current entry, optional pending operation, and
/// the configured fraction limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    entry: Entry,
    pending: Option<Pending>,
    fraction_limit: u32,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Fractional places accepted by default, sized to keep the entry
    /// within a fixed display width.
    pub const DEFAULT_FRACTION_LIMIT: u32 = 11;

    /// Creates the initial state: zero entry, nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fraction_limit(Self::DEFAULT_FRACTION_LIMIT)
    }

    /// Creates an initial state with a custom fraction limit. Limits above
    /// the decimal representation's maximum scale are clamped to it.
    #[must_use]
    pub fn with_fraction_limit(fraction_limit: u32) -> Self {
        Self {
            entry: Entry::zero(),
            pending: None,
            fraction_limit: fraction_limit.min(MAX_SCALE),
        }
    }

    /// The entry currently being typed.
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The pending operation, if an operator has been chosen.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The configured maximum number of fractional places.
    #[must_use]
    pub fn fraction_limit(&self) -> u32 {
        self.fraction_limit
    }

    /// Appends a digit to the entry. Digits above 9 are a typed error;
    /// digits beyond the fraction limit leave the state unchanged.
    pub fn input_digit(&self, digit: u8) -> EntryResult<Self> {
        if digit > 9 {
            return Err(EntryError::InvalidDigit(digit));
        }
        Ok(Self {
            entry: self.entry.push_digit(digit, self.fraction_limit),
            ..*self
        })
    }

    /// Flips the entry's sign.
    #[must_use]
    pub fn toggle_sign(&self) -> Self {
        Self {
            entry: self.entry.toggle_sign(),
            ..*self
        }
    }

    /// Enters or commits decimal mode on the entry.
    #[must_use]
    pub fn toggle_decimal_point(&self) -> Self {
        Self {
            entry: self.entry.toggle_decimal_point(),
            ..*self
        }
    }

    /// Chooses an operator: evaluates any already-pending operation, takes
    /// the result as the new left operand, and resets the entry to zero.
    /// An error in the chained evaluation leaves the machine untouched.
    pub fn choose_operator(&self, op: Operator) -> EntryResult<Self> {
        let left = self.evaluated_value()?;
        tracing::debug!(left = %left, operator = op.symbol(), "pending operation captured");
        Ok(Self {
            entry: Entry::zero(),
            pending: Some(Pending::new(left, op)),
            fraction_limit: self.fraction_limit,
        })
    }

    /// Evaluates the pending operation, making its result the new entry
    /// and clearing the pending slot. With nothing pending the state is
    /// returned unchanged.
    pub fn evaluate(&self) -> EntryResult<Self> {
        if self.pending.is_none() {
            return Ok(*self);
        }
        let result = self.evaluated_value()?;
        tracing::debug!(result = %result, "pending operation evaluated");
        Ok(Self {
            entry: Entry::from_value(result),
            pending: None,
            fraction_limit: self.fraction_limit,
        })
    }

    /// Resets to the initial zero state, keeping the configured limit.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::with_fraction_limit(self.fraction_limit)
    }

    /// Applies one button press.
    pub fn apply(&self, action: Action) -> EntryResult<Self> {
        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::ToggleSign => Ok(self.toggle_sign()),
            Action::DecimalPoint => Ok(self.toggle_decimal_point()),
            Action::Operator(op) => self.choose_operator(op),
            Action::Evaluate => self.evaluate(),
            Action::Clear => Ok(self.clear()),
        }
    }

    /// Derives the two display fields. Pure; nothing is stored.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        DisplayState {
            expression: self.pending.map_or_else(String::new, |p| p.label()),
            entry: self.entry.label(),
        }
    }

    /// The value of the expression as it stands: the pending operation
    /// applied to the entry, with trailing fractional zeros stripped, or
    /// the bare entry value when nothing is pending.
    fn evaluated_value(&self) -> EntryResult<Decimal> {
        match self.pending {
            Some(p) => Ok(p
                .op
                .apply(p.left(), self.entry.value(), self.fraction_limit)?
                .normalize()),
            None => Ok(self.entry.value()),
        }
    }
}
