//! The calculator's button layout as plain data.
//!
//! A three-column digit pad and an operator column, each button carrying
//! the engine action it triggers. Rendering belongs to whatever UI hosts
//! the engine; keeping the layout as data lets the mapping from buttons
//! and keyboard characters to actions be tested on its own.
//!
//! ```text
//! [ 1 ] [ 2 ] [ 3 ]      [ + ]
//! [ 4 ] [ 5 ] [ 6 ]      [ - ]
//! [ 7 ] [ 8 ] [ 9 ]      [ × ]
//! [+/-] [ 0 ] [ . ]      [ ÷ ]
//!                        [ = ]
//! ```

use serde::Serialize;

use crate::core::{Action, Operator};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single button: its caption and the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// The caption on the button.
    pub label: &'static str,
    /// The engine action this button performs.
    pub action: Action,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            action: Action::Digit(d),
        }
    }

    /// Creates the sign-toggle button.
    #[must_use]
    pub fn sign() -> Self {
        Self {
            label: "+/-",
            action: Action::ToggleSign,
        }
    }

    /// Creates the decimal-point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: ".",
            action: Action::DecimalPoint,
        }
    }

    /// Creates an operator button captioned with the operator's glyph.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            action: Action::Operator(op),
        }
    }

    /// Creates the evaluate button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: "=",
            action: Action::Evaluate,
        }
    }
}

/// The full button layout: digit pad plus operator column.
#[derive(Debug, Clone)]
pub struct Keypad {
    pad: Vec<KeypadButton>,
    operators: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Columns in the digit pad.
    pub const PAD_COLUMNS: usize = 3;

    /// Creates the standard layout.
    #[must_use]
    pub fn new() -> Self {
        let pad = vec![
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::sign(),
            KeypadButton::digit(0),
            KeypadButton::decimal(),
        ];
        let operators = vec![
            KeypadButton::operator(Operator::Add),
            KeypadButton::operator(Operator::Subtract),
            KeypadButton::operator(Operator::Multiply),
            KeypadButton::operator(Operator::Divide),
            KeypadButton::equals(),
        ];
        Self { pad, operators }
    }

    /// Buttons of the digit pad in row-major order.
    pub fn pad(&self) -> impl Iterator<Item = &KeypadButton> {
        self.pad.iter()
    }

    /// Buttons of the operator column, top to bottom.
    pub fn operator_column(&self) -> impl Iterator<Item = &KeypadButton> {
        self.operators.iter()
    }

    /// Total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.pad.len() + self.operators.len()
    }

    /// A digit-pad button by row and column.
    #[must_use]
    pub fn pad_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if col < Self::PAD_COLUMNS {
            self.pad.get(row * Self::PAD_COLUMNS + col)
        } else {
            None
        }
    }

    /// Finds a button by its caption, searching the pad then the column.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.pad
            .iter()
            .chain(self.operators.iter())
            .find(|b| b.label == label)
    }

    /// Maps a keyboard character to the action it triggers: digits, `.`,
    /// the operator characters (ASCII or glyph), `=`, `c`/`C` for clear
    /// and `n` or `±` for the sign toggle.
    #[must_use]
    pub fn action_for_char(c: char) -> Option<Action> {
        if let Some(d) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
            return Some(Action::Digit(d));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Action::Operator(op));
        }
        match c {
            '.' => Some(Action::DecimalPoint),
            '=' => Some(Action::Evaluate),
            'n' | '±' => Some(Action::ToggleSign),
            'c' | 'C' => Some(Action::Clear),
            _ => None,
        }
    }
}
