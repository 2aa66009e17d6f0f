//! Headless presentation-layer collaborator.
//!
//! A GUI in front of this engine holds one state value, feeds it one
//! action per button press and re-renders the two returned text fields.
//! `EntryDriver` does exactly that with no screen attached, which makes
//! it both the integration-test surface and a reference for hosts.

use crate::core::{Action, DisplayState, EngineState, EntryError};
use crate::keypad::Keypad;

/// Drives one engine state through button presses.
///
/// After a failed press (division by zero) the error is latched: every
/// press except `Clear` is ignored until the machine is reset, so the
/// display keeps showing the state that produced the error.
#[derive(Debug)]
pub struct EntryDriver {
    state: EngineState,
    keypad: Keypad,
    last_error: Option<EntryError>,
}

impl Default for EntryDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDriver {
    /// Creates a driver over a fresh engine state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(EngineState::new())
    }

    /// Creates a driver over a custom initial state.
    #[must_use]
    pub fn with_state(state: EngineState) -> Self {
        Self {
            state,
            keypad: Keypad::new(),
            last_error: None,
        }
    }

    /// Presses one button and returns the updated display.
    pub fn press(&mut self, action: Action) -> DisplayState {
        if self.last_error.is_some() && action != Action::Clear {
            return self.display();
        }
        match self.state.apply(action) {
            Ok(next) => {
                self.state = next;
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
        self.display()
    }

    /// Presses the button a keyboard character maps to. Returns `None`
    /// for characters with no button.
    pub fn press_char(&mut self, c: char) -> Option<DisplayState> {
        Keypad::action_for_char(c).map(|action| self.press(action))
    }

    /// Presses a button by its caption, e.g. `"+/-"` or `"÷"`.
    pub fn press_label(&mut self, label: &str) -> Option<DisplayState> {
        let action = self.keypad.find_by_label(label).map(|b| b.action)?;
        Some(self.press(action))
    }

    /// Feeds a whole key sequence, e.g. `"5+3="`. Whitespace and unmapped
    /// characters are skipped. Returns the final display.
    pub fn enter(&mut self, keys: &str) -> DisplayState {
        for c in keys.chars() {
            if !c.is_whitespace() {
                let _ = self.press_char(c);
            }
        }
        self.display()
    }

    /// The current display fields.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.state.display()
    }

    /// The current engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The button layout this driver presses.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The latched error, if the last accepted press failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&EntryError> {
        self.last_error.as_ref()
    }

    /// Resets the machine and releases the error latch.
    pub fn clear(&mut self) -> DisplayState {
        self.press(Action::Clear)
    }
}
