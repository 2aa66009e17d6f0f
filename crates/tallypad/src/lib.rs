//! Tallypad - a four-function decimal entry calculator engine.
//!
//! The crate models the arithmetic half of a desktop calculator: how a
//! sequence of button presses becomes an exact decimal number, how a
//! pending operator and its left operand are tracked, and how the two
//! display lines are derived from that state. Rendering is deliberately
//! absent; any UI can own an [`core::EngineState`] (or an
//! [`driver::EntryDriver`]) and re-render after each press.
//!
//! Arithmetic is exact decimal throughout, so `5.1 + 0.9` evaluates to
//! `6`, never `6.000000000000001`, and typed trailing zeros such as
//! `1.20` survive on the display.
//!
//! # Example
//!
//! ```rust
//! use tallypad::prelude::*;
//!
//! let mut driver = EntryDriver::new();
//! driver.enter("5+3");
//! assert_eq!(driver.display().expression, "5 +");
//!
//! let display = driver.enter("=");
//! assert_eq!(display.entry, "8");
//!
//! // Exact decimal addition strips the rounding artifact a float would keep.
//! driver.clear();
//! assert_eq!(driver.enter("5.1+0.9=").entry, "6");
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Action, DisplayState, EngineState, Entry, EntryError, EntryResult, Operator, Pending,
    };
    pub use crate::driver::EntryDriver;
    pub use crate::keypad::{Keypad, KeypadButton};
}
