//! Property-based tests for the entry state machine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use tallypad::prelude::*;

// ===== Strategy definitions =====

/// One press on the entry side of the pad.
#[derive(Debug, Clone, Copy)]
enum Press {
    Digit(u8),
    Sign,
    Dot,
}

fn press_strategy() -> impl Strategy<Value = Press> {
    prop_oneof![
        (0u8..=9).prop_map(Press::Digit),
        Just(Press::Sign),
        Just(Press::Dot),
    ]
}

fn built_entry_state(presses: &[Press]) -> EngineState {
    presses.iter().fold(EngineState::new(), |state, press| {
        match press {
            Press::Digit(d) => state.input_digit(*d).unwrap_or(state),
            Press::Sign => state.toggle_sign(),
            Press::Dot => state.toggle_decimal_point(),
        }
    })
}

/// Replays an entry label digit by digit: magnitude first, sign last.
fn replay_label(label: &str) -> EngineState {
    let magnitude = label.strip_prefix('-');
    let mut state = EngineState::new();
    for c in magnitude.unwrap_or(label).chars() {
        state = match c {
            '.' => state.toggle_decimal_point(),
            d => {
                let digit = u8::try_from(d.to_digit(10).unwrap()).unwrap();
                state.input_digit(digit).unwrap()
            }
        };
    }
    if magnitude.is_some() {
        state = state.toggle_sign();
    }
    state
}

// ===== Entry properties =====

proptest! {
    /// Integer digit sequences read back as their base-10 interpretation,
    /// leading zeros collapsed.
    #[test]
    fn prop_digit_sequence_is_base10(digits in prop::collection::vec(0u8..=9, 1..20)) {
        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let mut driver = EntryDriver::new();
        driver.enter(&text);
        let expected = Decimal::from_str(&text).unwrap();
        prop_assert_eq!(driver.state().entry().value(), expected);
    }

    /// The entry label, replayed digit by digit, reproduces the value.
    #[test]
    fn prop_label_replay_reproduces_value(
        presses in prop::collection::vec(press_strategy(), 0..25),
    ) {
        let state = built_entry_state(&presses);
        let replayed = replay_label(&state.display().entry);
        prop_assert_eq!(replayed.entry().value(), state.entry().value());
    }

    /// Toggling the sign twice is the identity on the whole state.
    #[test]
    fn prop_sign_toggle_involution(
        presses in prop::collection::vec(press_strategy(), 0..15),
    ) {
        let state = built_entry_state(&presses);
        prop_assert_eq!(state.toggle_sign().toggle_sign(), state);
    }

    /// Toggling the decimal point twice with no digits in between keeps
    /// the value and leaves decimal mode.
    #[test]
    fn prop_decimal_toggle_twice_keeps_value(
        digits in prop::collection::vec(0u8..=9, 0..10),
    ) {
        let state = digits
            .iter()
            .fold(EngineState::new(), |s, &d| s.input_digit(d).unwrap());
        let toggled = state.toggle_decimal_point().toggle_decimal_point();
        prop_assert_eq!(toggled.entry().value(), state.entry().value());
        prop_assert!(!toggled.entry().is_decimal());
    }

    /// Fractional digits never exceed the configured limit.
    #[test]
    fn prop_fraction_limit_holds(
        digits in prop::collection::vec(0u8..=9, 0..40),
        limit in 1u32..=11,
    ) {
        let mut state = EngineState::with_fraction_limit(limit).toggle_decimal_point();
        for d in digits {
            state = state.input_digit(d).unwrap();
        }
        prop_assert!(state.entry().value().scale() <= limit);
    }
}

// ===== Driver robustness =====

proptest! {
    /// Any key soup leaves the driver in a displayable state: the two
    /// labels always derive and the entry label always replays.
    #[test]
    fn prop_random_keys_never_wedge_the_driver(
        keys in prop::collection::vec(
            prop::sample::select(vec![
                '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
                '.', 'n', '+', '-', '×', '÷', '*', '/', '=', 'C', 'q',
            ]),
            0..40,
        ),
    ) {
        let mut driver = EntryDriver::new();
        for key in keys {
            let _ = driver.press_char(key);
        }
        let display = driver.display();
        // Chained multiplications can push a result's scale past what the
        // pad can re-type, so only in-range entries are replayed.
        if driver.state().entry().value().scale() <= EngineState::DEFAULT_FRACTION_LIMIT {
            let replayed = replay_label(&display.entry);
            prop_assert_eq!(
                replayed.entry().value(),
                driver.state().entry().value()
            );
        }
    }
}
