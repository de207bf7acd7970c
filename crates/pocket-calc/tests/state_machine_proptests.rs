//! Property-based tests for the input state machine
//!
//! Arbitrary button sequences must never break the display invariants.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use pocket_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => (0u8..=9u8).prop_map(InputEvent::Digit),
        1 => Just(InputEvent::DecimalPoint),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::Delete),
        1 => Just(InputEvent::ToggleSign),
    ]
}

fn events_strategy() -> impl Strategy<Value = Vec<InputEvent>> {
    prop::collection::vec(event_strategy(), 0..40)
}

fn run(events: &[InputEvent]) -> CalculationState {
    events.iter().copied().fold(CalculationState::new(), update)
}

fn is_typed_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|&c| c == '.').count() <= 1
}

proptest! {
    /// The display is never empty
    #[test]
    fn prop_display_never_empty(events in events_strategy()) {
        prop_assert!(!run(&events).display_value().is_empty());
    }

    /// Typed entries are always a well-formed number
    #[test]
    fn prop_typed_entry_is_number(events in events_strategy()) {
        let state = run(&events);
        if let Entry::Typed(text) = state.entry() {
            prop_assert!(is_typed_number(text), "bad entry {text:?}");
            prop_assert!(state.entry().number().is_ok());
        }
    }

    /// The rendered display never exceeds the configured width
    #[test]
    fn prop_display_within_width(events in events_strategy(), width in 1usize..20) {
        let config = CalculatorConfig::new().with_max_display_length(width);
        let mut calc = Calculator::with_config(config).unwrap();
        for event in events {
            let text = calc.press(event);
            prop_assert!(!text.is_empty());
            prop_assert!(text.chars().count() <= width);
            prop_assert!(calc.state().display_value().starts_with(&text));
        }
    }

    /// A second decimal point changes nothing
    #[test]
    fn prop_decimal_point_idempotent(events in events_strategy()) {
        let once = update(run(&events), InputEvent::DecimalPoint);
        let twice = update(once.clone(), InputEvent::DecimalPoint);
        prop_assert_eq!(once, twice);
    }

    /// Clear always returns the initial state
    #[test]
    fn prop_clear_resets(events in events_strategy()) {
        let state = update(run(&events), InputEvent::Clear);
        prop_assert_eq!(state, CalculationState::new());
    }

    /// Toggling the sign twice is the identity
    #[test]
    fn prop_toggle_sign_twice_identity(events in events_strategy()) {
        let state = run(&events);
        let back = update(update(state.clone(), InputEvent::ToggleSign), InputEvent::ToggleSign);
        prop_assert_eq!(state.display_value(), back.display_value());
    }

    /// A pending operator always has a first operand behind it
    #[test]
    fn prop_operator_implies_first_operand(events in events_strategy()) {
        let state = run(&events);
        if state.operator().is_some() {
            prop_assert!(state.first_operand().is_some());
        }
    }

    /// Phase agrees with the raw fields
    #[test]
    fn prop_phase_consistent(events in events_strategy()) {
        let state = run(&events);
        let expected = match (state.operator(), state.awaiting_second_operand()) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::AwaitingSecond,
            (Some(_), false) => Phase::EnteringSecond,
        };
        prop_assert_eq!(state.phase(), expected);
    }

    /// a op b = matches the arithmetic for whole-number operands
    #[test]
    fn prop_binary_operation(a in 0u32..100_000, b in 0u32..100_000, op in operator_strategy()) {
        let mut events: Vec<InputEvent> = digits(a);
        events.push(InputEvent::Operator(op));
        events.extend(digits(b));
        events.push(InputEvent::Equals);
        let state = run(&events);

        match apply(op, f64::from(a), f64::from(b)) {
            Ok(expected) => prop_assert_eq!(state.entry(), &Entry::Value(expected)),
            Err(e) => {
                prop_assert_eq!(&e, &CalcError::DivisionByZero);
                prop_assert_eq!(state.display_value(), e.display_text());
            }
        }
    }

    /// Division by zero shows the fixed message whatever the dividend
    #[test]
    fn prop_division_by_zero_message(a in 0u32..1_000_000) {
        let mut events = digits(a);
        events.extend([InputEvent::Operator(Operator::Divide), InputEvent::Digit(0), InputEvent::Equals]);
        prop_assert_eq!(run(&events).display_value(), CalcError::DivisionByZero.display_text());
    }
}

fn digits(n: u32) -> Vec<InputEvent> {
    n.to_string()
        .bytes()
        .map(|b| InputEvent::Digit(b - b'0'))
        .collect()
}
