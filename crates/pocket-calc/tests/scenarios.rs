//! End-to-end button scenarios, driven through the keypad and mock DOM

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use pocket_calc::prelude::*;

fn display_after(labels: &str) -> String {
    WasmDriver::new().press_labels(labels)
}

#[test]
fn scenario_addition() {
    assert_eq!(display_after("5 + 3 ="), "8");
}

#[test]
fn scenario_division_by_zero() {
    assert_eq!(
        display_after("6 ÷ 0 ="),
        CalcError::DivisionByZero.display_text()
    );
}

#[test]
fn scenario_delete() {
    let mut driver = WasmDriver::new();
    assert_eq!(driver.press_labels("1 2 DEL"), "1");
    assert_eq!(driver.press_labels("DEL"), "0");
}

#[test]
fn scenario_toggle_sign() {
    let mut driver = WasmDriver::new();
    assert_eq!(driver.press_labels("5 +/-"), "-5");
    assert_eq!(driver.press_labels("+/-"), "5");
}

#[test]
fn scenario_operator_replaced_before_second_operand() {
    assert_eq!(display_after("9 + × 2 ="), "18");
}

#[test]
fn scenario_chained_operators_evaluate_left_to_right() {
    // no precedence: (2 + 3) × 4
    assert_eq!(display_after("2 + 3 × 4 ="), "20");
}

#[test]
fn scenario_result_feeds_next_calculation() {
    assert_eq!(display_after("5 + 3 = − 1 ="), "7");
}

#[test]
fn scenario_new_digit_after_result_starts_fresh() {
    assert_eq!(display_after("5 + 3 = 4 + 1 ="), "5");
}

#[test]
fn scenario_recovers_after_error() {
    assert_eq!(display_after("6 ÷ 0 = 2 × 3 ="), "6");
}

#[test]
fn scenario_decimal_second_operand() {
    assert_eq!(display_after("1 + . 5 ="), "1.5");
}

#[test]
fn scenario_long_result_is_truncated_not_rounded() {
    assert_eq!(display_after("2 ÷ 3 ="), "0.6666666666");
}

#[test]
fn scenario_custom_display_width() {
    let config = CalculatorConfig::new().with_max_display_length(3);
    let mut driver = WasmDriver::with_config(config).unwrap();
    assert_eq!(driver.press_labels("1 2 3 4 5"), "123");
    assert_eq!(driver.press_labels("+ 1 ="), "123");
    assert_eq!(driver.calculator().state().first_operand(), Some(12346.0));
}

#[test]
fn scenario_clear_after_anything_is_initial() {
    let mut calc = Calculator::new();
    for label in "7 . 2 × +/- 3 DEL 9 = AC".split_whitespace() {
        calc.press(InputEvent::from_label(label).unwrap());
    }
    assert_eq!(calc.state(), &CalculationState::new());
    assert_eq!(calc.display(), "0");
}
