use super::{OperandStack, PostfixCalculator};
use crate::error::CalcError;
use crate::number::BinaryNumber;

#[test]
fn stack_should_pop_items_in_reverse_push_order() {

    let mut stack = OperandStack::new();
    stack.push(BinaryNumber::new(1, 8).unwrap());
    stack.push(BinaryNumber::new(2, 8).unwrap());

    let output1 = stack.pop().unwrap();
    let output2 = stack.pop().unwrap();

    assert_eq!(output1.to_decimal(), 2);
    assert_eq!(output2.to_decimal(), 1);
}

#[test]
fn stack_pop_should_fail_when_empty() {

    let mut stack = OperandStack::new();
    let output = stack.pop();

    assert_eq!(output, Err(CalcError::StackUnderflow));
}

#[test]
fn stack_should_report_emptiness() {

    let mut stack = OperandStack::new();

    assert!(stack.is_empty());

    stack.push(BinaryNumber::new(1, 8).unwrap());

    assert!(!stack.is_empty());
}

#[test]
fn evaluate_should_handle_addition() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("3 4 +").unwrap();

    assert_eq!(output.to_decimal(), 7);
    assert_eq!(output.to_binary_string(), "00000111");
}

#[test]
fn evaluate_should_handle_subtraction() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("5 2 -").unwrap();

    assert_eq!(output.to_decimal(), 3);
}

#[test]
fn evaluate_should_handle_multiplication() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("6 7 *").unwrap();

    assert_eq!(output.to_decimal(), 42);
}

#[test]
fn evaluate_should_handle_compound_expressions() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("2 3 + 4 *").unwrap();

    assert_eq!(output.to_decimal(), 20);
}

#[test]
fn evaluate_should_fail_with_underflow_for_lone_operator() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("+");

    assert_eq!(output, Err(CalcError::StackUnderflow));
}

#[test]
fn evaluate_should_fail_for_empty_expression() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("");

    assert_eq!(output, Err(CalcError::InvalidExpression));
}

#[test]
fn evaluate_should_return_the_top_value_when_operands_are_left_over() {

    // Leftovers beneath the result are accepted silently, only the top of
    // the stack is returned.
    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("3 4").unwrap();

    assert_eq!(output.to_decimal(), 4);
}

#[test]
fn evaluate_should_fail_for_unsupported_width() {

    let mut calculator = PostfixCalculator::new(10);
    let output = calculator.evaluate("3 4 +");

    assert_eq!(output, Err(CalcError::InvalidWidth(10)));
}

#[test]
fn evaluate_should_still_underflow_before_width_is_checked() {

    // Width validation happens when the first operand is constructed, so a
    // lone operator underflows first even at an unsupported width.
    let mut calculator = PostfixCalculator::new(10);
    let output = calculator.evaluate("+");

    assert_eq!(output, Err(CalcError::StackUnderflow));
}

#[test]
fn evaluate_should_fail_for_unsupported_operator() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("3 4 /");

    assert_eq!(output, Err(CalcError::InvalidOperation('/')));
}

#[test]
fn evaluate_should_fail_for_unparsable_operand_token() {

    // The token starts with a digit but does not fit in an i32, so it is
    // rejected as part of the expression rather than truncated.
    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("9999999999 1 +");

    assert_eq!(output, Err(CalcError::InvalidExpression));
}

#[test]
fn evaluate_should_propagate_overflow_from_operations() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("100 100 +");

    assert_eq!(
        output,
        Err(CalcError::Overflow { operation: "addition" })
    );
}

#[test]
fn stack_underflow_error_should_display_as_empty_stack() {

    let mut calculator = PostfixCalculator::new(8);
    let output = calculator.evaluate("*").unwrap_err();

    assert_eq!(output.to_string(), "Stack is empty.");
}
