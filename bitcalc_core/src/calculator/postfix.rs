// SPDX-License-Identifier: GPL-3.0
// postfix.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use log::debug;

use super::Calculator;
use crate::error::{CalcError, Result};
use crate::number::BinaryNumber;

/// This structure is a last-in-first-out container of operands for the
/// postfix evaluator. There is no capacity limit.
pub struct OperandStack {

    // Item storage - the end of the Vec is the top of the stack.
    items: Vec<BinaryNumber>,
}

impl OperandStack {

    /// Creates a new OperandStack object with no items.
    pub fn new() -> Self {
        OperandStack {
            items: Vec::new(),
        }
    }

    /// This function pushes an operand onto the top of the stack.
    pub fn push(&mut self, number: BinaryNumber) {
        self.items.push(number);
    }

    /// This function pops the top operand off the stack, failing when the
    /// stack is empty.
    pub fn pop(&mut self) -> Result<BinaryNumber> {
        self.items.pop().ok_or(CalcError::StackUnderflow)
    }

    /// This function reports whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// This structure evaluates whitespace-separated postfix expressions, with
/// every operand and result bound to a single width.
pub struct PostfixCalculator {

    // Operand stack used during evaluation.
    stack: OperandStack,

    // Width applied to every number constructed during evaluation.
    width: usize,
}

impl PostfixCalculator {

    /// Creates a new PostfixCalculator object bound to the supplied width.
    /// The width itself is validated when the first operand is constructed.
    pub fn new(width: usize) -> Self {
        PostfixCalculator {

            // Start with an empty stack.
            stack: OperandStack::new(),

            // Store the bound width.
            width,
        }
    }

    /// This function evaluates the supplied postfix expression and returns
    /// the top of the stack once every token has been consumed. A token is
    /// an operand when its first character is an ASCII digit, and an
    /// operator otherwise - operators are identified by their first
    /// character alone. Operands left on the stack beneath the result are
    /// accepted silently.
    pub fn evaluate(&mut self, expression: &str) -> Result<BinaryNumber> {

        for token in expression.split_whitespace() {

            // split_whitespace never yields an empty token.
            let first_char = match token.chars().next() {
                Some(character) => character,
                None => continue,
            };

            if first_char.is_ascii_digit() {

                // Operand token - convert to binary form and push.
                let decimal_number = token
                    .parse::<i32>()
                    .map_err(|_| CalcError::InvalidExpression)?;

                debug!("Pushing operand {} onto the stack", decimal_number);
                self.stack.push(BinaryNumber::new(decimal_number, self.width)?);
            } else {

                // Operator token - the first pop is the right operand.
                let num2 = self.stack.pop()?;
                let num1 = self.stack.pop()?;

                debug!("Applying operation '{}'", first_char);
                self.stack.push(Calculator::apply(&num1, &num2, first_char)?);
            }
        }

        if self.stack.is_empty() {
            return Err(CalcError::InvalidExpression);
        }

        self.stack.pop()
    }
}

#[cfg(test)]
mod tests;
