// SPDX-License-Identifier: GPL-3.0
// calculator.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::{CalcError, Result};
use crate::number::BinaryNumber;

/// This module contains the postfix expression evaluator and its operand stack.
pub mod postfix;

/// This structure models a single-operation calculator over two fixed-width
/// operands and an operation character.
pub struct Calculator {

    // Operands, converted to binary form at construction.
    num1: BinaryNumber,
    num2: BinaryNumber,

    // Operation character, expected to be one of + - *.
    operation: char,
}

impl Calculator {

    /// Creates a new Calculator object, converting both operands at the
    /// supplied width up front - an unsupported width therefore surfaces
    /// here rather than at calculation time.
    pub fn new(
        decimal_num_1: i32,
        decimal_num_2: i32,
        width: usize,
        operation: char
    ) -> Result<Self> {
        Ok(Calculator {

            // Convert both operands.
            num1: BinaryNumber::new(decimal_num_1, width)?,
            num2: BinaryNumber::new(decimal_num_2, width)?,

            // Store the operation character as supplied, it is checked
            // when dispatched.
            operation,
        })
    }

    /// This function runs the configured operation over the two operands
    /// and returns the result.
    pub fn calculate(&self) -> Result<BinaryNumber> {
        Calculator::apply(&self.num1, &self.num2, self.operation)
    }

    /// This function dispatches an operation character over the supplied
    /// operands. Note that subtraction alone has no overflow report - see
    /// [`BinaryNumber::subtract`].
    pub fn apply(
        num1: &BinaryNumber,
        num2: &BinaryNumber,
        operation: char
    ) -> Result<BinaryNumber> {
        match operation {
            '+' => num1.add(num2),
            '-' => Ok(num1.subtract(num2)),
            '*' => num1.multiply(num2),
            _ => Err(CalcError::InvalidOperation(operation)),
        }
    }
}
