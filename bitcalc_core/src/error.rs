// SPDX-License-Identifier: GPL-3.0
// error.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use thiserror::Error;

/// This enum represents all possible failures raised by the calculator core.
/// The display texts are the messages shown to the user by front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {

    /// Raised when constructing a number with an unsupported bit width.
    #[error("Invalid binary number size. Allowed sizes: 8, 16, 32.")]
    InvalidWidth(usize),

    /// Raised when addition carries out of the sign position, or when the
    /// multiplication sign check trips.
    #[error("Overflow occurred during {operation}.")]
    Overflow { operation: &'static str },

    /// Raised when popping from an empty operand stack.
    #[error("Stack is empty.")]
    StackUnderflow,

    /// Raised when an evaluation completes without producing a result, or
    /// when an operand token cannot be read as a decimal number.
    #[error("Invalid expression.")]
    InvalidExpression,

    /// Raised when dispatching an operation character outside the
    /// supported set.
    #[error("Invalid operation. Allowed operations: +, -, *.")]
    InvalidOperation(char),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
