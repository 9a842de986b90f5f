// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::io::{self, BufRead, Write};

// This file is the core of the basic client - it exists merely as a CLI-based
// program to prompt for operands and display results. The calculator itself
// lives in bitcalc_core.

use clap::Parser;
use bitcalc_core::{
    calculator::{Calculator, postfix::PostfixCalculator},
    number::BinaryNumber,
};

#[derive(Parser)]
#[command(
    version,
    about = "A basic CLI front-end for the bitcalc two's-complement calculator",
    long_about = None
)]
struct BitcalcArgs {
    #[arg(
        long = "postfix",
        help = "Evaluate a whitespace-separated postfix expression instead of a single operation"
    )]
    postfix: bool,
}

fn main() {
    colog::init();

    let bitcalc_args = BitcalcArgs::parse();

    let outcome = if bitcalc_args.postfix {
        run_postfix_mode()
    } else {
        run_single_mode()
    };

    // Failures are reported as text and the process still returns normally.
    match outcome {
        Ok(result) => {
            println!("Binary Result: {}", result.to_binary_string());
            println!("Decimal Result: {}", result.to_decimal());
        },
        Err(message) => {
            log::error!("{message}");
        },
    }
}

/// Prompts for a width and two decimal operands plus an operation character,
/// then runs a single calculation.
fn run_single_mode() -> Result<BinaryNumber, String> {

    let width = read_width()?;
    let decimal_num_1 = read_decimal("Enter the first decimal number: ")?;
    let decimal_num_2 = read_decimal("Enter the second decimal number: ")?;

    let operation_line = read_line("Enter the operation (+, -, *): ")?;
    let operation = operation_line
        .chars()
        .next()
        .ok_or_else(|| String::from("Please enter an operation."))?;

    let calculator = Calculator::new(decimal_num_1, decimal_num_2, width, operation)
        .map_err(|error| error.to_string())?;

    calculator.calculate().map_err(|error| error.to_string())
}

/// Prompts for a width and a single line holding a postfix expression, then
/// evaluates it.
fn run_postfix_mode() -> Result<BinaryNumber, String> {

    let width = read_width()?;
    let expression = read_line("Enter the postfix expression: ")?;

    let mut calculator = PostfixCalculator::new(width);

    calculator
        .evaluate(&expression)
        .map_err(|error| error.to_string())
}

/// Prompts for and reads the binary number width. The width's membership of
/// the supported set is checked by the core, not here.
fn read_width() -> Result<usize, String> {
    read_line("Enter the binary number size (8, 16, or 32): ")?
        .parse::<usize>()
        .map_err(|_| String::from("Please enter a valid size."))
}

/// Prompts for and reads a decimal operand.
fn read_decimal(prompt: &str) -> Result<i32, String> {
    read_line(prompt)?
        .parse::<i32>()
        .map_err(|_| String::from("Please enter a valid decimal number."))
}

/// Prompts for and reads one trimmed line from standard input.
fn read_line(prompt: &str) -> Result<String, String> {

    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|error| error.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|error| error.to_string())?;

    Ok(line.trim().to_string())
}
