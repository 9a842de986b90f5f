// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// Crate-wide lines to disable specific lints:

// Given the arithmetic here deliberately models bit-serial hardware
// algorithms rather than native integer operations, there will be no
// derived Default implementations unless needed.
#![allow(clippy::new_without_default)]

/// This module contains the fixed-width two's-complement number representation.
pub mod number;

/// This module contains the calculators which sequence number operations.
pub mod calculator;

/// This module contains the error type shared across the crate.
pub mod error;
