// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This crate contains useful utility functions that can be used throughout the codebase.

/// Exists to allow us to define custom trait operations on `u32`.
type CustomUInt32 = u32;

/// This trait exists to allow us to query individual bits of a value's binary
/// representation, counting from the least significant end.
pub trait BitPattern {

    /// This function should return whether the bit at the specified position is
    /// set, with position 0 being the least significant bit.
    fn bit_at(self, position: u32) -> bool;
}

impl BitPattern for CustomUInt32 {

    /// Returns the state of the bit at the specified position.
    #[inline(always)]
    fn bit_at(self, position: u32) -> bool {
        (self >> position) & 1 != 0
    }
}

#[cfg(test)]
mod tests {

    use super::BitPattern;

    #[test]
    fn bit_at_should_report_set_bits() {

        let input = 0b0000_0101_u32;

        assert!(input.bit_at(0));
        assert!(input.bit_at(2));
    }

    #[test]
    fn bit_at_should_report_clear_bits() {

        let input = 0b0000_0101_u32;

        assert!(!input.bit_at(1));
        assert!(!input.bit_at(3));
    }

    #[test]
    fn bit_at_should_work_for_the_most_significant_bit() {

        let input = 0x80000000_u32;

        assert!(input.bit_at(31));
        assert!(!input.bit_at(30));
    }

    #[test]
    fn bit_at_should_report_all_bits_of_an_all_ones_value() {

        let input = 0xFFFFFFFF_u32;

        for position in 0..32 {
            assert!(input.bit_at(position));
        }
    }
}
