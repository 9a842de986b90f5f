// SPDX-License-Identifier: GPL-3.0
// number.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::{CalcError, Result};
use bitcalc_utility::BitPattern;

/// The bit widths a BinaryNumber may be constructed with.
const SUPPORTED_WIDTHS: [usize; 3] = [8, 16, 32];

/// This structure models a signed integer as a fixed-width two's-complement
/// bit sequence, most significant bit first. Index 0 is the sign bit, and
/// the sequence always holds exactly `width` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNumber {

    // Bit storage, most significant bit first.
    bits: Vec<bool>,

    // Width in bits, one of SUPPORTED_WIDTHS.
    width: usize,
}

impl BinaryNumber {

    /// Creates a new BinaryNumber object from the supplied decimal value, at
    /// the supplied width. Values whose magnitude does not fit in the width
    /// are silently truncated to the low bits, which mirrors how a hardware
    /// register would load them - this is not an error.
    pub fn new(decimal_number: i32, width: usize) -> Result<Self> {

        if !SUPPORTED_WIDTHS.contains(&width) {
            return Err(CalcError::InvalidWidth(width));
        }

        // Write the low bits of the magnitude into the sequence, most
        // significant bit first. unsigned_abs also keeps i32::MIN safe.
        let magnitude = decimal_number.unsigned_abs();
        let mut bits = vec![false; width];
        for i in 0..width {
            bits[width - 1 - i] = magnitude.bit_at(i as u32);
        }

        // Apply two's-complement negation for negative values: invert every
        // bit, then add one, stopping the carry at the first bit that flips
        // from 0 to 1.
        if decimal_number < 0 {
            for bit in bits.iter_mut() {
                *bit = !*bit;
            }
            for i in (0..width).rev() {
                if !bits[i] {
                    bits[i] = true;
                    break;
                }
                bits[i] = false;
            }
        }

        Ok(BinaryNumber { bits, width })
    }

    /// Wraps an already-computed bit sequence. Only arithmetic results are
    /// built this way, so the width has been validated beforehand.
    fn from_bits(bits: Vec<bool>) -> Self {

        let width = bits.len();

        BinaryNumber { bits, width }
    }

    /// This function returns the width of the number in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// This function converts the bit sequence back to a native decimal
    /// value. The sign bit is excluded from the magnitude sum in both
    /// branches - for negative numbers its inverted value is zero, and for
    /// non-negative numbers it is zero already, so no value is lost.
    pub fn to_decimal(&self) -> i32 {

        let mut decimal_number: i32 = 0;

        if self.bits[0] {

            // Invert the non-sign bits and add one for negative numbers. The
            // negation goes through i64 so the width-32 minimum cannot
            // overflow the intermediate sum.
            for i in 1..self.width {
                decimal_number |= ((!self.bits[i]) as i32) << (self.width - 1 - i);
            }

            (-(decimal_number as i64 + 1)) as i32
        } else {

            for i in 1..self.width {
                decimal_number |= (self.bits[i] as i32) << (self.width - 1 - i);
            }

            decimal_number
        }
    }

    /// This function renders the bit sequence as a string of 0/1 characters,
    /// most significant bit first.
    pub fn to_binary_string(&self) -> String {
        self.bits
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }

    /// This function performs ripple-carry addition with the supplied number,
    /// least significant bit to most significant bit. A carry out of the sign
    /// position is reported as an overflow, and no partial result is returned
    /// in that case. Both numbers must share the same width.
    pub fn add(&self, other: &BinaryNumber) -> Result<BinaryNumber> {

        let mut carry = 0;
        let mut result_bits = vec![false; self.width];

        for i in (0..self.width).rev() {
            let sum = self.bits[i] as i32 + other.bits[i] as i32 + carry;
            result_bits[i] = sum & 1 != 0;
            carry = sum >> 1;
        }

        if carry != 0 {
            return Err(CalcError::Overflow { operation: "addition" });
        }

        Ok(BinaryNumber::from_bits(result_bits))
    }

    /// This function performs ripple-borrow subtraction of the supplied
    /// number from this one. Unlike addition, no overflow is ever reported:
    /// unrepresentable differences silently wrap. Both numbers must share
    /// the same width.
    pub fn subtract(&self, other: &BinaryNumber) -> BinaryNumber {

        let mut borrow = false;
        let mut result_bits = vec![false; self.width];

        for i in (0..self.width).rev() {
            result_bits[i] = self.bits[i] ^ other.bits[i] ^ borrow;
            borrow = (!self.bits[i] && borrow)
                || (!self.bits[i] && other.bits[i])
                || (other.bits[i] && borrow);
        }

        BinaryNumber::from_bits(result_bits)
    }

    /// This function performs shift-and-add multiplication with the supplied
    /// number, iterating the multiplier's bits from most significant to
    /// least significant. Additions along the way may themselves report
    /// overflow. Afterwards, overflow is reported when the result's sign
    /// matches neither operand's sign - a heuristic check rather than a
    /// precise range check. Both numbers must share the same width.
    pub fn multiply(&self, other: &BinaryNumber) -> Result<BinaryNumber> {

        let mut result = BinaryNumber::from_bits(vec![false; self.width]);
        let mut shifted = self.clone();

        for i in (0..self.width).rev() {
            if other.bits[i] {
                result = result.add(&shifted)?;
            }
            shifted = shifted.shift_left();
        }

        if result.bits[0] != self.bits[0] && result.bits[0] != other.bits[0] {
            return Err(CalcError::Overflow { operation: "multiplication" });
        }

        Ok(result)
    }

    /// Shifts the bit sequence one position toward the most significant end,
    /// discarding the evicted bit and filling the least significant position
    /// with zero. Used by multiplication only.
    fn shift_left(&self) -> BinaryNumber {

        let mut shifted = self.clone();
        for i in 0..self.width - 1 {
            shifted.bits[i] = shifted.bits[i + 1];
        }
        shifted.bits[self.width - 1] = false;

        shifted
    }
}
