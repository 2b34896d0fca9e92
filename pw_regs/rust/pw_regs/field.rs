// Copyright 2025 The Pigweed Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

use pw_status::{Error, Result};

use crate::ops;

/// A contiguous bit range within a 32-bit register value.
///
/// `mask` is already shifted into place and `position` is the shift that
/// aligns the field's value to bit 0.  Every `Field` upholds:
///
/// * `mask != 0`
/// * the lowest set bit of `mask` is bit `position`, so
///   `(mask >> position) << position == mask`
/// * the set bits of `mask` form a single run
///
/// A descriptor does not know which register it belongs to; the same
/// descriptor is applied to every instance of a peripheral.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    mask: u32,
    position: u32,
}

impl Field {
    /// Create a descriptor from a positioned mask and its shift.
    ///
    /// Panics if the pair is inconsistent.  In a `const` item this is a
    /// compile error, which is how register tables are checked.
    #[track_caller]
    pub const fn new(mask: u32, position: u32) -> Self {
        match Self::try_new(mask, position) {
            Ok(field) => field,
            Err(_) => panic!("inconsistent field mask/position"),
        }
    }

    /// Create a descriptor, returning [`Error::InvalidArgument`] if the pair
    /// is inconsistent.
    pub const fn try_new(mask: u32, position: u32) -> Result<Self> {
        if mask == 0 || position >= u32::BITS || mask.trailing_zeros() != position {
            return Err(Error::InvalidArgument);
        }
        // Right aligned, a contiguous run of ones plus one is a power of two
        // (or wraps to zero for a full width field).
        let value_mask = mask >> position;
        if value_mask & value_mask.wrapping_add(1) != 0 {
            return Err(Error::InvalidArgument);
        }
        Ok(Self { mask, position })
    }

    /// Field covering bits `start..=end`, as numbered in the reference manual.
    #[track_caller]
    pub const fn bits(start: u32, end: u32) -> Self {
        assert!(start <= end && end < u32::BITS, "field bits out of range");
        Self::new(ops::mask(start, end), start)
    }

    /// Single bit field.
    #[track_caller]
    pub const fn bit(bit: u32) -> Self {
        Self::bits(bit, bit)
    }

    /// The `index`-th copy of this field when a register packs identical
    /// fields every `stride` bits (e.g. two `MODER` bits per GPIO pin).
    #[track_caller]
    pub const fn nth(self, index: u32, stride: u32) -> Self {
        match self.try_nth(index, stride) {
            Ok(field) => field,
            Err(_) => panic!("repeated field does not fit in the register"),
        }
    }

    /// Fallible form of [`Field::nth`].
    pub const fn try_nth(self, index: u32, stride: u32) -> Result<Self> {
        let shift = match index.checked_mul(stride) {
            Some(shift) => shift,
            None => return Err(Error::OutOfRange),
        };
        if shift >= u32::BITS || self.mask.leading_zeros() < shift {
            return Err(Error::OutOfRange);
        }
        Ok(Self {
            mask: self.mask << shift,
            position: self.position + shift,
        })
    }

    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    #[inline]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Number of bits in the field.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max_value(&self) -> u32 {
        self.mask >> self.position
    }

    /// Whether `value` can be stored without truncation.
    #[inline]
    pub const fn fits(&self, value: u32) -> bool {
        value <= self.max_value()
    }

    /// Read this field out of a full register value, right aligned.
    #[inline]
    pub const fn extract(&self, register_value: u32) -> u32 {
        ops::extract(register_value, self.mask, self.position)
    }

    /// Replace this field in a full register value.
    ///
    /// Bits of `value` that do not fit in the field are discarded.
    #[inline]
    pub const fn insert(&self, register_value: u32, value: u32) -> u32 {
        ops::insert(register_value, self.mask, self.position, value)
    }

    /// Replace this field in a full register value, or return
    /// [`Error::OutOfRange`] if `value` does not fit.
    #[inline]
    pub const fn try_insert(&self, register_value: u32, value: u32) -> Result<u32> {
        if !self.fits(value) {
            return Err(Error::OutOfRange);
        }
        Ok(self.insert(register_value, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_matches_reference_manual_numbering() {
        let field = Field::bits(8, 9);
        assert_eq!(field.mask(), 0x0000_0300);
        assert_eq!(field.position(), 8);
        assert_eq!(field.width(), 2);
        assert_eq!(field.max_value(), 0b11);
    }

    #[test]
    fn full_width_field_is_valid() {
        let field = Field::new(0xffff_ffff, 0);
        assert_eq!(field.width(), 32);
        assert_eq!(field.max_value(), u32::MAX);
        assert_eq!(field.insert(0, 0x1234_5678), 0x1234_5678);
    }

    #[test]
    fn top_bit_field_is_valid() {
        let field = Field::bit(31);
        assert_eq!(field.mask(), 0x8000_0000);
        assert_eq!(field.extract(0x8000_0000), 1);
    }

    #[test]
    fn zero_mask_is_rejected() {
        assert_eq!(Field::try_new(0, 0), Err(Error::InvalidArgument));
    }

    #[test]
    fn position_must_match_lowest_mask_bit() {
        assert_eq!(Field::try_new(0x0000_0300, 9), Err(Error::InvalidArgument));
        assert_eq!(Field::try_new(0x0000_0300, 7), Err(Error::InvalidArgument));
        assert_eq!(Field::try_new(0x0000_0300, 32), Err(Error::InvalidArgument));
    }

    #[test]
    fn non_contiguous_mask_is_rejected() {
        assert_eq!(Field::try_new(0x0000_0500, 8), Err(Error::InvalidArgument));
    }

    #[test]
    #[should_panic]
    fn new_panics_on_inconsistent_pair() {
        let _ = Field::new(0x0000_00f0, 0);
    }

    #[test]
    fn extract_right_aligns_value() {
        let field = Field::new(0x00ff_0000, 16);
        assert_eq!(field.extract(0x0001_0203), 0x01);
    }

    #[test]
    fn insert_preserves_other_bits() {
        let field = Field::new(0x0000_0300, 8);
        assert_eq!(field.insert(0xffff_ffff, 0b01), 0xffff_fdff);
    }

    #[test]
    fn insert_truncates_wide_values() {
        let field = Field::new(0x0000_0300, 8);
        assert_eq!(field.insert(0, 0b111), 0x0000_0300);
        assert_eq!(field.insert(0, 0b100), 0);
    }

    #[test]
    fn try_insert_rejects_wide_values() {
        let field = Field::bits(8, 9);
        assert_eq!(field.try_insert(0, 4), Err(Error::OutOfRange));
        assert_eq!(field.try_insert(0, 3), Ok(0x0000_0300));
    }

    #[test]
    fn nth_steps_by_stride() {
        let pin_mode = Field::bits(0, 1);
        assert_eq!(pin_mode.nth(0, 2), pin_mode);
        assert_eq!(pin_mode.nth(5, 2), Field::bits(10, 11));
        assert_eq!(pin_mode.nth(15, 2), Field::bits(30, 31));
    }

    #[test]
    fn nth_past_register_end_is_out_of_range() {
        let pin_mode = Field::bits(0, 1);
        assert_eq!(pin_mode.try_nth(16, 2), Err(Error::OutOfRange));
        assert_eq!(Field::bit(31).try_nth(1, 1), Err(Error::OutOfRange));
        assert_eq!(pin_mode.try_nth(u32::MAX, 2), Err(Error::OutOfRange));
    }
}
