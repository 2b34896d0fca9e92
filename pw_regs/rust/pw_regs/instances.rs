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

use core::ops::Index;

use pw_status::{Error, Result};

/// A table of per-instance registers or fields indexed by the hardware's
/// instance number.
///
/// Hardware numbering is rarely dense and zero based (`SPI1`..`SPI6`,
/// `DMA1`/`DMA2`), so a slot without hardware is empty rather than holding a
/// placeholder.  Lookups never wrap:
///
/// * [`Instances::get`] returns [`Error::NotFound`] for an empty slot and
///   [`Error::OutOfRange`] past the end of the table.
/// * `table[index]` panics in both cases.
#[derive(Clone, Copy, Debug)]
pub struct Instances<T: Copy, const N: usize> {
    slots: [Option<T>; N],
}

impl<T: Copy, const N: usize> Instances<T, N> {
    /// Table with one slot per index; `None` marks a missing instance.
    pub const fn new(slots: [Option<T>; N]) -> Self {
        Self { slots }
    }

    /// Build a table from `(index, value)` pairs.
    ///
    /// Panics (a compile error in a `const` item) if an index is past the end
    /// of the table or appears twice.
    #[track_caller]
    pub const fn from_entries(entries: &[(usize, T)]) -> Self {
        let mut slots = [None; N];
        let mut i = 0;
        while i < entries.len() {
            let (index, value) = entries[i];
            assert!(index < N, "instance index past the end of the table");
            assert!(slots[index].is_none(), "instance defined twice");
            slots[index] = Some(value);
            i += 1;
        }
        Self { slots }
    }

    /// Number of slots, defined or not.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// `const` form of `table[index]`, for deriving one table from another.
    #[track_caller]
    pub const fn slot(&self, index: usize) -> T {
        assert!(index < N, "instance out of range");
        match self.slots[index] {
            Some(value) => value,
            None => panic!("no hardware instance"),
        }
    }

    /// Instance `index`, [`Error::NotFound`] for a hole or
    /// [`Error::OutOfRange`] past the end of the table.
    pub fn get(&self, index: usize) -> Result<T> {
        match self.slots.get(index) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(Error::NotFound),
            None => Err(Error::OutOfRange),
        }
    }

    /// Whether the hardware has instance `index`.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Defined instances in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|value| (index, value)))
    }

    /// Number of defined instances.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy, const N: usize> Index<usize> for Instances<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.slots.get(index) {
            Some(Some(value)) => value,
            Some(None) => panic!("no hardware instance {index}"),
            None => panic!("instance {index} out of range for a table of {N}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Instances 1..=3 with index 0 and 4 unused, like a peripheral family
    // numbered from one with a gap.
    const TABLE: Instances<u32, 6> = Instances::from_entries(&[(1, 10), (2, 20), (3, 30), (5, 50)]);

    #[test]
    fn defined_slots_resolve() {
        assert_eq!(TABLE.get(1), Ok(10));
        assert_eq!(TABLE.get(5), Ok(50));
        assert_eq!(TABLE[3], 30);
    }

    #[test]
    fn empty_slot_is_not_found() {
        assert_eq!(TABLE.get(0), Err(Error::NotFound));
        assert_eq!(TABLE.get(4), Err(Error::NotFound));
        assert!(!TABLE.contains(0));
    }

    #[test]
    fn past_the_end_is_out_of_range() {
        assert_eq!(TABLE.get(6), Err(Error::OutOfRange));
        assert_eq!(TABLE.get(usize::MAX), Err(Error::OutOfRange));
    }

    #[test]
    #[should_panic(expected = "no hardware instance 0")]
    fn indexing_empty_slot_panics() {
        let _ = TABLE[0];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_past_the_end_panics() {
        let _ = TABLE[6];
    }

    #[test]
    fn iteration_skips_gaps() {
        let mut iter = TABLE.iter();
        assert_eq!(iter.next(), Some((1, 10)));
        assert_eq!(iter.next(), Some((2, 20)));
        assert_eq!(iter.next(), Some((3, 30)));
        assert_eq!(iter.next(), Some((5, 50)));
        assert_eq!(iter.next(), None);
        assert_eq!(TABLE.len(), 4);
        assert_eq!(TABLE.capacity(), 6);
    }

    #[test]
    fn slot_is_usable_in_const() {
        const THIRD: u32 = TABLE.slot(3);
        assert_eq!(THIRD, 30);
    }

    #[test]
    #[should_panic(expected = "no hardware instance")]
    fn slot_of_empty_entry_panics() {
        let _ = TABLE.slot(4);
    }

    #[test]
    #[should_panic(expected = "defined twice")]
    fn duplicate_entry_panics() {
        let _ = Instances::<u32, 2>::from_entries(&[(1, 1), (1, 2)]);
    }

    #[test]
    #[should_panic(expected = "past the end")]
    fn entry_past_the_end_panics() {
        let _ = Instances::<u32, 2>::from_entries(&[(2, 1)]);
    }
}
