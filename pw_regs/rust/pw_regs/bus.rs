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

use core::cell::Cell;

/// The memory a register reference's address is resolved against.
///
/// Register handles carry only an address; a `Bus` performs the actual 32-bit
/// load or store.  [`Mmio`] is the hardware bus.  [`SimBus`] backs addresses
/// with plain cells so register code can run on the host.
pub trait Bus {
    /// Load the 32-bit value at `addr`.
    ///
    /// # Safety
    /// `addr` must be a 4-byte aligned register address that is valid to read
    /// on this bus.
    unsafe fn read32(&self, addr: usize) -> u32;

    /// Store a 32-bit value at `addr`.
    ///
    /// # Safety
    /// `addr` must be a 4-byte aligned register address that is valid to write
    /// on this bus.
    unsafe fn write32(&self, addr: usize, value: u32);
}

/// Memory-mapped IO: every access is a single volatile load or store.
///
/// Volatile accesses are not reordered against each other by the compiler,
/// but no hardware barrier is issued.  Use [`crate::barrier`] when an access
/// to one register must complete before an access to another.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mmio;

impl Bus for Mmio {
    #[inline]
    unsafe fn read32(&self, addr: usize) -> u32 {
        // SAFETY: The caller guarantees `addr` is a readable register.
        unsafe { (addr as *const u32).read_volatile() }
    }

    #[inline]
    unsafe fn write32(&self, addr: usize, value: u32) {
        // SAFETY: The caller guarantees `addr` is a writable register.
        unsafe { (addr as *mut u32).write_volatile(value) }
    }
}

/// `N` simulated 32-bit registers starting at `base`.
///
/// Loads and stores are counted so tests can check how many accesses an
/// operation performs.  [`SimBus::peek`] and [`SimBus::poke`] bypass the
/// counters and play the role of the hardware (or of another execution
/// context) changing a register.
///
/// Accessing an address outside the window, or one that is not 4-byte
/// aligned, panics.
pub struct SimBus<const N: usize> {
    base: usize,
    cells: [Cell<u32>; N],
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl<const N: usize> SimBus<N> {
    /// A window whose registers all start out as zero.
    pub fn new(base: usize) -> Self {
        Self::filled(base, 0)
    }

    /// A window whose registers all start out as `value`.
    pub fn filled(base: usize, value: u32) -> Self {
        Self {
            base,
            cells: core::array::from_fn(|_| Cell::new(value)),
            reads: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// One past the last simulated byte address.
    pub fn end(&self) -> usize {
        self.base + N * 4
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr < self.end() && addr % 4 == 0
    }

    #[track_caller]
    fn cell(&self, addr: usize) -> &Cell<u32> {
        assert!(addr % 4 == 0, "unaligned register address {addr:#x}");
        match addr.checked_sub(self.base).map(|offset| offset / 4) {
            Some(index) if index < N => &self.cells[index],
            _ => panic!(
                "address {addr:#x} outside simulated window {:#x}..{:#x}",
                self.base,
                self.end()
            ),
        }
    }

    /// Current contents of `addr`, without counting a read.
    #[track_caller]
    pub fn peek(&self, addr: usize) -> u32 {
        self.cell(addr).get()
    }

    /// Overwrite `addr`, without counting a write.
    #[track_caller]
    pub fn poke(&self, addr: usize, value: u32) {
        self.cell(addr).set(value)
    }

    /// Number of loads performed through [`Bus::read32`].
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of stores performed through [`Bus::write32`].
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn reset_counters(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }
}

impl<const N: usize> Bus for SimBus<N> {
    unsafe fn read32(&self, addr: usize) -> u32 {
        let value = self.cell(addr).get();
        self.reads.set(self.reads.get() + 1);
        value
    }

    unsafe fn write32(&self, addr: usize, value: u32) {
        self.cell(addr).set(value);
        self.writes.set(self.writes.get() + 1);
    }
}

impl<B: Bus + ?Sized> Bus for &B {
    #[inline]
    unsafe fn read32(&self, addr: usize) -> u32 {
        // SAFETY: Forwarded from the caller.
        unsafe { (**self).read32(addr) }
    }

    #[inline]
    unsafe fn write32(&self, addr: usize, value: u32) {
        // SAFETY: Forwarded from the caller.
        unsafe { (**self).write32(addr, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_bus_counts_accesses() {
        let bus = SimBus::<4>::new(0x4000_0000);
        unsafe {
            bus.write32(0x4000_0004, 7);
            assert_eq!(bus.read32(0x4000_0004), 7);
        }
        assert_eq!(bus.reads(), 1);
        assert_eq!(bus.writes(), 1);
        bus.reset_counters();
        assert_eq!((bus.reads(), bus.writes()), (0, 0));
    }

    #[test]
    fn peek_and_poke_are_not_counted() {
        let bus = SimBus::<2>::filled(0x100, 0xffff_ffff);
        assert_eq!(bus.peek(0x104), 0xffff_ffff);
        bus.poke(0x100, 1);
        assert_eq!(bus.peek(0x100), 1);
        assert_eq!((bus.reads(), bus.writes()), (0, 0));
    }

    #[test]
    fn window_bounds() {
        let bus = SimBus::<2>::new(0x100);
        assert!(bus.contains(0x100));
        assert!(bus.contains(0x104));
        assert!(!bus.contains(0x108));
        assert!(!bus.contains(0x0fc));
        assert!(!bus.contains(0x102));
        assert_eq!(bus.end(), 0x108);
    }

    #[test]
    #[should_panic(expected = "outside simulated window")]
    fn access_past_window_panics() {
        let bus = SimBus::<2>::new(0x100);
        bus.peek(0x108);
    }

    #[test]
    #[should_panic(expected = "outside simulated window")]
    fn access_below_window_panics() {
        let bus = SimBus::<2>::new(0x100);
        bus.peek(0x0fc);
    }

    #[test]
    #[should_panic(expected = "unaligned")]
    fn unaligned_access_panics() {
        let bus = SimBus::<2>::new(0x100);
        bus.poke(0x101, 0);
    }
}
