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

use core::fmt;
use core::marker::PhantomData;

use pw_log::debug_if;
use pw_status::{Error, Result};

use crate::access::{Access, ReadOnly, ReadWrite, Readable, Writable, WriteOnly};
use crate::bus::{Bus, Mmio};
use crate::config::{RegsConfig, RegsConfigInterface as _};
use crate::field::Field;

/// Handle to one 32-bit memory-mapped register.
///
/// The access mode `A` decides which operations exist: loads need
/// [`Readable`], stores need [`Writable`], and read-modify-write needs both.
/// A handle is just an address, so it is `Copy` and is normally declared as a
/// `const` item in a register table.
pub struct Reg<A: Access> {
    addr: usize,
    _access: PhantomData<A>,
}

/// Read-only register.
pub type RoReg = Reg<ReadOnly>;
/// Read-write register.
pub type RwReg = Reg<ReadWrite>;
/// Write-only register.
pub type WoReg = Reg<WriteOnly>;

impl<A: Access> Reg<A> {
    /// Create a handle to the register at `addr`.
    ///
    /// # Safety
    /// `addr` must be the 4-byte aligned address of a 32-bit register that
    /// stays valid to access with mode `A` for the life of the program.
    pub const unsafe fn new(addr: usize) -> Self {
        Self {
            addr,
            _access: PhantomData,
        }
    }

    /// Bus address of the register.
    #[inline]
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Resolve this register against `bus` instead of real memory.
    #[inline]
    pub fn on<B: Bus>(self, bus: &B) -> OnBus<'_, A, B> {
        OnBus { reg: self, bus }
    }
}

impl<A: Access> Clone for Reg<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Access> Copy for Reg<A> {}

impl<A: Access> PartialEq for Reg<A> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl<A: Access> Eq for Reg<A> {}

impl<A: Access> fmt::Debug for Reg<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#010x})", A::NAME, self.addr)
    }
}

impl<A: Readable> Reg<A> {
    /// Single volatile load of the whole register.
    #[inline]
    pub fn read(self) -> u32 {
        self.on(&Mmio).read()
    }

    /// Value of `field`, right aligned.
    #[inline]
    pub fn read_field(self, field: Field) -> u32 {
        self.on(&Mmio).read_field(field)
    }

    /// Whether any bit of `field` is set.
    #[inline]
    pub fn is_set(self, field: Field) -> bool {
        self.on(&Mmio).is_set(field)
    }
}

impl<A: Writable> Reg<A> {
    /// Single volatile store of the whole register.
    #[inline]
    pub fn write(self, value: u32) {
        self.on(&Mmio).write(value)
    }

    /// Store `value` in `field` and zero in every other bit, without reading.
    #[inline]
    pub fn store_field(self, field: Field, value: u32) {
        self.on(&Mmio).store_field(field, value)
    }
}

impl<A: Readable + Writable> Reg<A> {
    /// See [`OnBus::modify`].
    #[inline]
    pub fn modify(self, f: impl FnOnce(u32) -> u32) {
        self.on(&Mmio).modify(f)
    }

    /// See [`OnBus::write_field`].
    #[inline]
    pub fn write_field(self, field: Field, value: u32) {
        self.on(&Mmio).write_field(field, value)
    }

    /// See [`OnBus::try_write_field`].
    #[inline]
    pub fn try_write_field(self, field: Field, value: u32) -> Result<()> {
        self.on(&Mmio).try_write_field(field, value)
    }

    /// See [`OnBus::set_field`].
    #[inline]
    pub fn set_field(self, field: Field) {
        self.on(&Mmio).set_field(field)
    }

    /// See [`OnBus::clear_field`].
    #[inline]
    pub fn clear_field(self, field: Field) {
        self.on(&Mmio).clear_field(field)
    }

    /// See [`OnBus::modify_fields`].
    #[inline]
    pub fn modify_fields(self, fields: &[(Field, u32)]) {
        self.on(&Mmio).modify_fields(fields)
    }

    /// See [`OnBus::write_field_locked`].
    #[inline]
    pub fn write_field_locked(self, field: Field, value: u32) {
        self.on(&Mmio).write_field_locked(field, value)
    }
}

/// A register bound to the [`Bus`] its accesses go through.
///
/// Obtained from [`Reg::on`].  Offers the same operations as [`Reg`], with the
/// same access-mode restrictions.
pub struct OnBus<'b, A: Access, B: Bus> {
    reg: Reg<A>,
    bus: &'b B,
}

impl<A: Access, B: Bus> OnBus<'_, A, B> {
    /// The register handle this view was made from.
    pub fn reg(&self) -> Reg<A> {
        self.reg
    }
}

impl<A: Readable, B: Bus> OnBus<'_, A, B> {
    #[inline]
    pub fn read(&self) -> u32 {
        // SAFETY: `Reg::new` requires the address to be a readable register.
        let value = unsafe { self.bus.read32(self.reg.addr) };
        debug_if!(
            RegsConfig::LOG_REGISTER_ACCESS,
            "regs: read  {:#010x} -> {:#010x}",
            self.reg.addr,
            value
        );
        value
    }

    #[inline]
    pub fn read_field(&self, field: Field) -> u32 {
        field.extract(self.read())
    }

    #[inline]
    pub fn is_set(&self, field: Field) -> bool {
        self.read() & field.mask() != 0
    }
}

impl<A: Writable, B: Bus> OnBus<'_, A, B> {
    #[inline]
    pub fn write(&self, value: u32) {
        debug_if!(
            RegsConfig::LOG_REGISTER_ACCESS,
            "regs: write {:#010x} <- {:#010x}",
            self.reg.addr,
            value
        );
        // SAFETY: `Reg::new` requires the address to be a writable register.
        unsafe { self.bus.write32(self.reg.addr, value) }
    }

    /// Store `value` in `field` and zero in every other bit.
    ///
    /// This is a plain store, not a read-modify-write, which is what
    /// write-only trigger registers such as `GPIOx_BSRR` or `DMA_LIFCR`
    /// expect.
    #[inline]
    pub fn store_field(&self, field: Field, value: u32) {
        self.write(field.insert(0, value))
    }
}

/// Read-modify-write operations.
///
/// Each of these performs exactly one load followed by one store.  They are
/// not atomic: an interrupt handler or another core that changes the same
/// register between the load and the store has its change overwritten.
/// Callers touching a register from more than one execution context must
/// serialize access themselves, e.g. with [`OnBus::write_field_locked`], or
/// use a hardware set/clear alias register.
impl<A: Readable + Writable, B: Bus> OnBus<'_, A, B> {
    /// Load the register, pass the value through `f` and store the result.
    #[inline]
    pub fn modify(&self, f: impl FnOnce(u32) -> u32) {
        let value = self.read();
        self.write(f(value));
    }

    /// Replace `field` with `value`, leaving every other bit unchanged.
    ///
    /// Bits of `value` wider than the field are dropped.
    #[inline]
    pub fn write_field(&self, field: Field, value: u32) {
        debug_if!(
            RegsConfig::LOG_FIELD_TRUNCATION && !field.fits(value),
            "regs: {:#x} truncated to {} bits writing {:#010x}",
            value,
            field.width(),
            self.reg.addr
        );
        self.modify(|old| field.insert(old, value))
    }

    /// Like [`OnBus::write_field`] but returns [`Error::OutOfRange`], without
    /// accessing the register, if `value` does not fit in `field`.
    #[inline]
    pub fn try_write_field(&self, field: Field, value: u32) -> Result<()> {
        if !field.fits(value) {
            return Err(Error::OutOfRange);
        }
        self.modify(|old| field.insert(old, value));
        Ok(())
    }

    /// Set every bit of `field`.
    #[inline]
    pub fn set_field(&self, field: Field) {
        self.modify(|old| old | field.mask())
    }

    /// Clear every bit of `field`.
    #[inline]
    pub fn clear_field(&self, field: Field) {
        self.modify(|old| old & !field.mask())
    }

    /// Replace several fields with a single load and a single store.
    ///
    /// Fields are applied in order, so a later entry wins where two overlap.
    #[inline]
    pub fn modify_fields(&self, fields: &[(Field, u32)]) {
        self.modify(|old| {
            fields
                .iter()
                .fold(old, |value, &(field, field_value)| field.insert(value, field_value))
        })
    }

    /// [`OnBus::write_field`] inside a critical section.
    ///
    /// This excludes interrupt handlers on the current core when the
    /// `critical-section` implementation masks interrupts (e.g. `cortex-m`'s
    /// `critical-section-single-core`).  It does not exclude other cores
    /// unless the selected implementation does.
    #[inline]
    pub fn write_field_locked(&self, field: Field, value: u32) {
        critical_section::with(|_cs| self.write_field(field, value))
    }
}
