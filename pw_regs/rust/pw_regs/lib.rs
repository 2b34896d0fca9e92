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

//! # pw_regs
//!
//! Typed access to 32-bit memory-mapped registers and the bitfields inside
//! them.
//!
//! * A [`Reg`] is a handle to one register.  Its access mode is part of the
//!   type ([`RoReg`], [`RwReg`], [`WoReg`]), so writing a read-only register
//!   does not compile.
//! * A [`Field`] is a `{mask, position}` descriptor for a contiguous bit range.
//!   It is independent of any register and is reused across instances.
//! * [`read_register`], [`write_register`], [`read_field`] and
//!   [`write_field`] are the primitive operations; every register handle also
//!   offers them as methods.
//!
//! ```
//! use pw_regs::{Field, RwReg, SimBus};
//!
//! const CTRL: RwReg = unsafe { RwReg::new(0x4000_0000) };
//! const MODE: Field = Field::new(0x0000_0300, 8);
//!
//! // On hardware: `CTRL.write_field(MODE, 0b01)`.  On the host, resolve the
//! // register against a simulated bus instead.
//! let bus = SimBus::<1>::filled(0x4000_0000, 0xffff_ffff);
//! CTRL.on(&bus).write_field(MODE, 0b01);
//! assert_eq!(bus.peek(0x4000_0000), 0xffff_fdff);
//! assert_eq!(CTRL.on(&bus).read_field(MODE), 0b01);
//! ```
//!
//! Writes to a read-only register are rejected at compile time:
//!
//! ```compile_fail,E0599
//! use pw_regs::RoReg;
//!
//! const STATUS: RoReg = unsafe { RoReg::new(0x4000_0014) };
//! STATUS.write(0);
//! ```
//!
//! ```compile_fail,E0599
//! use pw_regs::{Field, RoReg, SimBus};
//!
//! const STATUS: RoReg = unsafe { RoReg::new(0x4000_0014) };
//! let bus = SimBus::<8>::new(0x4000_0000);
//! STATUS.on(&bus).write_field(Field::bit(0), 1);
//! ```
//!
//! ```compile_fail,E0277
//! use pw_regs::{write_register, RoReg};
//!
//! const STATUS: RoReg = unsafe { RoReg::new(0x4000_0014) };
//! write_register(STATUS, 0);
//! ```
//!
//! Read-modify-write needs a readable register, so write-only registers only
//! accept whole-register stores:
//!
//! ```compile_fail,E0599
//! use pw_regs::{Field, WoReg};
//!
//! const CLEAR: WoReg = unsafe { WoReg::new(0x4000_0008) };
//! CLEAR.write_field(Field::bit(5), 1);
//! ```
//!
//! # Ordering and concurrency
//!
//! Every access is a single volatile load or store.  No barrier is inserted
//! between accesses to different registers; call [`barrier`] where one access
//! must complete before another (e.g. enabling a peripheral clock before
//! configuring the peripheral).
//!
//! Field writes are read-modify-write sequences and are not atomic with
//! respect to interrupt handlers or other cores.  See [`OnBus::modify`].
#![cfg_attr(not(test), no_std)]

pub mod access;
mod bus;
pub mod config;
mod field;
mod instances;
mod register;

pub use access::{Access, ReadOnly, ReadWrite, Readable, Writable, WriteOnly};
pub use bus::{Bus, Mmio, SimBus};
pub use field::Field;
pub use instances::Instances;
pub use pw_status::{Error, Result, StatusCode};
pub use register::{OnBus, Reg, RoReg, RwReg, WoReg};

/// Single volatile load of `reg`.
#[inline]
pub fn read_register<A: Readable>(reg: Reg<A>) -> u32 {
    reg.read()
}

/// Single volatile store of `value` to `reg`, replacing its previous contents.
#[inline]
pub fn write_register<A: Writable>(reg: Reg<A>, value: u32) {
    reg.write(value)
}

/// `(read_register(reg) & field.mask()) >> field.position()`.
#[inline]
pub fn read_field<A: Readable>(reg: Reg<A>, field: Field) -> u32 {
    reg.read_field(field)
}

/// Read-modify-write of `field` in `reg`; see [`OnBus::write_field`].
#[inline]
pub fn write_field<A: Readable + Writable>(reg: Reg<A>, field: Field, value: u32) {
    reg.write_field(field, value)
}

/// Read-modify-write setting every bit of `field`.
#[inline]
pub fn set_field<A: Readable + Writable>(reg: Reg<A>, field: Field) {
    reg.set_field(field)
}

/// Read-modify-write clearing every bit of `field`.
#[inline]
pub fn clear_field<A: Readable + Writable>(reg: Reg<A>, field: Field) {
    reg.clear_field(field)
}

/// Wait for all outstanding memory accesses to complete before continuing.
///
/// On Cortex-M this is a `DSB` followed by an `ISB`.  Elsewhere it is a
/// sequentially consistent fence.
#[inline]
pub fn barrier() {
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    {
        cortex_m::asm::dsb();
        cortex_m::asm::isb();
    }
    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    core::sync::atomic::fence(core::sync::atomic::Ordering::SeqCst);
}

/// Declare a read-only register constant.
#[macro_export]
macro_rules! ro_reg {
    ($name:ident, $addr:expr, $doc:expr) => {
        #[doc = $doc]
        // SAFETY: Register table addresses come from the reference manual.
        pub const $name: $crate::RoReg = unsafe { $crate::RoReg::new($addr) };
    };
}

/// Declare a read-write register constant.
#[macro_export]
macro_rules! rw_reg {
    ($name:ident, $addr:expr, $doc:expr) => {
        #[doc = $doc]
        // SAFETY: Register table addresses come from the reference manual.
        pub const $name: $crate::RwReg = unsafe { $crate::RwReg::new($addr) };
    };
}

/// Declare a write-only register constant.
#[macro_export]
macro_rules! wo_reg {
    ($name:ident, $addr:expr, $doc:expr) => {
        #[doc = $doc]
        // SAFETY: Register table addresses come from the reference manual.
        pub const $name: $crate::WoReg = unsafe { $crate::WoReg::new($addr) };
    };
}

/// Declare a field constant from reference manual bit numbers.
///
/// `field!(NAME, bit, "doc")` declares a single bit field and
/// `field!(NAME, start, end, "doc")` one covering `start..=end`.
#[macro_export]
macro_rules! field {
    ($name:ident, $bit:expr, $doc:expr) => {
        #[doc = $doc]
        pub const $name: $crate::Field = $crate::Field::bit($bit);
    };
    ($name:ident, $start:expr, $end:expr, $doc:expr) => {
        #[doc = $doc]
        pub const $name: $crate::Field = $crate::Field::bits($start, $end);
    };
}

/// Operations on raw register values.
///
/// [`Field`] is built on these; they are public for code that holds a bare
/// mask, such as one taken from a vendor header.
pub mod ops {
    /// Mask covering bits `start..=end`.
    #[inline]
    pub const fn mask(start: u32, end: u32) -> u32 {
        let length = end - start + 1;
        (((1u64 << length) - 1) as u32) << start
    }

    /// The bits of `value` under `mask`, shifted down by `shift`.
    #[inline]
    pub const fn extract(value: u32, mask: u32, shift: u32) -> u32 {
        (value & mask) >> shift
    }

    /// `value` with the bits under `mask` replaced by `field_value << shift`.
    ///
    /// Bits of `field_value` that land outside `mask` are dropped.
    #[inline]
    pub const fn insert(value: u32, mask: u32, shift: u32, field_value: u32) -> u32 {
        (value & !mask) | ((field_value << shift) & mask)
    }
}
