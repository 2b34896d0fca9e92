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

//! STM32H7 register and field tables for [`pw_regs`].
//!
//! Addresses and bit positions follow RM0433 (STM32H742/743/750/753).  Names
//! follow the reference manual too: `PERIPH_REG` for a single register,
//! `PERIPH_REG_FIELD` for a field, and an `x` in place of the instance number
//! for tables indexed by instance (`SPIx_CFG1[2]` is `SPI2_CFG1`).
//!
//! Tables use the hardware's own numbering, so `SPIx_*[0]` and `DMAx_*[0]`
//! are empty slots rather than aliases of instance 1.
//!
//! ```
//! use pw_regs::SimBus;
//! use pw_regs_stm32h7::spi::{SPIx_CFG1, SPIx_CFG1_MBR};
//!
//! let cfg1 = SPIx_CFG1[2];
//! let bus = SimBus::<1>::filled(cfg1.addr(), 0x0007_0007);
//! cfg1.on(&bus).write_field(SPIx_CFG1_MBR, 0b110);
//! assert_eq!(bus.peek(cfg1.addr()), 0x6007_0007);
//! ```
//!
//! Only a representative subset of the memory map is present.  Each module
//! exports `FIELDS`, the descriptors it defines, so their invariants can be
//! checked table wide.
#![no_std]
#![allow(non_upper_case_globals)]

pub mod dbgmcu;
pub mod dma;
pub mod gpio;
pub mod iwdg;
pub mod rcc;
pub mod spi;

use pw_regs::{Access, Field, Instances, Reg};

/// Table of `N` copies of `first`, one every `stride` bits.
pub(crate) const fn repeated<const N: usize>(first: Field, stride: u32) -> Instances<Field, N> {
    let mut slots = [None; N];
    let mut i = 0;
    while i < N {
        slots[i] = Some(first.nth(i as u32, stride));
        i += 1;
    }
    Instances::new(slots)
}

/// Table of the register at `offset` in each of `N` peripheral instances laid
/// out every `stride` bytes from `base`.
pub(crate) const fn strided<A: Access, const N: usize>(
    base: usize,
    stride: usize,
    offset: usize,
) -> Instances<Reg<A>, N> {
    let mut slots = [None; N];
    let mut i = 0;
    while i < N {
        // SAFETY: Callers pass peripheral bases and offsets from RM0433.
        slots[i] = Some(unsafe { Reg::new(base + i * stride + offset) });
        i += 1;
    }
    Instances::new(slots)
}
