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

//! Serial peripheral interfaces `SPI1` through `SPI6`.
//!
//! The instances are not evenly spaced in the memory map, so the tables are
//! built from an explicit list of base addresses.  Index 0 is empty.

use pw_regs::{Access, Field, Instances, Reg, RoReg, RwReg, WoReg, field};

pub const SPI1_BASE: usize = 0x4001_3000;
pub const SPI2_BASE: usize = 0x4000_3800;
pub const SPI3_BASE: usize = 0x4000_3C00;
pub const SPI4_BASE: usize = 0x4001_3400;
pub const SPI5_BASE: usize = 0x4001_5000;
pub const SPI6_BASE: usize = 0x5800_1400;

/// Number of table slots: instances 1..=6 plus the empty slot 0.
pub const SPI_SLOTS: usize = 7;

const BASES: [(usize, usize); 6] = [
    (1, SPI1_BASE),
    (2, SPI2_BASE),
    (3, SPI3_BASE),
    (4, SPI4_BASE),
    (5, SPI5_BASE),
    (6, SPI6_BASE),
];

const fn table<A: Access>(offset: usize) -> Instances<Reg<A>, SPI_SLOTS> {
    let mut slots = [None; SPI_SLOTS];
    let mut i = 0;
    while i < BASES.len() {
        let (index, base) = BASES[i];
        // SAFETY: SPI register offsets from RM0433.
        slots[index] = Some(unsafe { Reg::new(base + offset) });
        i += 1;
    }
    Instances::new(slots)
}

/// Control register 1.
pub const SPIx_CR1: Instances<RwReg, SPI_SLOTS> = table(0x00);
field!(SPIx_CR1_SPE, 0, "Serial peripheral enable.");
field!(SPIx_CR1_CSTART, 9, "Master transfer start.");

/// Configuration register 1.  Only writable while `SPE` is clear.
pub const SPIx_CFG1: Instances<RwReg, SPI_SLOTS> = table(0x08);
field!(SPIx_CFG1_DSIZE, 0, 4, "Frame size minus one, in bits.");
field!(SPIx_CFG1_FTHLV, 5, 8, "FIFO threshold level minus one, in frames.");
field!(SPIx_CFG1_RXDMAEN, 14, "Rx DMA stream enable.");
field!(SPIx_CFG1_TXDMAEN, 15, "Tx DMA stream enable.");
field!(SPIx_CFG1_MBR, 28, 30, "Master baud rate: kernel clock divided by 2 << MBR.");

/// Configuration register 2.  Only writable while `SPE` is clear.
pub const SPIx_CFG2: Instances<RwReg, SPI_SLOTS> = table(0x0C);
field!(SPIx_CFG2_MASTER, 22, "Master mode.");
field!(SPIx_CFG2_LSBFRST, 23, "Transmit least significant bit first.");
field!(SPIx_CFG2_CPHA, 24, "Clock phase.");
field!(SPIx_CFG2_CPOL, 25, "Clock polarity.");
field!(SPIx_CFG2_SSM, 26, "Software management of the slave select input.");

/// Status register.
pub const SPIx_SR: Instances<RoReg, SPI_SLOTS> = table(0x14);
field!(SPIx_SR_RXP, 0, "Rx packet available.");
field!(SPIx_SR_TXP, 1, "Tx packet space available.");
field!(SPIx_SR_EOT, 3, "End of transfer.");

/// Interrupt/status flags clear register.
pub const SPIx_IFCR: Instances<WoReg, SPI_SLOTS> = table(0x18);
field!(SPIx_IFCR_EOTC, 3, "Clear the end of transfer flag.");

/// Transmit data register.
pub const SPIx_TXDR: Instances<WoReg, SPI_SLOTS> = table(0x20);
/// Receive data register.
pub const SPIx_RXDR: Instances<RoReg, SPI_SLOTS> = table(0x30);

pub const FIELDS: &[(&str, Field)] = &[
    ("SPIx_CR1_SPE", SPIx_CR1_SPE),
    ("SPIx_CR1_CSTART", SPIx_CR1_CSTART),
    ("SPIx_CFG1_DSIZE", SPIx_CFG1_DSIZE),
    ("SPIx_CFG1_FTHLV", SPIx_CFG1_FTHLV),
    ("SPIx_CFG1_RXDMAEN", SPIx_CFG1_RXDMAEN),
    ("SPIx_CFG1_TXDMAEN", SPIx_CFG1_TXDMAEN),
    ("SPIx_CFG1_MBR", SPIx_CFG1_MBR),
    ("SPIx_CFG2_MASTER", SPIx_CFG2_MASTER),
    ("SPIx_CFG2_LSBFRST", SPIx_CFG2_LSBFRST),
    ("SPIx_CFG2_CPHA", SPIx_CFG2_CPHA),
    ("SPIx_CFG2_CPOL", SPIx_CFG2_CPOL),
    ("SPIx_CFG2_SSM", SPIx_CFG2_SSM),
    ("SPIx_SR_RXP", SPIx_SR_RXP),
    ("SPIx_SR_TXP", SPIx_SR_TXP),
    ("SPIx_SR_EOT", SPIx_SR_EOT),
    ("SPIx_IFCR_EOTC", SPIx_IFCR_EOTC),
];
