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

//! `DMA1` and `DMA2` controllers, eight streams each.
//!
//! Streams 0..=3 report through `LISR`/`LIFCR` and streams 4..=7 through
//! `HISR`/`HIFCR`.  Within either register a stream's flags sit at the
//! position given by `stream % 4`, which is how the flag tables are indexed:
//!
//! ```
//! use pw_regs::SimBus;
//! use pw_regs_stm32h7::dma::{DMAx_HIFCR, DMAx_HISR, DMAx_IFCR_CTCIFx, DMAx_ISR_TCIFx};
//!
//! let stream = 5;
//! let hisr = DMAx_HISR[2];
//! let bus = SimBus::<4>::new(hisr.addr());
//! bus.poke(hisr.addr(), 1 << 11);
//! assert_eq!(hisr.on(&bus).read_field(DMAx_ISR_TCIFx[stream % 4]), 1);
//!
//! DMAx_HIFCR[2].on(&bus).store_field(DMAx_IFCR_CTCIFx[stream % 4], 1);
//! assert_eq!(bus.peek(DMAx_HIFCR[2].addr()), 1 << 11);
//! ```

use pw_regs::{Access, Field, Instances, Reg, RoReg, RwReg, WoReg, field};

use crate::strided;

pub const DMA1_BASE: usize = 0x4002_0000;
pub const DMA2_BASE: usize = 0x4002_0400;

/// Number of table slots: instances 1 and 2 plus the empty slot 0.
pub const DMA_SLOTS: usize = 3;
pub const DMA_STREAMS: usize = 8;

/// Distance between consecutive stream register blocks.
const STREAM_STRIDE: usize = 0x18;

const fn table<A: Access>(offset: usize) -> Instances<Reg<A>, DMA_SLOTS> {
    // SAFETY: DMA register offsets from RM0433.
    unsafe {
        Instances::new([
            None,
            Some(Reg::new(DMA1_BASE + offset)),
            Some(Reg::new(DMA2_BASE + offset)),
        ])
    }
}

/// Low interrupt status register, streams 0..=3.
pub const DMAx_LISR: Instances<RoReg, DMA_SLOTS> = table(0x00);
/// High interrupt status register, streams 4..=7.
pub const DMAx_HISR: Instances<RoReg, DMA_SLOTS> = table(0x04);
/// Low interrupt flag clear register, streams 0..=3.
pub const DMAx_LIFCR: Instances<WoReg, DMA_SLOTS> = table(0x08);
/// High interrupt flag clear register, streams 4..=7.
pub const DMAx_HIFCR: Instances<WoReg, DMA_SLOTS> = table(0x0C);

/// Stream `n` configuration register of each controller, by stream.
pub const DMA1_SxCR: Instances<RwReg, DMA_STREAMS> = strided(DMA1_BASE, STREAM_STRIDE, 0x10);
pub const DMA2_SxCR: Instances<RwReg, DMA_STREAMS> = strided(DMA2_BASE, STREAM_STRIDE, 0x10);
/// Stream `n` number of data items to transfer.
pub const DMA1_SxNDTR: Instances<RwReg, DMA_STREAMS> = strided(DMA1_BASE, STREAM_STRIDE, 0x14);
pub const DMA2_SxNDTR: Instances<RwReg, DMA_STREAMS> = strided(DMA2_BASE, STREAM_STRIDE, 0x14);
/// Stream `n` peripheral address.
pub const DMA1_SxPAR: Instances<RwReg, DMA_STREAMS> = strided(DMA1_BASE, STREAM_STRIDE, 0x18);
pub const DMA2_SxPAR: Instances<RwReg, DMA_STREAMS> = strided(DMA2_BASE, STREAM_STRIDE, 0x18);
/// Stream `n` memory 0 address.
pub const DMA1_SxM0AR: Instances<RwReg, DMA_STREAMS> = strided(DMA1_BASE, STREAM_STRIDE, 0x1C);
pub const DMA2_SxM0AR: Instances<RwReg, DMA_STREAMS> = strided(DMA2_BASE, STREAM_STRIDE, 0x1C);

/// Stream configuration register by controller and stream.
///
/// Returns `None` for controller 0, a controller past 2 or a stream past 7.
pub fn stream_cr(instance: usize, stream: usize) -> Option<RwReg> {
    let streams = match instance {
        1 => &DMA1_SxCR,
        2 => &DMA2_SxCR,
        _ => return None,
    };
    streams.get(stream).ok()
}

field!(DMA_SxCR_EN, 0, "Stream enable.  Reads back as zero once the stream is disabled.");
field!(DMA_SxCR_TCIE, 4, "Transfer complete interrupt enable.");
field!(DMA_SxCR_DIR, 6, 7, "Direction: 0 periph to memory, 1 memory to periph, 2 memory to memory.");
field!(DMA_SxCR_CIRC, 8, "Circular mode.");
field!(DMA_SxCR_PINC, 9, "Peripheral address increment.");
field!(DMA_SxCR_MINC, 10, "Memory address increment.");
field!(DMA_SxCR_PSIZE, 11, 12, "Peripheral data size: 0 byte, 1 half word, 2 word.");
field!(DMA_SxCR_MSIZE, 13, 14, "Memory data size: 0 byte, 1 half word, 2 word.");
field!(DMA_SxCR_PL, 16, 17, "Priority level: 0 low through 3 very high.");

field!(DMA_SxNDTR_NDT, 0, 15, "Number of data items left to transfer.");

/// Flag offsets of the four streams sharing an ISR/IFCR register.
const FLAG_OFFSETS: [u32; 4] = [0, 6, 16, 22];

const fn per_stream(flag: u32) -> Instances<Field, 4> {
    let mut slots = [None; 4];
    let mut i = 0;
    while i < 4 {
        slots[i] = Some(Field::bit(FLAG_OFFSETS[i] + flag));
        i += 1;
    }
    Instances::new(slots)
}

/// Transfer complete flag, indexed by `stream % 4`.
pub const DMAx_ISR_TCIFx: Instances<Field, 4> = per_stream(5);
/// Half transfer flag, indexed by `stream % 4`.
pub const DMAx_ISR_HTIFx: Instances<Field, 4> = per_stream(4);
/// Transfer error flag, indexed by `stream % 4`.
pub const DMAx_ISR_TEIFx: Instances<Field, 4> = per_stream(3);
/// Clear transfer complete flag, indexed by `stream % 4`.
pub const DMAx_IFCR_CTCIFx: Instances<Field, 4> = per_stream(5);
/// Clear half transfer flag, indexed by `stream % 4`.
pub const DMAx_IFCR_CHTIFx: Instances<Field, 4> = per_stream(4);
/// Clear transfer error flag, indexed by `stream % 4`.
pub const DMAx_IFCR_CTEIFx: Instances<Field, 4> = per_stream(3);

pub const FIELDS: &[(&str, Field)] = &[
    ("DMA_SxCR_EN", DMA_SxCR_EN),
    ("DMA_SxCR_TCIE", DMA_SxCR_TCIE),
    ("DMA_SxCR_DIR", DMA_SxCR_DIR),
    ("DMA_SxCR_CIRC", DMA_SxCR_CIRC),
    ("DMA_SxCR_PINC", DMA_SxCR_PINC),
    ("DMA_SxCR_MINC", DMA_SxCR_MINC),
    ("DMA_SxCR_PSIZE", DMA_SxCR_PSIZE),
    ("DMA_SxCR_MSIZE", DMA_SxCR_MSIZE),
    ("DMA_SxCR_PL", DMA_SxCR_PL),
    ("DMA_SxNDTR_NDT", DMA_SxNDTR_NDT),
    ("DMAx_ISR_TCIF0", DMAx_ISR_TCIFx.slot(0)),
    ("DMAx_ISR_TCIF1", DMAx_ISR_TCIFx.slot(1)),
    ("DMAx_ISR_TCIF2", DMAx_ISR_TCIFx.slot(2)),
    ("DMAx_ISR_TCIF3", DMAx_ISR_TCIFx.slot(3)),
    ("DMAx_ISR_HTIF0", DMAx_ISR_HTIFx.slot(0)),
    ("DMAx_ISR_HTIF3", DMAx_ISR_HTIFx.slot(3)),
    ("DMAx_ISR_TEIF0", DMAx_ISR_TEIFx.slot(0)),
    ("DMAx_ISR_TEIF3", DMAx_ISR_TEIFx.slot(3)),
    ("DMAx_IFCR_CTCIF0", DMAx_IFCR_CTCIFx.slot(0)),
    ("DMAx_IFCR_CTCIF3", DMAx_IFCR_CTCIFx.slot(3)),
];
