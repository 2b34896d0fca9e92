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

//! General purpose I/O ports `A` through `K`.
//!
//! Every register exists once per port, as a constant (`GPIOC_ODR`) and in a
//! table indexed by port number (`GPIOx_ODR[2]`).  Per-pin fields are tables
//! indexed by pin number.

use pw_regs::{Field, Instances, RoReg, RwReg, WoReg, ro_reg, rw_reg, wo_reg};

use crate::{repeated, strided};

/// Base address of port `A`; the others follow every [`GPIO_STRIDE`] bytes.
pub const GPIO_BASE: usize = 0x5802_0000;
/// Distance between consecutive port register blocks.
pub const GPIO_STRIDE: usize = 0x400;
pub const GPIO_PORTS: usize = 11;
pub const GPIO_PINS: usize = 16;

pub const MODER_OFFSET: usize = 0x00;
pub const OTYPER_OFFSET: usize = 0x04;
pub const OSPEEDR_OFFSET: usize = 0x08;
pub const PUPDR_OFFSET: usize = 0x0C;
pub const IDR_OFFSET: usize = 0x10;
pub const ODR_OFFSET: usize = 0x14;
pub const BSRR_OFFSET: usize = 0x18;
pub const AFRL_OFFSET: usize = 0x20;
pub const AFRH_OFFSET: usize = 0x24;

/// Base address of port `index`, `A` = 0.
pub const fn port_base(index: usize) -> usize {
    GPIO_BASE + index * GPIO_STRIDE
}

macro_rules! gpio_ports {
    ($($port:ident = $index:literal),* $(,)?) => {
        paste::paste! {
            $(
                pub const [<GPIO $port _BASE>]: usize = port_base($index);
                rw_reg!([<GPIO $port _MODER>], port_base($index) + MODER_OFFSET,
                    concat!("GPIO", stringify!($port), " mode register."));
                rw_reg!([<GPIO $port _OTYPER>], port_base($index) + OTYPER_OFFSET,
                    concat!("GPIO", stringify!($port), " output type register."));
                rw_reg!([<GPIO $port _OSPEEDR>], port_base($index) + OSPEEDR_OFFSET,
                    concat!("GPIO", stringify!($port), " output speed register."));
                rw_reg!([<GPIO $port _PUPDR>], port_base($index) + PUPDR_OFFSET,
                    concat!("GPIO", stringify!($port), " pull-up/pull-down register."));
                ro_reg!([<GPIO $port _IDR>], port_base($index) + IDR_OFFSET,
                    concat!("GPIO", stringify!($port), " input data register."));
                rw_reg!([<GPIO $port _ODR>], port_base($index) + ODR_OFFSET,
                    concat!("GPIO", stringify!($port), " output data register."));
                wo_reg!([<GPIO $port _BSRR>], port_base($index) + BSRR_OFFSET,
                    concat!("GPIO", stringify!($port), " bit set/reset register."));
                rw_reg!([<GPIO $port _AFRL>], port_base($index) + AFRL_OFFSET,
                    concat!("GPIO", stringify!($port), " alternate function low register."));
                rw_reg!([<GPIO $port _AFRH>], port_base($index) + AFRH_OFFSET,
                    concat!("GPIO", stringify!($port), " alternate function high register."));
            )*
        }
    };
}

gpio_ports!(A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7, I = 8, J = 9, K = 10);

pub const GPIOx_MODER: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, MODER_OFFSET);
pub const GPIOx_OTYPER: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, OTYPER_OFFSET);
pub const GPIOx_OSPEEDR: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, OSPEEDR_OFFSET);
pub const GPIOx_PUPDR: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, PUPDR_OFFSET);
pub const GPIOx_IDR: Instances<RoReg, GPIO_PORTS> = strided(GPIO_BASE, GPIO_STRIDE, IDR_OFFSET);
pub const GPIOx_ODR: Instances<RwReg, GPIO_PORTS> = strided(GPIO_BASE, GPIO_STRIDE, ODR_OFFSET);
pub const GPIOx_BSRR: Instances<WoReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, BSRR_OFFSET);
pub const GPIOx_AFRL: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, AFRL_OFFSET);
pub const GPIOx_AFRH: Instances<RwReg, GPIO_PORTS> =
    strided(GPIO_BASE, GPIO_STRIDE, AFRH_OFFSET);

/// Pin mode: 0 input, 1 output, 2 alternate function, 3 analog.
pub const GPIOx_MODER_MODEx: Instances<Field, GPIO_PINS> = repeated(Field::bits(0, 1), 2);
/// Output type: 0 push-pull, 1 open drain.
pub const GPIOx_OTYPER_OTx: Instances<Field, GPIO_PINS> = repeated(Field::bit(0), 1);
/// Output speed: 0 low through 3 very high.
pub const GPIOx_OSPEEDR_OSPEEDx: Instances<Field, GPIO_PINS> = repeated(Field::bits(0, 1), 2);
/// Pull: 0 none, 1 pull-up, 2 pull-down.
pub const GPIOx_PUPDR_PUPDx: Instances<Field, GPIO_PINS> = repeated(Field::bits(0, 1), 2);
pub const GPIOx_IDR_IDx: Instances<Field, GPIO_PINS> = repeated(Field::bit(0), 1);
pub const GPIOx_ODR_ODx: Instances<Field, GPIO_PINS> = repeated(Field::bit(0), 1);
/// Writing 1 sets the pin's output bit.
pub const GPIOx_BSRR_BSx: Instances<Field, GPIO_PINS> = repeated(Field::bit(0), 1);
/// Writing 1 resets the pin's output bit.  `BSx` wins if both are written.
pub const GPIOx_BSRR_BRx: Instances<Field, GPIO_PINS> = repeated(Field::bit(16), 1);
/// Alternate function of pins 0..=7 in `AFRL`, or of pins 8..=15 in `AFRH`
/// (index with `pin - 8`).
pub const GPIOx_AFRx_AFSELx: Instances<Field, 8> = repeated(Field::bits(0, 3), 4);

/// The first and last copy of each per-pin descriptor.
pub const FIELDS: &[(&str, Field)] = &[
    ("GPIOx_MODER_MODE0", GPIOx_MODER_MODEx.slot(0)),
    ("GPIOx_MODER_MODE15", GPIOx_MODER_MODEx.slot(15)),
    ("GPIOx_OTYPER_OT0", GPIOx_OTYPER_OTx.slot(0)),
    ("GPIOx_OTYPER_OT15", GPIOx_OTYPER_OTx.slot(15)),
    ("GPIOx_OSPEEDR_OSPEED0", GPIOx_OSPEEDR_OSPEEDx.slot(0)),
    ("GPIOx_OSPEEDR_OSPEED15", GPIOx_OSPEEDR_OSPEEDx.slot(15)),
    ("GPIOx_PUPDR_PUPD0", GPIOx_PUPDR_PUPDx.slot(0)),
    ("GPIOx_PUPDR_PUPD15", GPIOx_PUPDR_PUPDx.slot(15)),
    ("GPIOx_IDR_ID0", GPIOx_IDR_IDx.slot(0)),
    ("GPIOx_IDR_ID15", GPIOx_IDR_IDx.slot(15)),
    ("GPIOx_ODR_OD0", GPIOx_ODR_ODx.slot(0)),
    ("GPIOx_ODR_OD15", GPIOx_ODR_ODx.slot(15)),
    ("GPIOx_BSRR_BS0", GPIOx_BSRR_BSx.slot(0)),
    ("GPIOx_BSRR_BS15", GPIOx_BSRR_BSx.slot(15)),
    ("GPIOx_BSRR_BR0", GPIOx_BSRR_BRx.slot(0)),
    ("GPIOx_BSRR_BR15", GPIOx_BSRR_BRx.slot(15)),
    ("GPIOx_AFRx_AFSEL0", GPIOx_AFRx_AFSELx.slot(0)),
    ("GPIOx_AFRx_AFSEL7", GPIOx_AFRx_AFSELx.slot(7)),
];
