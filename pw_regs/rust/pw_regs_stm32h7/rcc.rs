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

//! Reset and clock control.
//!
//! Only the single-core (CPU1) view of the enable registers is described;
//! the `RCC_C1_*` copies on dual-core parts are not.

use pw_regs::{Field, Instances, RwReg, field, rw_reg};

use crate::repeated;

pub const RCC_BASE: usize = 0x5802_4400;

rw_reg!(RCC_CR, RCC_BASE, "Source control register.");
field!(RCC_CR_HSION, 0, "HSI clock enable.");
field!(RCC_CR_HSIRDY, 2, "HSI clock ready flag (read only).");
field!(RCC_CR_HSEON, 16, "HSE clock enable.");
field!(RCC_CR_HSERDY, 17, "HSE clock ready flag (read only).");
field!(RCC_CR_PLL1ON, 24, "PLL1 enable.");
field!(RCC_CR_PLL1RDY, 25, "PLL1 clock ready flag (read only).");

rw_reg!(RCC_AHB1ENR, RCC_BASE + 0xD8, "AHB1 peripheral clock enable register.");
field!(RCC_AHB1ENR_DMA1EN, 0, "DMA1 clock enable.");
field!(RCC_AHB1ENR_DMA2EN, 1, "DMA2 clock enable.");

/// DMA clock enable bits by DMA instance; index 0 is empty.
pub const RCC_AHB1ENR_DMAxEN: Instances<Field, 3> =
    Instances::from_entries(&[(1, RCC_AHB1ENR_DMA1EN), (2, RCC_AHB1ENR_DMA2EN)]);

rw_reg!(RCC_AHB4ENR, RCC_BASE + 0xE0, "AHB4 peripheral clock enable register.");
field!(RCC_AHB4ENR_GPIOAEN, 0, "GPIOA clock enable.");
field!(RCC_AHB4ENR_GPIOKEN, 10, "GPIOK clock enable.");

/// GPIO clock enable bits by port, `A` = 0 through `K` = 10.
pub const RCC_AHB4ENR_GPIOxEN: Instances<Field, 11> = repeated(RCC_AHB4ENR_GPIOAEN, 1);

rw_reg!(RCC_APB3ENR, RCC_BASE + 0xE4, "APB3 peripheral clock enable register.");
field!(RCC_APB3ENR_WWDG1EN, 6, "WWDG1 clock enable.");

rw_reg!(RCC_APB1LENR, RCC_BASE + 0xE8, "APB1 low peripheral clock enable register.");
field!(RCC_APB1LENR_SPI2EN, 14, "SPI2 clock enable.");
field!(RCC_APB1LENR_SPI3EN, 15, "SPI3 clock enable.");

/// SPI clock enable bits found in `RCC_APB1LENR`, by SPI instance.
pub const RCC_APB1LENR_SPIxEN: Instances<Field, 4> =
    Instances::from_entries(&[(2, RCC_APB1LENR_SPI2EN), (3, RCC_APB1LENR_SPI3EN)]);

rw_reg!(RCC_APB2ENR, RCC_BASE + 0xF0, "APB2 peripheral clock enable register.");
field!(RCC_APB2ENR_SPI1EN, 12, "SPI1 clock enable.");
field!(RCC_APB2ENR_SPI4EN, 13, "SPI4 clock enable.");
field!(RCC_APB2ENR_SPI5EN, 20, "SPI5 clock enable.");

rw_reg!(RCC_APB4ENR, RCC_BASE + 0xF4, "APB4 peripheral clock enable register.");
field!(RCC_APB4ENR_SPI6EN, 5, "SPI6 clock enable.");

/// Enable register and bit for each SPI instance.
///
/// The SPI clocks are spread over three buses, so the register differs per
/// instance.  Index 0 is empty.
pub const RCC_SPIxEN: Instances<(RwReg, Field), 7> = Instances::from_entries(&[
    (1, (RCC_APB2ENR, RCC_APB2ENR_SPI1EN)),
    (2, (RCC_APB1LENR, RCC_APB1LENR_SPI2EN)),
    (3, (RCC_APB1LENR, RCC_APB1LENR_SPI3EN)),
    (4, (RCC_APB2ENR, RCC_APB2ENR_SPI4EN)),
    (5, (RCC_APB2ENR, RCC_APB2ENR_SPI5EN)),
    (6, (RCC_APB4ENR, RCC_APB4ENR_SPI6EN)),
]);

pub const FIELDS: &[(&str, Field)] = &[
    ("RCC_CR_HSION", RCC_CR_HSION),
    ("RCC_CR_HSIRDY", RCC_CR_HSIRDY),
    ("RCC_CR_HSEON", RCC_CR_HSEON),
    ("RCC_CR_HSERDY", RCC_CR_HSERDY),
    ("RCC_CR_PLL1ON", RCC_CR_PLL1ON),
    ("RCC_CR_PLL1RDY", RCC_CR_PLL1RDY),
    ("RCC_AHB1ENR_DMA1EN", RCC_AHB1ENR_DMA1EN),
    ("RCC_AHB1ENR_DMA2EN", RCC_AHB1ENR_DMA2EN),
    ("RCC_AHB4ENR_GPIOAEN", RCC_AHB4ENR_GPIOAEN),
    ("RCC_AHB4ENR_GPIOKEN", RCC_AHB4ENR_GPIOKEN),
    ("RCC_APB3ENR_WWDG1EN", RCC_APB3ENR_WWDG1EN),
    ("RCC_APB1LENR_SPI2EN", RCC_APB1LENR_SPI2EN),
    ("RCC_APB1LENR_SPI3EN", RCC_APB1LENR_SPI3EN),
    ("RCC_APB2ENR_SPI1EN", RCC_APB2ENR_SPI1EN),
    ("RCC_APB2ENR_SPI4EN", RCC_APB2ENR_SPI4EN),
    ("RCC_APB2ENR_SPI5EN", RCC_APB2ENR_SPI5EN),
    ("RCC_APB4ENR_SPI6EN", RCC_APB4ENR_SPI6EN),
];
