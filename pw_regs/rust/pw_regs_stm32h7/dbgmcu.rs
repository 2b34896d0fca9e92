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

//! Debug support.

use pw_regs::{Field, field, ro_reg};

ro_reg!(DBGMCU_IDCODE, 0x5C00_1000, "Device identity code.");
field!(DBGMCU_IDCODE_DEV_ID, 0, 11, "Device family, 0x450 for STM32H742/743/750/753.");
field!(DBGMCU_IDCODE_REV_ID, 16, 31, "Silicon revision.");

/// `DEV_ID` of the STM32H742/743/750/753 line.
pub const DEV_ID_STM32H74X: u32 = 0x450;

pub const FIELDS: &[(&str, Field)] = &[
    ("DBGMCU_IDCODE_DEV_ID", DBGMCU_IDCODE_DEV_ID),
    ("DBGMCU_IDCODE_REV_ID", DBGMCU_IDCODE_REV_ID),
];
