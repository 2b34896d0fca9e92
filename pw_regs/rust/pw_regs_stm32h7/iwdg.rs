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

//! Independent watchdog.
//!
//! `IWDG1` is the only instance on single-core parts; the tables keep the
//! hardware numbering, so slot 0 is empty.
//!
//! `PR` and `RLR` are write protected: write [`IWDG_KR_KEY_ENABLE_ACCESS`] to
//! `KR` first, then wait for the matching `SR` update flag to clear before
//! writing again.

use pw_regs::{Field, Instances, RoReg, RwReg, WoReg, field, ro_reg, rw_reg, wo_reg};

pub const IWDG1_BASE: usize = 0x5800_4800;

wo_reg!(IWDG1_KR, IWDG1_BASE, "IWDG1 key register.");
rw_reg!(IWDG1_PR, IWDG1_BASE + 0x04, "IWDG1 prescaler register.");
rw_reg!(IWDG1_RLR, IWDG1_BASE + 0x08, "IWDG1 reload register.");
ro_reg!(IWDG1_SR, IWDG1_BASE + 0x0C, "IWDG1 status register.");

pub const IWDGx_KR: Instances<WoReg, 2> = Instances::from_entries(&[(1, IWDG1_KR)]);
pub const IWDGx_PR: Instances<RwReg, 2> = Instances::from_entries(&[(1, IWDG1_PR)]);
pub const IWDGx_RLR: Instances<RwReg, 2> = Instances::from_entries(&[(1, IWDG1_RLR)]);
pub const IWDGx_SR: Instances<RoReg, 2> = Instances::from_entries(&[(1, IWDG1_SR)]);

field!(IWDGx_KR_KEY, 0, 15, "Key value.");
field!(IWDGx_PR_PR, 0, 2, "Prescaler: the LSI clock divided by 4 << PR.");
field!(IWDGx_RLR_RL, 0, 11, "Reload value loaded into the counter on refresh.");
field!(IWDGx_SR_PVU, 0, "Prescaler value update in progress.");
field!(IWDGx_SR_RVU, 1, "Reload value update in progress.");

/// Start the watchdog.
pub const IWDG_KR_KEY_START: u32 = 0xCCCC;
/// Reload the counter from `RLR`.
pub const IWDG_KR_KEY_RELOAD: u32 = 0xAAAA;
/// Unlock `PR`, `RLR` and `WINR` for writing.
pub const IWDG_KR_KEY_ENABLE_ACCESS: u32 = 0x5555;

pub const FIELDS: &[(&str, Field)] = &[
    ("IWDGx_KR_KEY", IWDGx_KR_KEY),
    ("IWDGx_PR_PR", IWDGx_PR_PR),
    ("IWDGx_RLR_RL", IWDGx_RLR_RL),
    ("IWDGx_SR_PVU", IWDGx_SR_PVU),
    ("IWDGx_SR_RVU", IWDGx_SR_RVU),
];
