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

//! Type level access modes.
//!
//! A register's access mode is part of its type, so a write to a read-only
//! register (or a read of a write-only one) is a compile error rather than a
//! runtime check.  The traits are sealed; the three modes below are the only
//! ones.

mod sealed {
    pub trait Sealed {}
}

/// Marker trait implemented by every access mode.
pub trait Access: sealed::Sealed {
    /// Short name used by `Debug` output, e.g. `RwReg`.
    const NAME: &'static str;
}

/// Access modes that permit loads.
pub trait Readable: Access {}

/// Access modes that permit stores.
pub trait Writable: Access {}

/// Status and identification registers.
pub enum ReadOnly {}

/// Configuration registers.
pub enum ReadWrite {}

/// Trigger and atomic set/clear alias registers (e.g. `GPIOx_BSRR`).
pub enum WriteOnly {}

impl sealed::Sealed for ReadOnly {}
impl sealed::Sealed for ReadWrite {}
impl sealed::Sealed for WriteOnly {}

impl Access for ReadOnly {
    const NAME: &'static str = "RoReg";
}
impl Access for ReadWrite {
    const NAME: &'static str = "RwReg";
}
impl Access for WriteOnly {
    const NAME: &'static str = "WoReg";
}

impl Readable for ReadOnly {}
impl Readable for ReadWrite {}
impl Writable for ReadWrite {}
impl Writable for WriteOnly {}
