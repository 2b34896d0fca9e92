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

//! # pw_status
//!
//! Error codes compatible with Pigweed's [pw_status](https://pigweed.dev/pw_status).
//! `OK` has no `Error` variant; a `Result` is turned into a canonical numeric
//! code with [`StatusCode`] when it has to cross into C/C++.
//!
//! ```
//! use pw_status::{Error, Result, StatusCode};
//!
//! fn lookup(index: usize) -> Result<u32> {
//!     match index {
//!         0 => Err(Error::NotFound),
//!         1..=3 => Ok(index as u32 * 10),
//!         _ => Err(Error::OutOfRange),
//!     }
//! }
//!
//! assert!(lookup(2) == Ok(20));
//! assert_eq!(lookup(0).status_code(), 5);
//! assert_eq!(lookup(7).status_code(), 11);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

/// Status code for no error.
pub const OK: u32 = 0;

/// Canonical Pigweed error codes.
///
/// See the [status code reference](https://pigweed.dev/pw_status/#status-codes)
/// for when each applies.
#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    Cancelled = 1,
    Unknown = 2,
    /// Malformed argument regardless of system state, e.g. a field mask that
    /// is not one run of ones.
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    /// The requested entity does not exist, e.g. a hole in an instance table.
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    /// Past a valid range, e.g. an index beyond a table or a value wider than
    /// its field.
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl Error {
    /// Upper snake case name used by every Pigweed language binding.
    pub const fn name(self) -> &'static str {
        match self {
            Error::Cancelled => "CANCELLED",
            Error::Unknown => "UNKNOWN",
            Error::InvalidArgument => "INVALID_ARGUMENT",
            Error::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Error::NotFound => "NOT_FOUND",
            Error::AlreadyExists => "ALREADY_EXISTS",
            Error::PermissionDenied => "PERMISSION_DENIED",
            Error::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Error::FailedPrecondition => "FAILED_PRECONDITION",
            Error::Aborted => "ABORTED",
            Error::OutOfRange => "OUT_OF_RANGE",
            Error::Unimplemented => "UNIMPLEMENTED",
            Error::Internal => "INTERNAL",
            Error::Unavailable => "UNAVAILABLE",
            Error::DataLoss => "DATA_LOSS",
            Error::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Numeric status code of a [`Result`], `OK` for success.
pub trait StatusCode {
    fn status_code(self) -> u32;
}

impl<T> StatusCode for Result<T> {
    fn status_code(self) -> u32 {
        match self {
            Ok(_) => OK,
            Err(e) => e as u32,
        }
    }
}
