// Copyright 2023 The Pigweed Authors
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

//! `pw_log` is an extensible logging system that can delegate to
//! pre-existing logging APIs without upstream changes.
//!
//! Clients of `pw_log` simply import and use the logging API, and
//! log invocations will be handled by the selected logging backend.
//!
//! Backends are selected with Cargo features:
//! * `println`: emits `[TAG] message` lines to `stdout` with
//!   [`std::println!`].  Useful for host tests and tools.
//! * no backend feature: log invocations are type checked and their arguments
//!   evaluated, but nothing is emitted.  This is the default for `no_std`
//!   targets.
//!
//! ```
//! use pw_log::{info, warn};
//!
//! info!("Thank you for signing up for Log Facts!");
//! warn!("Log Fact: Logs can be either {}, {}, or {} sawn.",
//!   "flat" as &str, "quarter" as &str, "rift" as &str);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

use core::fmt;

/// Pigweed's standard log levels
///
/// Values are limited to 3 bits, to fit within the protobuf definition of
/// LogEntry's line_level in pw_log_rpc.  The values match the C/C++
/// implementation of the `pw_log` module.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Detailed tracing, normally compiled out with `debug_if!`.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Unexpected but recoverable conditions.
    Warn = 3,
    /// Operation failures.
    Error = 4,
    /// Failures that put the system at risk.
    Critical = 5,
    // Level 6 is not defined in order to match the protobuf definition.
    /// Unrecoverable failures.
    Fatal = 7,
}

/// Three letter tag printed in front of every log line.
pub const fn log_level_tag(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "DBG",
        LogLevel::Info => "INF",
        LogLevel::Warn => "WRN",
        LogLevel::Error => "ERR",
        LogLevel::Critical => "CRT",
        LogLevel::Fatal => "FTL",
    }
}

/// A single formatted log line: `[TAG] message`.
pub struct LogLine<'a> {
    level: LogLevel,
    args: fmt::Arguments<'a>,
}

impl<'a> LogLine<'a> {
    /// Pair a level with its already captured format arguments.
    pub const fn new(level: LogLevel, args: fmt::Arguments<'a>) -> Self {
        Self { level, args }
    }
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", log_level_tag(self.level), self.args)
    }
}

// Re-export dependences of `pw_log` macros to be accessed via `$crate::__private`.
#[doc(hidden)]
pub mod __private {
    pub use crate::*;

    #[cfg(feature = "println")]
    #[inline]
    pub fn emit(level: LogLevel, args: core::fmt::Arguments<'_>) {
        std::println!("{}", LogLine::new(level, args));
    }

    #[cfg(not(feature = "println"))]
    #[inline(always)]
    pub fn emit(_level: LogLevel, _args: core::fmt::Arguments<'_>) {}
}

/// Emit a log message using `core::fmt` format string semantics.
///
/// ```
/// use pw_log::{log, LogLevel};
///
/// log!(LogLevel::Info, "Log fact: A {} log has a Janka hardness of {} lbf.",
///     "Spruce Pine" as &str, 700 as i32);
/// ```
#[macro_export]
macro_rules! log {
  ($log_level:expr, $($args:tt)*) => {{
    use $crate::__private as __pw_log_crate;
    __pw_log_crate::emit($log_level, core::format_args!($($args)*))
  }};
}

/// Emit a log message using `core::fmt` format string semantics if condition
/// is true.
///
/// ```
/// use pw_log::{log_if, LogLevel};
///
/// const LOG_FACTS: bool = true;
/// log_if!(LOG_FACTS, LogLevel::Info, "Log fact: {} logs float.", "Most" as &str);
/// ```
#[macro_export]
macro_rules! log_if {
  ($condition:expr, $log_level:expr, $($args:tt)*) => {{
    if $condition {
      $crate::log!($log_level, $($args)*)
    }
  }};
}

/// Emit a debug level log message.
///
/// ```
/// use pw_log::debug;
///
/// debug!("Log Fact: The American toy Lincoln Logs were inspired by the {} in {}.",
///     "Imperial Hotel" as &str, "Tokyo" as &str);
/// ```
#[macro_export]
macro_rules! debug {
  ($($args:tt)*) => {
    $crate::log!($crate::LogLevel::Debug, $($args)*)
  };
}

/// Emit a debug level log message if condition is true.
///
/// Pass a `const bool` as the condition so the message is compiled out when
/// disabled.
///
/// ```
/// use pw_log::debug_if;
///
/// const LOG_FACTS: bool = false;
/// debug_if!(LOG_FACTS, "Log Fact: {} is not printed.", "This" as &str);
/// ```
#[macro_export]
macro_rules! debug_if {
  ($condition:expr, $($args:tt)*) => {
    $crate::log_if!($condition, $crate::LogLevel::Debug, $($args)*)
  };
}

/// Emit an info level log message.
///
/// ```
/// use pw_log::info;
///
/// info!(
///     "Log Fact: The American president Abraham Lincoln (born {:x}) once lived in a log cabin.",
///     0x1809 as u32);
/// ```
#[macro_export]
macro_rules! info {
  ($($args:tt)*) => {
    $crate::log!($crate::LogLevel::Info, $($args)*)
  };
}

/// Emit a warn level log message.
///
/// ```
/// use pw_log::warn;
///
/// warn!(
///     "Log Fact: Made from a log, an {} year old dugout canoe is the oldest discovered boat in {}.",
///     8000 as i32, "Africa" as &str);
/// ```
#[macro_export]
macro_rules! warn {
  ($($args:tt)*) => {
    $crate::log!($crate::LogLevel::Warn, $($args)*)
  };
}

/// Emit an error level log message.
///
/// ```
/// use pw_log::error;
///
/// error!("Log Fact: Before saws were invented, the {} was used prepare logs for use.",
///     "adze" as &str);
/// ```
#[macro_export]
macro_rules! error {
  ($($args:tt)*) => {
    $crate::log!($crate::LogLevel::Error, $($args)*)
  };
}

/// Emit a fatal level log message.
///
/// *Note*: `fatal` only emits a log message and does not cause a `panic!()`
///
/// ```
/// use pw_log::fatal;
///
/// fatal!("Log Fact: All out of log facts! Timber!");
/// ```
#[macro_export]
macro_rules! fatal {
  ($($args:tt)*) => {
    $crate::log!($crate::LogLevel::Fatal, $($args)*)
  };
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn no_argument_log_line_is_tagged() {
        assert_eq!(
            format!("{}", LogLine::new(LogLevel::Info, format_args!("test"))),
            "[INF] test"
        );
    }

    #[test]
    fn integer_argument_is_formatted() {
        assert_eq!(
            format!("{}", LogLine::new(LogLevel::Warn, format_args!("test {}", -1))),
            "[WRN] test -1"
        );
    }

    #[test]
    fn hex_argument_is_formatted() {
        assert_eq!(
            format!(
                "{}",
                LogLine::new(LogLevel::Debug, format_args!("reg {:#010x}", 0x5802_4400u32))
            ),
            "[DBG] reg 0x58024400"
        );
    }

    #[test]
    fn every_level_has_a_distinct_tag() {
        let levels = [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Critical,
            LogLevel::Fatal,
        ];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(log_level_tag(*a), log_level_tag(*b));
            }
        }
    }

    #[test]
    fn macros_accept_disabled_condition() {
        const LOG_NOTHING: bool = false;
        debug_if!(LOG_NOTHING, "never {}", 1u32);
        log_if!(LOG_NOTHING, LogLevel::Error, "never");
        info!("plain");
    }
}
