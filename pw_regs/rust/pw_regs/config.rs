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

/// Register layer configuration.
pub trait RegsConfigInterface {
    /// Log every register load and store at debug level.
    ///
    /// Logging from a register access path also logs from interrupt
    /// handlers; only enable this with a backend that tolerates that.
    const LOG_REGISTER_ACCESS: bool = false;

    /// Log `write_field` calls whose value is wider than the field.
    const LOG_FIELD_TRUNCATION: bool = false;
}

/// Configuration selected by this crate's Cargo features.
pub struct RegsConfig;

impl RegsConfigInterface for RegsConfig {
    const LOG_REGISTER_ACCESS: bool = cfg!(feature = "log-access");
    const LOG_FIELD_TRUNCATION: bool = cfg!(feature = "log-truncation");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;
    impl RegsConfigInterface for Quiet {}

    #[test]
    fn logging_is_off_unless_configured() {
        assert!(!Quiet::LOG_REGISTER_ACCESS);
        assert!(!Quiet::LOG_FIELD_TRUNCATION);
    }

    #[test]
    fn features_select_logging() {
        assert_eq!(RegsConfig::LOG_REGISTER_ACCESS, cfg!(feature = "log-access"));
        assert_eq!(RegsConfig::LOG_FIELD_TRUNCATION, cfg!(feature = "log-truncation"));
    }
}
