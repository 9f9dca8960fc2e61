/*
 *   Copyright (c) 2024-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;

/// Default log file used by [`TracingConfig::new_file()`] when no name is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "gapbuf_log_file_debug.log";

/// Where gap buffer events go, and how verbose they are.
///
/// Logging is off unless one of the constructors is used. The library only emits
/// `debug` events for gap moves and relocations, and `warn` events for failed file
/// loads, so [`LevelFilter::DEBUG`] is the default once logging is on.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Log outputs. File variants hold the path of the log file, eg: `gbx.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Terminal stream for the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Logging switched off. Nothing is installed.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install as the process wide subscriber. Meant for the `gbx` binary; it can only
    /// happen once per process. Does nothing for [`WriterConfig::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber was
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        if self.writer_config == WriterConfig::None {
            return Ok(());
        }
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Install for the current thread until the returned guard is dropped. Tests use
    /// this so each one can capture its own log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constructors() {
        let it = TracingConfig::new_file(None);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);

        let it = TracingConfig::new_display(DisplayPreference::Stderr)
            .with_level_filter(LevelFilter::WARN);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq!(it.get_level_filter(), LevelFilter::WARN);
    }

    #[test]
    fn test_disabled_install_is_noop() {
        assert!(TracingConfig::disabled().install_global().is_ok());
    }
}
