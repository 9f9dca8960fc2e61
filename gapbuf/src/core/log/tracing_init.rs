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

//! Turn a [`TracingConfig`] into boxed [`tracing_subscriber`] layers.
//!
//! Every layer uses the same compact, single line format without timestamps, so that a
//! log of gap moves and relocations reads top to bottom like a trace of the edits. The
//! file layer never writes ANSI escapes.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Boxed layer, with the writer type erased so display and file layers can share a
/// [`Vec`].
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Layers stacked on a [`Registry`].
pub type RegistryLayers = Vec<Box<DynLayer<Registry>>>;

/// `fmt` layer with the shared formatting options. A macro, since the builder's type
/// changes with every option.
macro_rules! compact_fmt_layer {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Build the layers for `tracing_config`, without installing them. Returns `None` for
/// [`WriterConfig::None`]. See [`TracingConfig::install_global()`] and
/// [`TracingConfig::install_thread_local()`] to install.
///
/// The first layer is the level filter itself, followed by one layer per output.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<RegistryLayers>> {
    let level_filter = tracing_config.get_level_filter();

    let (maybe_display, maybe_file_path) = match tracing_config.writer_config {
        WriterConfig::None => return Ok(None),
        WriterConfig::Display(display_pref) => (Some(display_pref), None),
        WriterConfig::File(file_path) => (None, Some(file_path)),
        WriterConfig::DisplayAndFile(display_pref, file_path) => {
            (Some(display_pref), Some(file_path))
        }
    };

    let mut layers: RegistryLayers = vec![Box::new(level_filter)];
    if let Some(display_pref) = maybe_display {
        layers.push(create_display_layer(display_pref, level_filter));
    }
    if let Some(file_path) = maybe_file_path {
        layers.push(try_create_file_layer(&file_path, level_filter)?);
    }
    Ok(Some(layers))
}

/// Layer that writes to stdout or stderr.
#[must_use]
pub fn create_display_layer<S>(
    display_pref: DisplayPreference,
    level_filter: LevelFilter,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    match display_pref {
        DisplayPreference::Stdout => Box::new(
            compact_fmt_layer!()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            compact_fmt_layer!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// Layer that appends to the file at `file_path`, creating it if needed.
///
/// # Errors
///
/// Returns an error if `file_path` has no parent folder or file name.
pub fn try_create_file_layer<S>(
    file_path: &str,
    level_filter: LevelFilter,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let file_appender = rolling_file_appender_impl::try_create(file_path)?;
    Ok(Box::new(
        compact_fmt_layer!()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(level_filter),
    ))
}
