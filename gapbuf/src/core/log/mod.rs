// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for processes that use the [`crate::GapBuffer`] engine. The engine
//! itself only emits [`tracing`] events; installing a subscriber is the job of the
//! binary (see the `gbx` front end).

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
