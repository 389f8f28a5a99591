// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for demo configuration and lifecycle

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Rejected configuration; raised once, when a demo or presentation is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    NonPositiveInterval,
    #[error("tick interval {interval:?} exceeds the maximum of {max:?}")]
    IntervalTooLong { interval: Duration, max: Duration },
    #[error("section id must not be empty (section {index})")]
    EmptySectionId { index: usize },
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid presentation: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors surfaced by a mounted demo
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// The widget was already unmounted; indicates a host lifecycle bug
    #[error("demo used after dispose ({operation})")]
    UseAfterDispose { operation: &'static str },
}
