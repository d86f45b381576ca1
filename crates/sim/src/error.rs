// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use std::{collections::TryReserveError, io, path::PathBuf};
use thiserror::Error;

/// Simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Deck or statistics storage cannot be allocated.
    #[error("Storage allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// The results file cannot be written.
    #[error("Cannot write results to {}: {source}", .path.display())]
    Output {
        /// The output file path.
        path: PathBuf,
        /// The io error.
        source: io::Error,
    },
    /// Invalid simulation configuration.
    #[error("Invalid configuration: {0}")]
    Config(&'static str),
    /// A starting hand label that doesn't name one of the 169 classes.
    #[error("Invalid hand class {0:?}")]
    InvalidHandClass(String),
}
