//! Error types for cloudsketch operations.
//!
//! This module provides the main error type [`SketchError`] which wraps the
//! error conditions that can occur while building or rendering a diagram.

use std::io;

use thiserror::Error;

use cloudsketch_core::color::ColorError;

/// The main error type for cloudsketch operations.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}
