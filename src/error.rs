// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for watermark embedding and the genetic search.
//!
//! [`WatermarkError`] covers all failure modes from input validation through
//! quality measurement. The search loop itself has no failure states; fatal
//! input errors are raised before it starts.

use core::fmt;

/// Errors that can occur during watermark embedding or search setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatermarkError {
    /// The input block is not 8×8. Carries the offending dimensions.
    BlockShape { rows: usize, cols: usize },
    /// The two images compared by the quality metric have different shapes.
    SizeMismatch {
        original: (usize, usize),
        modified: (usize, usize),
    },
    /// The payload does not fit the embedding capacity of one block.
    PayloadTooLarge { len: usize, max: usize },
    /// A population of zero individuals was requested.
    EmptyPopulation,
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockShape { rows, cols } => {
                write!(f, "image block has an incorrect size: {rows}x{cols} (expected 8x8)")
            }
            Self::SizeMismatch { original, modified } => write!(
                f,
                "images must have the same size: original {}x{}, modified {}x{}",
                original.0, original.1, modified.0, modified.1
            ),
            Self::PayloadTooLarge { len, max } => {
                write!(f, "payload of {len} bits exceeds the embedding capacity of {max} bits")
            }
            Self::EmptyPopulation => write!(f, "population size must be at least 1"),
        }
    }
}

impl std::error::Error for WatermarkError {}

pub type Result<T> = std::result::Result<T, WatermarkError>;
