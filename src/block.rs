// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Fixed-size 8×8 sample block, the unit of embedding.
//!
//! All watermarking operates on exactly one [`ImageBlock`]: 64 unsigned 8-bit
//! samples in natural (row-major) order. Any other shape is a fatal input
//! error, rejected at construction.

use crate::error::{Result, WatermarkError};

/// Block side length. Every block is `SIDE` × `SIDE`.
pub const SIDE: usize = 8;

/// Number of samples per block.
pub const BLOCK_LEN: usize = SIDE * SIDE;

/// An 8×8 block of unsigned 8-bit image samples.
///
/// Samples are stored flat in natural order, index = row * 8 + col.
/// Immutable once constructed; the codec and the search only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    samples: [u8; BLOCK_LEN],
}

impl ImageBlock {
    /// Create a block from 64 samples in row-major order.
    pub fn new(samples: [u8; BLOCK_LEN]) -> Self {
        Self { samples }
    }

    /// Create a block from 8 rows of 8 samples.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Self {
        let mut samples = [0u8; BLOCK_LEN];
        for (r, row) in rows.iter().enumerate() {
            samples[r * SIDE..(r + 1) * SIDE].copy_from_slice(row);
        }
        Self { samples }
    }

    /// Create a block from a flat slice with an explicit shape.
    ///
    /// # Errors
    /// [`WatermarkError::BlockShape`] if the shape is not 8×8 (the offending
    /// dimensions are reported in the message).
    pub fn from_slice(data: &[u8], rows: usize, cols: usize) -> Result<Self> {
        if rows != SIDE || cols != SIDE || data.len() != BLOCK_LEN {
            return Err(WatermarkError::BlockShape { rows, cols });
        }
        let mut samples = [0u8; BLOCK_LEN];
        samples.copy_from_slice(data);
        Ok(Self { samples })
    }

    /// Flat row-major samples.
    pub fn samples(&self) -> &[u8; BLOCK_LEN] {
        &self.samples
    }

    /// Sample at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < SIDE && col < SIDE);
        self.samples[row * SIDE + col]
    }

    /// Samples widened to f64, for the transform.
    pub fn to_f64(&self) -> [f64; BLOCK_LEN] {
        let mut out = [0.0f64; BLOCK_LEN];
        for (o, &s) in out.iter_mut().zip(self.samples.iter()) {
            *o = f64::from(s);
        }
        out
    }
}
