// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Peak signal-to-noise ratio between an original and a modified image.

use crate::block::{ImageBlock, SIDE};
use crate::error::{Result, WatermarkError};

/// Sentinel returned for bit-identical inputs, where MSE is zero and the
/// ratio is undefined.
pub const IDENTICAL: f64 = 100.0;

/// PSNR in dB between two 8-bit images of explicit (rows, cols) shape.
///
/// # Errors
/// [`WatermarkError::SizeMismatch`] when the two shapes differ; the message
/// reports both.
pub fn psnr(
    original: &[u8],
    original_shape: (usize, usize),
    modified: &[u8],
    modified_shape: (usize, usize),
) -> Result<f64> {
    if original_shape != modified_shape || original.len() != modified.len() {
        return Err(WatermarkError::SizeMismatch {
            original: original_shape,
            modified: modified_shape,
        });
    }

    let mut sq_err = 0.0f64;
    for (&a, &b) in original.iter().zip(modified.iter()) {
        let d = f64::from(a) - f64::from(b);
        sq_err += d * d;
    }
    let mse = sq_err / original.len() as f64;
    if mse == 0.0 {
        return Ok(IDENTICAL);
    }

    let max_pixel = 255.0f64;
    Ok(20.0 * (max_pixel / mse.sqrt()).log10())
}

/// PSNR between two 8×8 blocks. Shapes always match, so this cannot fail.
pub fn block_psnr(original: &ImageBlock, modified: &ImageBlock) -> f64 {
    psnr(
        original.samples(),
        (SIDE, SIDE),
        modified.samples(),
        (SIDE, SIDE),
    )
    .expect("fixed 8x8 shapes")
}
