// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Orthonormal 2D DCT-II and inverse for 8×8 blocks.
//!
//! Separable formulation: the 1D transform is applied to every row, then to
//! every column of the result. With the orthonormal scaling (`sqrt(1/8)` for
//! the DC basis, `sqrt(2/8)` otherwise) the inverse is the exact transpose,
//! so `idct2(dct2(x))` reproduces `x` up to floating-point rounding.

use std::f64::consts::PI;

use crate::block::{BLOCK_LEN, SIDE};

/// Orthonormal cosine basis: `basis[k][n] = alpha(k) * cos(pi*(2n+1)k / 16)`.
fn basis() -> [[f64; SIDE]; SIDE] {
    let mut b = [[0.0f64; SIDE]; SIDE];
    for (k, row) in b.iter_mut().enumerate() {
        let alpha = if k == 0 {
            (1.0 / SIDE as f64).sqrt()
        } else {
            (2.0 / SIDE as f64).sqrt()
        };
        for (n, v) in row.iter_mut().enumerate() {
            *v = alpha
                * (PI * (2.0 * n as f64 + 1.0) * k as f64 / (2.0 * SIDE as f64)).cos();
        }
    }
    b
}

fn dct_1d(input: &[f64; SIDE], basis: &[[f64; SIDE]; SIDE]) -> [f64; SIDE] {
    let mut out = [0.0f64; SIDE];
    for (k, o) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for n in 0..SIDE {
            sum += input[n] * basis[k][n];
        }
        *o = sum;
    }
    out
}

fn idct_1d(input: &[f64; SIDE], basis: &[[f64; SIDE]; SIDE]) -> [f64; SIDE] {
    let mut out = [0.0f64; SIDE];
    for (n, o) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for k in 0..SIDE {
            sum += input[k] * basis[k][n];
        }
        *o = sum;
    }
    out
}

fn apply_separable(
    block: &[f64; BLOCK_LEN],
    f: impl Fn(&[f64; SIDE]) -> [f64; SIDE],
) -> [f64; BLOCK_LEN] {
    let mut tmp = [0.0f64; BLOCK_LEN];

    // Rows.
    for r in 0..SIDE {
        let mut row = [0.0f64; SIDE];
        row.copy_from_slice(&block[r * SIDE..(r + 1) * SIDE]);
        tmp[r * SIDE..(r + 1) * SIDE].copy_from_slice(&f(&row));
    }

    // Columns.
    let mut out = [0.0f64; BLOCK_LEN];
    for c in 0..SIDE {
        let mut col = [0.0f64; SIDE];
        for r in 0..SIDE {
            col[r] = tmp[r * SIDE + c];
        }
        let t = f(&col);
        for r in 0..SIDE {
            out[r * SIDE + c] = t[r];
        }
    }
    out
}

/// Forward 2D DCT-II (orthonormal) of an 8×8 block in natural order.
pub fn dct2(block: &[f64; BLOCK_LEN]) -> [f64; BLOCK_LEN] {
    let b = basis();
    apply_separable(block, |v| dct_1d(v, &b))
}

/// Inverse 2D DCT (orthonormal DCT-III) of an 8×8 coefficient block.
pub fn idct2(coeffs: &[f64; BLOCK_LEN]) -> [f64; BLOCK_LEN] {
    let b = basis();
    apply_separable(coeffs, |v| idct_1d(v, &b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_concentrates_in_dc() {
        let block = [100.0f64; BLOCK_LEN];
        let coeffs = dct2(&block);
        // Orthonormal DC of a constant block: 8 * value.
        assert!((coeffs[0] - 800.0).abs() < 1e-9, "DC = {}", coeffs[0]);
        for (i, &c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-9, "AC[{i}] = {c}");
        }
    }

    #[test]
    fn round_trip_identity() {
        let mut block = [0.0f64; BLOCK_LEN];
        for (i, v) in block.iter_mut().enumerate() {
            *v = (i as f64 * 3.7) % 256.0;
        }
        let back = idct2(&dct2(&block));
        for (a, b) in block.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn energy_preserved() {
        let mut block = [0.0f64; BLOCK_LEN];
        for (i, v) in block.iter_mut().enumerate() {
            *v = ((i * 37) % 251) as f64;
        }
        let coeffs = dct2(&block);
        let e_spatial: f64 = block.iter().map(|v| v * v).sum();
        let e_freq: f64 = coeffs.iter().map(|v| v * v).sum();
        assert!((e_spatial - e_freq).abs() < 1e-6 * e_spatial.max(1.0));
    }
}
