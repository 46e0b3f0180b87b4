// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Payload embedding into DCT coefficient integer parts.

use crate::block::BLOCK_LEN;
use crate::codec::bits::{bits_to_byte, byte_to_bits};
use crate::codec::zigzag::SCAN;
use crate::codec::EMBED_SHIFT;

/// Embed payload bits into a coefficient block.
///
/// Walks all 64 positions in scan order. At each position with capacity `c`,
/// the next `c` payload bits overwrite bits `[EMBED_SHIFT, EMBED_SHIFT + c)`
/// of the coefficient's 8-bit magnitude (LSB first); the fractional part and
/// the sign are preserved. Zero-capacity positions pass through unchanged.
///
/// Pure function of its inputs. Magnitude bits above the 8-bit window are
/// not represented, so embedding is lossy on coefficients with |integer
/// part| ≥ 256 — callers keep magnitudes inside the window.
///
/// Requires `payload.len() == capacity.iter().sum()`.
pub fn embed(
    coeffs: &[f64; BLOCK_LEN],
    capacity: &[usize; BLOCK_LEN],
    payload: &[bool],
) -> [f64; BLOCK_LEN] {
    debug_assert_eq!(payload.len(), capacity.iter().sum::<usize>());

    let mut out = [0.0f64; BLOCK_LEN];
    let mut msg_idx = 0;
    for &pos in &SCAN {
        let cap = capacity[pos];
        let mut value = coeffs[pos];

        if cap != 0 {
            let part = &payload[msg_idx..msg_idx + cap];
            msg_idx += cap;

            // Truncation toward zero splits value into integer magnitude
            // and a sign-matching fractional remainder.
            let int_part = value.trunc() as i64;
            let frac_part = value - int_part as f64;

            let mut magnitude = byte_to_bits((int_part.unsigned_abs() & 0xff) as u8);
            magnitude[EMBED_SHIFT..EMBED_SHIFT + cap].copy_from_slice(part);
            let rebuilt = f64::from(bits_to_byte(&magnitude));

            value = if value < 0.0 {
                frac_part - rebuilt
            } else {
                frac_part + rebuilt
            };
        }

        out[pos] = value;
    }
    out
}
