// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Payload extraction from DCT coefficient integer parts.

use crate::block::BLOCK_LEN;
use crate::codec::bits::byte_to_bits;
use crate::codec::zigzag::SCAN;
use crate::codec::EMBED_SHIFT;

/// Extract payload bits from a coefficient block.
///
/// Symmetric to [`embed`](crate::codec::embed::embed): at each position with
/// capacity `c`, read bits `[EMBED_SHIFT, EMBED_SHIFT + c)` of the 8-bit
/// magnitude of the truncated coefficient, appending in scan order. The
/// output length always equals the capacity sum.
pub fn extract(coeffs: &[f64; BLOCK_LEN], capacity: &[usize; BLOCK_LEN]) -> Vec<bool> {
    let mut payload = Vec::with_capacity(capacity.iter().sum());
    for &pos in &SCAN {
        let cap = capacity[pos];
        if cap != 0 {
            let int_part = coeffs[pos].trunc() as i64;
            let magnitude = byte_to_bits((int_part.unsigned_abs() & 0xff) as u8);
            payload.extend_from_slice(&magnitude[EMBED_SHIFT..EMBED_SHIFT + cap]);
        }
    }
    payload
}
