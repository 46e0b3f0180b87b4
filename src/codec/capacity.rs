// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Per-position embedding capacity allocation.
//!
//! A fixed mask marks 17 AC positions, biased toward the low and mid
//! frequencies where quantization-style rounding does the least damage. The
//! payload length is spread across those positions: each gets
//! `len / 17` bits, and the first `len % 17` eligible positions *in scan
//! order* get one extra. Every other position (the DC included) carries
//! nothing.

use crate::block::BLOCK_LEN;
use crate::codec::zigzag::SCAN;
use crate::codec::EMBED_SHIFT;

/// Eligible AC positions for payload bits, natural (row-major) order.
/// 17 positions in a low/mid-frequency triangle; DC stays unused.
pub const ELIGIBLE: [bool; BLOCK_LEN] = {
    const O: bool = false;
    const X: bool = true;
    [
        O, X, X, X, X, O, O, O, //
        X, X, X, X, O, O, O, O, //
        X, X, X, O, O, O, O, O, //
        X, X, O, O, O, O, O, O, //
        X, X, O, O, O, O, O, O, //
        X, O, O, O, O, O, O, O, //
        X, O, O, O, O, O, O, O, //
        O, O, O, O, O, O, O, O, //
    ]
};

/// Number of eligible positions in [`ELIGIBLE`].
pub const ELIGIBLE_COUNT: usize = count_eligible();

/// Largest payload one block can carry: every eligible position filled up
/// to the top of the 8-bit magnitude window above the embed shift.
pub const MAX_PAYLOAD_BITS: usize = ELIGIBLE_COUNT * (8 - EMBED_SHIFT);

const fn count_eligible() -> usize {
    let mut n = 0;
    let mut i = 0;
    while i < BLOCK_LEN {
        if ELIGIBLE[i] {
            n += 1;
        }
        i += 1;
    }
    n
}

/// Distribute `payload_len` bits over the eligible positions.
///
/// Returns one capacity per natural position; entries are nonzero only at
/// eligible positions and sum to `payload_len` exactly. The remainder goes
/// to the earliest eligible positions encountered in scan order.
///
/// Callers must keep `payload_len <= MAX_PAYLOAD_BITS`; beyond that a
/// position's bit window would overflow the 8-bit magnitude.
pub fn capacity_map(payload_len: usize) -> [usize; BLOCK_LEN] {
    debug_assert!(payload_len <= MAX_PAYLOAD_BITS);

    let base = payload_len / ELIGIBLE_COUNT;
    let remainder = payload_len % ELIGIBLE_COUNT;

    let mut map = [0usize; BLOCK_LEN];
    let mut assigned = 0;
    for &pos in &SCAN {
        if ELIGIBLE[pos] {
            map[pos] = base + usize::from(assigned < remainder);
            assigned += 1;
        }
    }
    map
}
