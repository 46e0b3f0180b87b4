// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Diagonal scan order over the 8×8 coefficient grid.
//!
//! Maps a scan index (0–63) to a natural row-major position (0–63). The
//! walk visits anti-diagonals of increasing frequency; within each diagonal
//! the column index descends while the row index ascends, so every diagonal
//! is traversed bottom-left to top-right:
//!
//! ```text
//! 1 3 6 . . . . .
//! 2 5 9 . . . . .
//! 4 8 . . . . . .
//! 7 . . . . . . .
//! ```
//!
//! Note this is *not* the alternating JPEG zigzag — the direction never
//! reverses. The DC position sits at scan index 0; it stays in the table but
//! never carries payload (the capacity mask excludes it).

use crate::block::BLOCK_LEN;

/// Maps scan index (0–63) to natural row-major index (0–63).
pub const SCAN: [usize; BLOCK_LEN] = build_scan();

const fn build_scan() -> [usize; BLOCK_LEN] {
    let mut table = [0usize; BLOCK_LEN];
    let mut i = 0;
    let mut sweep = 1;
    while sweep <= 16 {
        let mut cc = sweep;
        let mut cr = 1;
        while cc > 0 {
            if cc <= 8 && cr <= 8 {
                table[i] = (cc - 1) * 8 + (cr - 1);
                i += 1;
            }
            cc -= 1;
            cr += 1;
        }
        sweep += 1;
    }
    table
}
