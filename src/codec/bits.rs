// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! LSB-first conversions between a byte and an 8-entry bit vector.
//!
//! The codec addresses coefficient magnitudes as bit vectors with bit 0 at
//! index 0 (least significant first), so a bit window `[shift, shift + c)`
//! selects the magnitude bits `2^shift .. 2^(shift+c)`.

/// Expand a byte into 8 bits, least significant first.
pub fn byte_to_bits(value: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, b) in bits.iter_mut().enumerate() {
        *b = (value >> i) & 1 == 1;
    }
    bits
}

/// Collapse 8 LSB-first bits back into a byte.
pub fn bits_to_byte(bits: &[bool; 8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (i, &b)| acc | (u8::from(b) << i))
}
