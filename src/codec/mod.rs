// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Deterministic watermark codec over 8×8 DCT coefficient blocks.
//!
//! The codec maps payload bits to fixed coefficient positions and back:
//!
//! - [`zigzag`]: diagonal scan order shared by allocation and embed/extract.
//! - [`capacity`]: payload-length distribution over the eligible positions.
//! - [`embed`] / [`extract`]: sign-aware bit-window read/write against each
//!   coefficient's 8-bit integer magnitude.
//!
//! Embed and extract are pure functions of (coefficients, capacity map);
//! there is no hidden state, so the genetic search can use extraction
//! directly as its fitness oracle.

pub mod bits;
pub mod capacity;
pub mod embed;
pub mod extract;
pub mod zigzag;

/// Bit offset of the payload window inside each coefficient's 8-bit
/// magnitude. Bits below the shift absorb rounding noise from the
/// transform round trip.
pub const EMBED_SHIFT: usize = 2;

pub use capacity::{capacity_map, ELIGIBLE, ELIGIBLE_COUNT, MAX_PAYLOAD_BITS};
pub use embed::embed;
pub use extract::extract;
