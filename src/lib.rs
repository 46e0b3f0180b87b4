// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # evomark
//!
//! Genetic-algorithm optimizer for DCT-domain watermark embedding in a
//! single 8×8 image block. The deterministic codec maps payload bits onto
//! fixed coefficient positions (`codec` module); the search engine (`ga`
//! module) then hunts for a per-pixel spatial perturbation whose
//! embed → inverse-transform → perturb → re-transform → extract round trip
//! recovers as many payload bits as possible, using the codec itself as the
//! fitness oracle.
//!
//! Single block, fixed embedding scheme, no robustness against compression
//! or geometric attack — the sole objective is bit-survival fidelity.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use evomark::{GeneticSearch, ImageBlock, RunOutcome, SearchConfig};
//!
//! let block = ImageBlock::from_slice(&samples, 8, 8)?;
//! let payload: Vec<bool> = "1101".chars().map(|c| c == '1').collect();
//! let mut search = GeneticSearch::new(&block, &payload, SearchConfig::default(), 42)?;
//! if let RunOutcome::Solved { generations } = search.run() {
//!     let (watermarked, _) = search.watermarked_block();
//!     println!("solved in {generations} generations: {watermarked:?}");
//! }
//! ```

pub mod block;
pub mod codec;
pub mod error;
pub mod ga;
pub mod psnr;
pub mod transform;

pub use block::ImageBlock;
pub use codec::{capacity_map, embed, extract, ELIGIBLE_COUNT, MAX_PAYLOAD_BITS};
pub use error::{Result, WatermarkError};
pub use ga::{
    ChromosomeInit, GeneticSearch, Individual, Population, RunOutcome, SearchConfig,
    SearchState,
};
pub use psnr::{block_psnr, psnr};
pub use transform::{dct2, idct2};
