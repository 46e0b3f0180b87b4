// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Genetic search over spatial perturbation masks.
//!
//! An [`Individual`] couples one 64-bit chromosome with the codec round trip
//! that scores it; a [`Population`] holds the ordered working set; the
//! [`GeneticSearch`] engine drives generations until the extraction fidelity
//! threshold is met (or the budget runs out). [`progress`] exposes the loop
//! to outside observers.

pub mod engine;
pub mod individual;
pub mod population;
pub mod progress;

/// Chromosome length: one bit per pixel of the 8×8 block.
pub const CHROMOSOME_LEN: usize = crate::block::BLOCK_LEN;

/// How the first generation's chromosomes are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromosomeInit {
    /// Mark the pixels the naive embed → inverse round trip already moved.
    /// Starts the search next to the perturbation it is trying to repair.
    RoundTripDiff,
    /// Uniform random 0/1 mask.
    Random,
}

pub use engine::{
    GeneticSearch, RunOutcome, SearchConfig, SearchState, DEFAULT_CRITICAL_VALUE,
    DEFAULT_POPULATION_SIZE,
};
pub use individual::Individual;
pub use population::Population;
