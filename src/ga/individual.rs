// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! A single candidate solution: one chromosome and its fitness.

use rand::Rng;

use crate::block::{BLOCK_LEN, ImageBlock};
use crate::codec::{capacity_map, embed, extract};
use crate::ga::ChromosomeInit;
use crate::transform::{dct2, idct2};

/// One candidate perturbation of the watermarked block.
///
/// Owns the block's DCT coefficients (computed once at construction), the
/// per-position capacity map, a 64-entry 0/1 chromosome applied as an
/// additive spatial perturbation, and the last computed fitness.
///
/// Fitness is *not* kept in sync with chromosome edits; callers mutate the
/// chromosome and then call [`calculate_fitness`](Self::calculate_fitness).
/// `Clone` shares the block/payload borrows and deep-copies chromosome and
/// fitness, which is exactly what selection needs before mutating a winner.
#[derive(Debug, Clone)]
pub struct Individual<'a> {
    block: &'a ImageBlock,
    payload: &'a [bool],
    coeffs: [f64; BLOCK_LEN],
    capacity: [usize; BLOCK_LEN],
    chromosome: [u8; BLOCK_LEN],
    fitness: usize,
}

impl<'a> Individual<'a> {
    /// Create an individual with its chromosome seeded per `init`.
    pub fn new<R: Rng>(
        block: &'a ImageBlock,
        payload: &'a [bool],
        init: ChromosomeInit,
        rng: &mut R,
    ) -> Self {
        let coeffs = dct2(&block.to_f64());
        let capacity = capacity_map(payload.len());
        let mut indiv = Self {
            block,
            payload,
            coeffs,
            capacity,
            chromosome: [0u8; BLOCK_LEN],
            fitness: 0,
        };
        indiv.chromosome = match init {
            ChromosomeInit::RoundTripDiff => indiv.round_trip_diff_chromosome(),
            ChromosomeInit::Random => {
                let mut c = [0u8; BLOCK_LEN];
                for g in c.iter_mut() {
                    *g = rng.gen_range(0..2u32) as u8;
                }
                c
            }
        };
        indiv
    }

    /// Run the full embed → inverse → perturb → forward → extract round trip
    /// and score how many payload bits survived.
    pub fn calculate_fitness(&mut self) {
        let perturbed = self.perturbed_spatial();
        let mut truncated = [0.0f64; BLOCK_LEN];
        for (t, &v) in truncated.iter_mut().zip(perturbed.iter()) {
            *t = v.trunc();
        }
        let extracted = extract(&dct2(&truncated), &self.capacity);

        self.fitness = self
            .payload
            .iter()
            .zip(extracted.iter())
            .filter(|(a, b)| a == b)
            .count();
    }

    /// Last computed fitness, in `0..=payload.len()`.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn chromosome(&self) -> &[u8; BLOCK_LEN] {
        &self.chromosome
    }

    pub fn chromosome_mut(&mut self) -> &mut [u8; BLOCK_LEN] {
        &mut self.chromosome
    }

    /// The watermarked spatial block under this chromosome, truncated to u8
    /// with wrapping conversion.
    pub fn watermarked_block(&self) -> ImageBlock {
        let perturbed = self.perturbed_spatial();
        let mut samples = [0u8; BLOCK_LEN];
        for (s, &v) in samples.iter_mut().zip(perturbed.iter()) {
            *s = v as i64 as u8;
        }
        ImageBlock::new(samples)
    }

    /// Embed the payload, return to the spatial domain, and add the
    /// chromosome as a per-pixel 0/1 perturbation.
    fn perturbed_spatial(&self) -> [f64; BLOCK_LEN] {
        let watermarked = embed(&self.coeffs, &self.capacity, self.payload);
        let mut spatial = idct2(&watermarked);
        for (v, &g) in spatial.iter_mut().zip(self.chromosome.iter()) {
            *v += f64::from(g);
        }
        spatial
    }

    /// Test hook: overwrite the fitness without running the round trip.
    #[cfg(test)]
    pub(crate) fn force_fitness(&mut self, fitness: usize) {
        self.fitness = fitness;
    }

    /// Seed the chromosome from the naive round trip: mark every pixel the
    /// unperturbed embed → inverse already moved away from the original.
    fn round_trip_diff_chromosome(&self) -> [u8; BLOCK_LEN] {
        let watermarked = embed(&self.coeffs, &self.capacity, self.payload);
        let spatial = idct2(&watermarked);
        let mut chromosome = [0u8; BLOCK_LEN];
        for (i, g) in chromosome.iter_mut().enumerate() {
            let round_tripped = spatial[i].trunc() as i64;
            *g = u8::from(round_tripped != i64::from(self.block.samples()[i]));
        }
        chromosome
    }
}
