// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Ordered working set of individuals with selection and tie-break rules.
//!
//! Selection scans are non-strict, so on ties the *last* index holding the
//! extreme fitness wins — both for the fittest and the least fit. The
//! second-fittest scan reproduces the reference algorithm verbatim,
//! including its index-0 comparison baseline; see the unit tests for the
//! case where that baseline diverges from a sorted top-two.

use rand::Rng;
use rayon::prelude::*;

use crate::block::ImageBlock;
use crate::ga::individual::Individual;
use crate::ga::ChromosomeInit;

/// Fixed-size ordered collection of individuals plus a cached best score.
#[derive(Debug)]
pub struct Population<'a> {
    individuals: Vec<Individual<'a>>,
    fittest_score: usize,
}

impl<'a> Population<'a> {
    /// Create `size` individuals over the shared block and payload.
    pub fn new<R: Rng>(
        block: &'a ImageBlock,
        payload: &'a [bool],
        size: usize,
        init: ChromosomeInit,
        rng: &mut R,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(block, payload, init, rng))
            .collect();
        Self {
            individuals,
            fittest_score: 0,
        }
    }

    /// Recompute every individual's fitness, then refresh the cached best
    /// score. Individuals are independent, so the recompute fans out across
    /// the rayon pool; everything else stays serial.
    pub fn calculate_fitness(&mut self) {
        self.individuals
            .par_iter_mut()
            .for_each(|indiv| indiv.calculate_fitness());
        self.refresh_fittest_score();
    }

    /// Clone of the fittest individual; the last index wins ties.
    /// Also refreshes the cached fittest score.
    pub fn select_fittest(&mut self) -> Individual<'a> {
        let idx = self.fittest_idx();
        self.fittest_score = self.individuals[idx].fitness();
        self.individuals[idx].clone()
    }

    /// Clone of the runner-up under the reference two-tracker scan.
    ///
    /// Both trackers start at index 0, so when index 0 holds the maximum the
    /// scan can return it instead of the true runner-up. Kept as specified;
    /// do not "fix" without flagging the behavior change.
    pub fn select_second_fittest(&self) -> Individual<'a> {
        assert!(
            !self.individuals.is_empty(),
            "selection on an empty population"
        );
        let mut best = 0usize;
        let mut second = 0usize;
        for (idx, indiv) in self.individuals.iter().enumerate() {
            if indiv.fitness() > self.individuals[best].fitness() {
                second = best;
                best = idx;
            } else if indiv.fitness() > self.individuals[second].fitness() {
                second = idx;
            }
        }
        self.individuals[second].clone()
    }

    /// Index of the fittest individual; the last index wins ties.
    pub fn fittest_idx(&self) -> usize {
        assert!(
            !self.individuals.is_empty(),
            "selection on an empty population"
        );
        let mut max_fit = None;
        let mut max_idx = 0usize;
        for (idx, indiv) in self.individuals.iter().enumerate() {
            if max_fit.map_or(true, |m| indiv.fitness() >= m) {
                max_fit = Some(indiv.fitness());
                max_idx = idx;
            }
        }
        max_idx
    }

    /// Index of the least-fit individual; the last index wins ties.
    pub fn least_fittest_idx(&self) -> usize {
        assert!(
            !self.individuals.is_empty(),
            "selection on an empty population"
        );
        let mut min_fit = None;
        let mut min_idx = 0usize;
        for (idx, indiv) in self.individuals.iter().enumerate() {
            if min_fit.map_or(true, |m| indiv.fitness() <= m) {
                min_fit = Some(indiv.fitness());
                min_idx = idx;
            }
        }
        min_idx
    }

    /// Overwrite one slot wholesale. The replacement step of a generation.
    pub fn replace(&mut self, idx: usize, indiv: Individual<'a>) {
        self.individuals[idx] = indiv;
    }

    /// Cached score of the fittest individual, refreshed by
    /// [`calculate_fitness`](Self::calculate_fitness) and
    /// [`select_fittest`](Self::select_fittest).
    pub fn fittest_score(&self) -> usize {
        self.fittest_score
    }

    pub fn individuals(&self) -> &[Individual<'a>] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    fn refresh_fittest_score(&mut self) {
        let idx = self.fittest_idx();
        self.fittest_score = self.individuals[idx].fitness();
    }
}
