// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Generation loop: selection, crossover, mutation, replacement.
//!
//! The search runs until the population's best fitness clears the threshold
//! `payload_len × (100 − critical_value) / 100`, the generation budget is
//! spent, or cancellation is requested through [`progress`]. All randomness
//! comes from one caller-seeded ChaCha20 PRNG, so a (seed, config, input)
//! triple fully determines the run. Random points are drawn as `u32` and
//! cast so 32-bit and 64-bit targets consume identical PRNG entropy.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::block::ImageBlock;
use crate::codec::MAX_PAYLOAD_BITS;
use crate::error::{Result, WatermarkError};
use crate::ga::individual::Individual;
use crate::ga::population::Population;
use crate::ga::{progress, ChromosomeInit, CHROMOSOME_LEN};

/// Default number of individuals per population.
pub const DEFAULT_POPULATION_SIZE: usize = 5;

/// Default allowed shortfall from a perfect score, in percent.
/// 10 means the search stops at 90% of the payload length.
pub const DEFAULT_CRITICAL_VALUE: u32 = 10;

/// Search parameters. `Default` carries the reference constants plus an
/// explicit generation budget (the convergence loop itself has no bound).
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub population_size: usize,
    /// Two-point crossover and doubled mutation when set; otherwise the
    /// degenerate single-point mode (prefix swap).
    pub two_point_crossover: bool,
    /// Allowed shortfall from a perfect score, in percent (0–100).
    pub critical_value: u32,
    /// Hard generation cap; exceeding it yields
    /// [`RunOutcome::BudgetExhausted`] rather than looping unboundedly.
    pub max_generations: u64,
    pub chromosome_init: ChromosomeInit,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            two_point_crossover: true,
            critical_value: DEFAULT_CRITICAL_VALUE,
            max_generations: 100_000,
            chromosome_init: ChromosomeInit::RoundTripDiff,
        }
    }
}

/// Search lifecycle. `Solved`, `Exhausted` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Solved,
    Exhausted,
    Cancelled,
}

/// How a call to [`GeneticSearch::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fitness threshold was met at the given generation count.
    Solved { generations: u64 },
    /// The generation budget was spent before the threshold was met.
    BudgetExhausted { generations: u64 },
    /// Cancellation was requested through the progress module.
    Cancelled { generations: u64 },
}

/// Genetic search over the 64-bit perturbation space of one block.
#[derive(Debug)]
pub struct GeneticSearch<'a> {
    payload: &'a [bool],
    config: SearchConfig,
    population: Population<'a>,
    rng: ChaCha20Rng,
    generation: u64,
    state: SearchState,
}

impl<'a> GeneticSearch<'a> {
    /// Set up a search over `block` and `payload` with an explicit seed.
    ///
    /// # Errors
    /// - [`WatermarkError::PayloadTooLarge`] if the payload exceeds the
    ///   block's embedding capacity.
    /// - [`WatermarkError::EmptyPopulation`] for a zero population size.
    pub fn new(
        block: &'a ImageBlock,
        payload: &'a [bool],
        config: SearchConfig,
        seed: u64,
    ) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_BITS {
            return Err(WatermarkError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_BITS,
            });
        }
        if config.population_size == 0 {
            return Err(WatermarkError::EmptyPopulation);
        }
        assert!(config.critical_value <= 100, "critical_value is a percentage");

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let population = Population::new(
            block,
            payload,
            config.population_size,
            config.chromosome_init,
            &mut rng,
        );
        Ok(Self {
            payload,
            config,
            population,
            rng,
            generation: 0,
            state: SearchState::Initialized,
        })
    }

    /// Run generations until the threshold, the budget, or cancellation.
    pub fn run(&mut self) -> RunOutcome {
        self.state = SearchState::Running;
        progress::init(self.config.max_generations);

        self.population.calculate_fitness();
        while (self.population.fittest_score() as f64) < self.threshold() {
            if progress::is_cancelled() {
                self.state = SearchState::Cancelled;
                return RunOutcome::Cancelled {
                    generations: self.generation,
                };
            }
            if self.generation >= self.config.max_generations {
                self.state = SearchState::Exhausted;
                return RunOutcome::BudgetExhausted {
                    generations: self.generation,
                };
            }
            self.step();
            progress::publish(self.generation, self.population.fittest_score());
        }

        self.state = SearchState::Solved;
        RunOutcome::Solved {
            generations: self.generation,
        }
    }

    /// Advance one generation: select, recombine, mutate, replace, rescore.
    ///
    /// The two winners are owned clones scoped to this call; mutating them
    /// cannot corrupt population slots before the replacement step.
    pub fn step(&mut self) {
        let mut fittest = self.population.select_fittest();
        let mut second = self.population.select_second_fittest();

        self.crossover(&mut fittest, &mut second);

        // Reference mutation gate, reproduced literally (≈5/7, not 5%).
        if self.rng.gen_range(0..=100u32) % 7 < 5 {
            self.mutate(&mut fittest, &mut second);
        }

        fittest.calculate_fitness();
        second.calculate_fitness();
        let offspring = if fittest.fitness() > second.fitness() {
            fittest
        } else {
            second
        };

        let slot = self.population.least_fittest_idx();
        self.population.replace(slot, offspring);

        self.population.calculate_fitness();
        self.generation += 1;
    }

    /// The solved watermarked block, if any, plus the generation count.
    pub fn watermarked_block(&mut self) -> (Option<ImageBlock>, u64) {
        if self.state == SearchState::Solved {
            let block = self.population.select_fittest().watermarked_block();
            (Some(block), self.generation)
        } else {
            (None, self.generation)
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn population(&self) -> &Population<'a> {
        &self.population
    }

    fn threshold(&self) -> f64 {
        self.payload.len() as f64 * f64::from(100 - self.config.critical_value) / 100.0
    }

    /// Swap a chromosome range between the two winners. Two-point mode swaps
    /// `[p1, p2)` for two sorted random points; single-point mode keeps the
    /// reference's literal behavior and swaps the prefix `[0, p2)`.
    fn crossover(&mut self, a: &mut Individual<'a>, b: &mut Individual<'a>) {
        let (p1, p2) = if self.config.two_point_crossover {
            let r1 = self.random_point();
            let r2 = self.random_point();
            (r1.min(r2), r1.max(r2))
        } else {
            (0, self.random_point())
        };
        for idx in p1..p2 {
            core::mem::swap(&mut a.chromosome_mut()[idx], &mut b.chromosome_mut()[idx]);
        }
    }

    /// Flip one random bit in each winner; twice in two-point mode.
    fn mutate(&mut self, a: &mut Individual<'a>, b: &mut Individual<'a>) {
        self.flip_pair(a, b);
        if self.config.two_point_crossover {
            self.flip_pair(a, b);
        }
    }

    fn flip_pair(&mut self, a: &mut Individual<'a>, b: &mut Individual<'a>) {
        let pa = self.random_point();
        let pb = self.random_point();
        a.chromosome_mut()[pa] ^= 1;
        b.chromosome_mut()[pb] ^= 1;
    }

    fn random_point(&mut self) -> usize {
        self.rng.gen_range(0..CHROMOSOME_LEN as u32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_block() -> ImageBlock {
        ImageBlock::from_rows([
            [202, 203, 205, 207, 208, 207, 206, 206],
            [203, 204, 206, 207, 208, 208, 207, 207],
            [205, 205, 207, 208, 209, 209, 208, 208],
            [206, 207, 208, 208, 209, 209, 209, 209],
            [208, 207, 207, 208, 208, 208, 209, 209],
            [208, 207, 207, 206, 206, 207, 208, 209],
            [208, 207, 205, 205, 205, 206, 207, 208],
            [207, 206, 205, 204, 204, 205, 206, 207],
        ])
    }

    #[test]
    fn rejects_oversized_payload() {
        let block = gradient_block();
        let payload = vec![true; MAX_PAYLOAD_BITS + 1];
        let err =
            GeneticSearch::new(&block, &payload, SearchConfig::default(), 0).unwrap_err();
        assert_eq!(
            err,
            WatermarkError::PayloadTooLarge {
                len: MAX_PAYLOAD_BITS + 1,
                max: MAX_PAYLOAD_BITS,
            }
        );
    }

    #[test]
    fn rejects_empty_population() {
        let block = gradient_block();
        let payload = vec![true; 10];
        let config = SearchConfig {
            population_size: 0,
            ..SearchConfig::default()
        };
        let err = GeneticSearch::new(&block, &payload, config, 0).unwrap_err();
        assert_eq!(err, WatermarkError::EmptyPopulation);
    }

    #[test]
    fn no_block_before_solved() {
        let block = gradient_block();
        let payload: Vec<bool> = (0..37).map(|i| i % 2 == 0).collect();
        let mut search =
            GeneticSearch::new(&block, &payload, SearchConfig::default(), 7).unwrap();
        assert_eq!(search.state(), SearchState::Initialized);
        let (maybe_block, generations) = search.watermarked_block();
        assert!(maybe_block.is_none());
        assert_eq!(generations, 0);
    }

    #[test]
    fn step_advances_one_generation() {
        let block = gradient_block();
        let payload: Vec<bool> = (0..37).map(|i| i % 3 == 0).collect();
        let mut search =
            GeneticSearch::new(&block, &payload, SearchConfig::default(), 11).unwrap();
        search.population.calculate_fitness();
        let before = search.population().fittest_score();
        search.step();
        assert_eq!(search.generation(), 1);
        assert!(search.population().fittest_score() >= before);
        assert!(search.population().fittest_score() <= payload.len());
    }

    #[test]
    fn same_seed_same_trajectory() {
        let block = gradient_block();
        let payload: Vec<bool> = (0..37).map(|i| (i * 5) % 7 < 4).collect();

        let trajectory = |seed: u64| -> Vec<usize> {
            let mut search =
                GeneticSearch::new(&block, &payload, SearchConfig::default(), seed).unwrap();
            search.population.calculate_fitness();
            (0..10)
                .map(|_| {
                    search.step();
                    search.population().fittest_score()
                })
                .collect()
        };

        assert_eq!(trajectory(42), trajectory(42));
    }
}
