// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Example: watermark one 8×8 block and report the result.
//!
//! Runs the genetic search over a smooth gradient block with a fixed 37-bit
//! payload, then prints the watermarked block, its PSNR against the
//! original, and the DCT coefficients of the result.
//!
//! Usage: `watermark_block [seed]` (default seed 42).

use evomark::{block_psnr, dct2, GeneticSearch, ImageBlock, RunOutcome, SearchConfig};

const WATERMARK: &str = "1101010011011101100001100000110111111";

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("seed must be an integer"))
        .unwrap_or(42);

    let block = ImageBlock::from_rows([
        [202, 203, 205, 207, 208, 207, 206, 206],
        [203, 204, 206, 207, 208, 208, 207, 207],
        [205, 205, 207, 208, 209, 209, 208, 208],
        [206, 207, 208, 208, 209, 209, 209, 209],
        [208, 207, 207, 208, 208, 208, 209, 209],
        [208, 207, 207, 206, 206, 207, 208, 209],
        [208, 207, 205, 205, 205, 206, 207, 208],
        [207, 206, 205, 204, 204, 205, 206, 207],
    ]);
    let payload: Vec<bool> = WATERMARK.chars().map(|c| c == '1').collect();

    let config = SearchConfig {
        max_generations: 500_000,
        ..SearchConfig::default()
    };
    let mut search =
        GeneticSearch::new(&block, &payload, config, seed).expect("valid search input");

    println!(
        "Searching: {} payload bits, population of {}, seed {seed}",
        payload.len(),
        config.population_size
    );

    match search.run() {
        RunOutcome::Solved { generations } => {
            let (watermarked, _) = search.watermarked_block();
            let watermarked = watermarked.expect("solved search yields a block");

            println!("Solution found in generation {generations}");
            println!(
                "Fittest score: {}/{}",
                search.population().fittest_score(),
                payload.len()
            );
            println!(
                "\nWatermarked image block (PSNR: {:.2} dB):",
                block_psnr(&block, &watermarked)
            );
            for row in 0..8 {
                let cells: Vec<String> = (0..8)
                    .map(|col| format!("{:>3}", watermarked.get(row, col)))
                    .collect();
                println!("  [{}]", cells.join(", "));
            }

            println!("\nDCT of watermarked image block:");
            let coeffs = dct2(&watermarked.to_f64());
            for row in 0..8 {
                let cells: Vec<String> = (0..8)
                    .map(|col| format!("{:>9.3}", coeffs[row * 8 + col]))
                    .collect();
                println!("  [{}]", cells.join(", "));
            }
        }
        RunOutcome::BudgetExhausted { generations } => {
            eprintln!("No solution within {generations} generations");
            std::process::exit(1);
        }
        RunOutcome::Cancelled { generations } => {
            eprintln!("Cancelled at generation {generations}");
            std::process::exit(1);
        }
    }
}
