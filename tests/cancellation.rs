// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Cooperative cancellation of a running search.
//!
//! Kept in its own integration binary: the progress module is
//! process-global, so a cancel request here must not race with other tests
//! driving their own searches.

use std::time::Duration;

use evomark::ga::progress;
use evomark::{GeneticSearch, ImageBlock, RunOutcome, SearchConfig, SearchState};

#[test]
fn cancel_request_stops_a_running_search() {
    let mut samples = [0u8; 64];
    for (i, s) in samples.iter_mut().enumerate() {
        *s = (190 + (i * 7) % 40) as u8;
    }
    let block = ImageBlock::new(samples);
    // Demanding a perfect score over a full-capacity payload keeps the
    // loop running until we cancel it.
    let payload: Vec<bool> = (0..102).map(|i| i % 2 == 0).collect();
    let config = SearchConfig {
        critical_value: 0,
        max_generations: u64::MAX,
        ..SearchConfig::default()
    };

    std::thread::scope(|scope| {
        let handle = scope.spawn(|| {
            let mut search = GeneticSearch::new(&block, &payload, config, 3).unwrap();
            let outcome = search.run();
            (outcome, search.state())
        });

        // Wait until the loop has visibly advanced past its own
        // progress::init, then request cancellation.
        while progress::get().0 == 0 {
            std::thread::sleep(Duration::from_millis(1));
        }
        progress::cancel();

        let (outcome, state) = handle.join().unwrap();
        assert!(
            matches!(outcome, RunOutcome::Cancelled { .. }),
            "unexpected outcome: {outcome:?}"
        );
        assert_eq!(state, SearchState::Cancelled);
    });
}
