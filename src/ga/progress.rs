// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Global search progress tracking.
//!
//! Uses atomics so another thread can poll the generation counter and best
//! score, or request cancellation, while the search loop runs. The engine
//! checks the cancellation flag at generation boundaries only; a cancelled
//! run ends with a distinct outcome, not an error, since the partially
//! evolved population is still valid.

use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

static GENERATION: AtomicU64 = AtomicU64::new(0);
static BUDGET: AtomicU64 = AtomicU64::new(0);
static BEST_SCORE: AtomicUsize = AtomicUsize::new(0);
static CANCELLED: AtomicBool = AtomicBool::new(false);

/// Reset progress and set the generation budget.
/// Also clears the cancellation flag so a fresh run starts clean.
pub fn init(budget: u64) {
    CANCELLED.store(false, Ordering::Relaxed);
    GENERATION.store(0, Ordering::Relaxed);
    BEST_SCORE.store(0, Ordering::Relaxed);
    BUDGET.store(budget, Ordering::Relaxed);
}

/// Publish the state after one generation.
pub fn publish(generation: u64, best_score: usize) {
    GENERATION.store(generation, Ordering::Relaxed);
    BEST_SCORE.store(best_score, Ordering::Relaxed);
}

/// Read the current (generation, budget, best score).
pub fn get() -> (u64, u64, usize) {
    (
        GENERATION.load(Ordering::Relaxed),
        BUDGET.load(Ordering::Relaxed),
        BEST_SCORE.load(Ordering::Relaxed),
    )
}

/// Request cancellation of the running search.
pub fn cancel() {
    CANCELLED.store(true, Ordering::Relaxed);
}

/// Returns `true` if cancellation has been requested.
pub fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::Relaxed)
}
