//! Timing of the phases of a run, reported through `tracing`.

use std::time::{Duration, Instant};

use tracing::info;

pub struct SubEventTimer {
    total_timer: Instant,
}

impl SubEventTimer {

    pub fn new_timer() -> SubEventTimer {
        SubEventTimer { total_timer: Instant::now() }
    }

    /// Runs `func` and logs how long it took next to the total so far.
    pub fn time_subevent<G, F: FnOnce() -> G>(&self, event: &str, func: F) -> G {
        let timer = Instant::now();
        let res = func();
        let elapsed = timer.elapsed();
        info!(phase = event, elapsed = ?elapsed, total = ?self.elapsed(), "phase finished");
        res
    }

    pub fn elapsed(&self) -> Duration {
        self.total_timer.elapsed()
    }
}
