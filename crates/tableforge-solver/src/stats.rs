//! Search statistics.
//!
//! Stack-allocated counters for the exhaustive seating search.

use std::time::{Duration, Instant};

/// Statistics for one seating search.
///
/// # Example
///
/// ```
/// use tableforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_arrangement();
/// stats.record_arrangement();
/// stats.record_improvement();
///
/// assert_eq!(stats.arrangements_evaluated, 2);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finish_time: Option<Instant>,
    /// Arrangements scored.
    pub arrangements_evaluated: u64,
    /// Times a strictly better arrangement replaced the best so far.
    pub improvements: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finish_time = None;
    }

    /// Marks the end of the search, freezing [`elapsed`](Self::elapsed).
    pub fn finish(&mut self) {
        self.finish_time = Some(Instant::now());
    }

    /// Returns the time spent searching.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Records one scored arrangement.
    pub fn record_arrangement(&mut self) {
        self.arrangements_evaluated += 1;
    }

    /// Records `count` scored arrangements at once.
    pub fn record_arrangements(&mut self, count: u64) {
        self.arrangements_evaluated += count;
    }

    /// Records an improvement of the best arrangement.
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Returns the arrangement evaluation rate.
    pub fn arrangements_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.arrangements_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}
