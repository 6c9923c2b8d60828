//! Exhaustive circular seating search.
//!
//! A table is scored as the sum of the mutual scores of every pair of
//! neighbours, the last seat being next to the first. The optimizer walks all
//! `(N-1)!` circular arrangements of the guests, pinning the first guest, and
//! keeps the happiest. This is intentionally exhaustive and only practical
//! for small tables.
//!
//! # Example
//!
//! ```
//! use tableforge_core::PairMapBuilder;
//! use tableforge_solver::seating::{best_arrangement, weakest_pair};
//!
//! let mut builder = PairMapBuilder::new();
//! for (a, b, h) in [("a", "b", 1), ("b", "a", 1), ("a", "c", 5), ("c", "a", 5), ("b", "c", -2), ("c", "b", -2)] {
//!     builder.add_preference(a, b, h).unwrap();
//! }
//! let map = builder.build().unwrap();
//!
//! let best = best_arrangement(&map).unwrap();
//! assert_eq!(best.happiness, 2 + 10 - 4);
//!
//! let weakest = weakest_pair(&best.seating, &map).unwrap().unwrap();
//! assert_eq!(weakest.happiness, -4);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{ParallelBridge, ParallelIterator};
use serde::{Deserialize, Serialize};
use tableforge_config::{SearchMode, SeatingConfig};
use tableforge_core::{
    circular_permutations, factorial, Happiness, PairError, PairMap, PairMapBuilder, Participant,
};
use tracing::{debug, info, warn};

use crate::stats::SearchStats;

/// Tables larger than this take noticeably long to search.
const LARGE_TABLE: usize = 10;

/// A circular table and its total happiness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingArrangement {
    /// Guests in seating order; the last guest sits next to the first.
    pub seating: Vec<Participant>,
    /// Sum of the mutual scores of all neighbours.
    pub happiness: Happiness,
}

/// The pair of neighbours contributing the least to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakestPair {
    pub person_a: Participant,
    pub person_b: Participant,
    pub happiness: Happiness,
    /// Position of `person_a`; `person_b` sits at `index + 1` (wrapping).
    pub index: usize,
}

/// A table after the host joined it between the weakest pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedTable {
    pub arrangement: SeatingArrangement,
    /// The neighbours the host now sits between, if there were any.
    pub displaced: Option<WeakestPair>,
    /// Guest map extended with zero-score entries for the host.
    pub map: PairMap,
}

/// The guest whose move to the kids' table leaves the happiest table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KidsTableChoice {
    pub guest: Participant,
    /// The table without `guest`.
    pub arrangement: SeatingArrangement,
    /// Happiness gained (positive) or lost (negative) by the move.
    pub change: Happiness,
}

/// Result of a seating search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub arrangement: SeatingArrangement,
    pub stats: SearchStats,
}

/// Scores a circular table.
///
/// An empty table scores 0. Every guest must be part of `map`; a single guest
/// sits next to themselves, which is never part of a map.
///
/// # Errors
///
/// Returns [`PairError::UnknownPair`] for neighbours missing from `map` and
/// [`PairError::ScoreOverflow`] if the total leaves the `i64` range.
pub fn arrangement_score<S: AsRef<str>>(seating: &[S], map: &PairMap) -> Result<Happiness, PairError> {
    neighbours(seating).try_fold(0, |total: Happiness, (_, a, b)| {
        let score = map.mutual_score(a, b)?;
        total
            .checked_add(score)
            .ok_or_else(|| PairError::ScoreOverflow {
                a: a.to_string(),
                b: b.to_string(),
            })
    })
}

/// Finds the neighbours with the lowest mutual score.
///
/// Ties go to the lowest position. Returns `None` for an empty table.
///
/// # Errors
///
/// Returns [`PairError::UnknownPair`] for neighbours missing from `map`.
pub fn weakest_pair<S: AsRef<str>>(
    seating: &[S],
    map: &PairMap,
) -> Result<Option<WeakestPair>, PairError> {
    let mut weakest: Option<WeakestPair> = None;

    for (index, a, b) in neighbours(seating) {
        let happiness = map.mutual_score(a, b)?;
        if weakest.as_ref().map_or(true, |w| happiness < w.happiness) {
            weakest = Some(WeakestPair {
                person_a: a.to_string(),
                person_b: b.to_string(),
                happiness,
                index,
            });
        }
    }

    Ok(weakest)
}

/// Finds the happiest table with the default sequential search.
pub fn best_arrangement(map: &PairMap) -> Result<SeatingArrangement, PairError> {
    SeatingOptimizer::default().best_arrangement(map)
}

/// Exhaustive seating search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatingOptimizer {
    mode: SearchMode,
}

impl SeatingOptimizer {
    /// Creates an optimizer with the given search mode.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Creates an optimizer from the seating configuration.
    pub fn from_config(config: &SeatingConfig) -> Self {
        Self::new(config.search_mode)
    }

    /// Returns the search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Finds the happiest table.
    ///
    /// Which optimum is returned when several tables tie is unspecified.
    pub fn best_arrangement(&self, map: &PairMap) -> Result<SeatingArrangement, PairError> {
        self.solve(map).map(|result| result.arrangement)
    }

    /// Finds the happiest table and reports search statistics.
    ///
    /// The first participant of `map` is pinned to seat 0; every circular
    /// arrangement of the others is scored. An empty map yields an empty
    /// table with happiness 0.
    pub fn solve(&self, map: &PairMap) -> Result<SearchResult, PairError> {
        let participants: Vec<Participant> = map.participants().iter().cloned().collect();
        let participant_count = participants.len();
        let arrangement_count = factorial(participant_count.saturating_sub(1)).unwrap_or(usize::MAX);

        let mut stats = SearchStats::default();
        stats.start();

        info!(
            event = "search_start",
            participant_count = participant_count as u64,
            arrangement_count = arrangement_count as u64,
            mode = ?self.mode,
        );
        if participant_count > LARGE_TABLE {
            warn!(
                participant_count = participant_count as u64,
                "exhaustive seating search over a large table"
            );
        }

        let arrangement = if participants.is_empty() {
            SeatingArrangement::default()
        } else {
            match self.mode {
                SearchMode::Sequential => search_sequential(participants, map, &mut stats)?,
                SearchMode::Parallel => search_parallel(participants, map, &mut stats)?,
            }
        };

        stats.finish();
        info!(
            event = "search_end",
            happiness = arrangement.happiness,
            arrangements = stats.arrangements_evaluated,
            improvements = stats.improvements,
            rate = stats.arrangements_per_second(),
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok(SearchResult { arrangement, stats })
    }
}

fn search_sequential(
    participants: Vec<Participant>,
    map: &PairMap,
    stats: &mut SearchStats,
) -> Result<SeatingArrangement, PairError> {
    let mut best: Option<SeatingArrangement> = None;

    for seating in circular_permutations(participants) {
        stats.record_arrangement();
        let happiness = arrangement_score(&seating, map)?;

        if best.as_ref().map_or(true, |b| happiness > b.happiness) {
            stats.record_improvement();
            debug!(
                event = "new_best",
                arrangement = stats.arrangements_evaluated,
                happiness = happiness,
            );
            best = Some(SeatingArrangement { seating, happiness });
        }
    }

    Ok(best.unwrap_or_default())
}

fn search_parallel(
    participants: Vec<Participant>,
    map: &PairMap,
    stats: &mut SearchStats,
) -> Result<SeatingArrangement, PairError> {
    let evaluated = AtomicU64::new(0);

    let best = circular_permutations(participants)
        .par_bridge()
        .map(|seating| {
            evaluated.fetch_add(1, Ordering::Relaxed);
            arrangement_score(&seating, map).map(|happiness| SeatingArrangement { seating, happiness })
        })
        .try_reduce_with(|a, b| Ok(if b.happiness > a.happiness { b } else { a }))
        .transpose()?;

    stats.record_arrangements(evaluated.into_inner());
    if best.is_some() {
        stats.record_improvement();
    }
    Ok(best.unwrap_or_default())
}

/// Seats the host between the weakest pair of `arrangement`.
///
/// Adds zero-score preferences between the host and every guest of `map` to
/// `builder`, builds the extended map and inserts the host right after the
/// first member of the weakest pair. The new happiness is the old happiness
/// minus the weakest pair's score.
///
/// # Errors
///
/// Fails with [`PairError::SelfPair`] or [`PairError::DuplicateEntry`] if the
/// host is already a guest, and with any error from scoring.
pub fn seat_host(
    builder: &mut PairMapBuilder,
    map: &PairMap,
    arrangement: &SeatingArrangement,
    host: &str,
) -> Result<HostedTable, PairError> {
    let displaced = weakest_pair(&arrangement.seating, map)?;

    for guest in map.participants() {
        builder.add_preference(host, guest.as_str(), 0)?;
        builder.add_preference(guest.as_str(), host, 0)?;
    }
    let extended = builder.build()?;

    let mut seating = arrangement.seating.clone();
    let position = displaced.as_ref().map_or(seating.len(), |pair| pair.index + 1);
    seating.insert(position, host.to_string());
    let happiness = match displaced {
        Some(_) => arrangement_score(&seating, &extended)?,
        None => 0,
    };

    debug!(
        event = "host_seated",
        host = host,
        position = position,
        happiness = happiness,
    );

    Ok(HostedTable {
        arrangement: SeatingArrangement { seating, happiness },
        displaced,
        map: extended,
    })
}

/// Picks the guest to send to the kids' table.
///
/// Every guest other than `host` is removed in turn and the remaining table
/// scored against `map`; the guest whose removal leaves the happiest table
/// is chosen, the earliest seat winning ties. Returns `None` when nobody but
/// the host is seated.
///
/// # Errors
///
/// Fails with any error from scoring, or with [`PairError::ScoreOverflow`]
/// if the happiness change does not fit in `i64`.
pub fn kids_table(
    arrangement: &SeatingArrangement,
    map: &PairMap,
    host: &str,
) -> Result<Option<KidsTableChoice>, PairError> {
    let mut choice: Option<KidsTableChoice> = None;

    for (position, guest) in arrangement.seating.iter().enumerate() {
        if guest == host {
            continue;
        }

        let mut seating = arrangement.seating.clone();
        seating.remove(position);
        let happiness = arrangement_score(&seating, map)?;

        if choice
            .as_ref()
            .map_or(true, |c| happiness > c.arrangement.happiness)
        {
            let change = happiness
                .checked_sub(arrangement.happiness)
                .ok_or_else(|| PairError::ScoreOverflow {
                    a: guest.clone(),
                    b: host.to_string(),
                })?;
            choice = Some(KidsTableChoice {
                guest: guest.clone(),
                arrangement: SeatingArrangement { seating, happiness },
                change,
            });
        }
    }

    if let Some(c) = &choice {
        debug!(event = "kids_table", guest = %c.guest, change = c.change);
    }
    Ok(choice)
}

/// Circular neighbours as `(index, seating[index], seating[index + 1 mod n])`.
fn neighbours<S: AsRef<str>>(seating: &[S]) -> impl Iterator<Item = (usize, &str, &str)> {
    let n = seating.len();
    (0..n).map(move |i| (i, seating[i].as_ref(), seating[(i + 1) % n].as_ref()))
}
