//! Pairwise constraint map.
//!
//! Preferences are declared one direction at a time through a
//! [`PairMapBuilder`]. Building validates that every ordered pair of distinct
//! participants has been declared and folds both directions into a single
//! mutual score per unordered pair.
//!
//! # Example
//!
//! ```
//! use tableforge_core::PairMapBuilder;
//!
//! let mut builder = PairMapBuilder::new();
//! builder.add_preference("alice", "bob", 3).unwrap();
//! builder.add_preference("bob", "alice", -1).unwrap();
//!
//! let map = builder.build().unwrap();
//! assert_eq!(map.mutual_score("alice", "bob"), Ok(2));
//! assert_eq!(map.mutual_score("bob", "alice"), Ok(2));
//! ```

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::error::PairError;

/// Opaque participant identifier.
pub type Participant = String;

/// Signed happiness delta.
pub type Happiness = i64;

/// Order-independent key for an unordered pair of participants.
///
/// Holds the two participant positions smallest-first, so `(a, b)` and
/// `(b, a)` map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    /// Creates the canonical key for two participant positions.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

/// Collects directed preferences and validates them into a [`PairMap`].
#[derive(Debug, Clone, Default)]
pub struct PairMapBuilder {
    participants: IndexSet<Participant>,
    directed: HashMap<(usize, usize), Happiness>,
}

impl PairMapBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the happiness of `a` when seated next to `b`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::SelfPair`] if `a == b` and
    /// [`PairError::DuplicateEntry`] if `a -> b` was already recorded. The
    /// builder is left untouched on error.
    pub fn add_preference(
        &mut self,
        a: impl Into<Participant>,
        b: impl Into<Participant>,
        happiness: Happiness,
    ) -> Result<(), PairError> {
        let a = a.into();
        let b = b.into();

        if a == b {
            return Err(PairError::SelfPair { participant: a });
        }

        if let (Some(ia), Some(ib)) = (
            self.participants.get_index_of(&a),
            self.participants.get_index_of(&b),
        ) {
            if self.directed.contains_key(&(ia, ib)) {
                return Err(PairError::DuplicateEntry { from: a, to: b });
            }
        }

        let (ia, _) = self.participants.insert_full(a);
        let (ib, _) = self.participants.insert_full(b);
        self.directed.insert((ia, ib), happiness);
        Ok(())
    }

    /// Participants in order of first appearance.
    pub fn participants(&self) -> &IndexSet<Participant> {
        &self.participants
    }

    /// Number of directed entries recorded.
    pub fn entry_count(&self) -> usize {
        self.directed.len()
    }

    /// Validates the declared preferences and builds the mutual map.
    ///
    /// The builder stays usable, so further preferences can be added and a
    /// larger map built later.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::MissingEntry`] naming the first ordered pair
    /// (in participant order) without a declared score, and
    /// [`PairError::ScoreOverflow`] if both directions of a pair do not sum
    /// within `i64`.
    pub fn build(&self) -> Result<PairMap, PairError> {
        let n = self.participants.len();
        let mut mutual = HashMap::with_capacity(n * n.saturating_sub(1) / 2);

        for ia in 0..n {
            for ib in 0..n {
                if ia == ib {
                    continue;
                }
                let ab = self.directed_score(ia, ib)?;
                let ba = self.directed_score(ib, ia)?;
                let score = ab.checked_add(ba).ok_or_else(|| PairError::ScoreOverflow {
                    a: self.participants[ia].clone(),
                    b: self.participants[ib].clone(),
                })?;
                mutual.insert(PairKey::new(ia, ib), score);
            }
        }

        Ok(PairMap {
            participants: self.participants.clone(),
            mutual,
        })
    }

    fn directed_score(&self, from: usize, to: usize) -> Result<Happiness, PairError> {
        self.directed
            .get(&(from, to))
            .copied()
            .ok_or_else(|| PairError::MissingEntry {
                from: self.participants[from].clone(),
                to: self.participants[to].clone(),
            })
    }
}

/// Immutable mutual happiness for every pair of participants.
///
/// Built by [`PairMapBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMap {
    participants: IndexSet<Participant>,
    mutual: HashMap<PairKey, Happiness>,
}

impl PairMap {
    /// Participants in order of first appearance.
    pub fn participants(&self) -> &IndexSet<Participant> {
        &self.participants
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns true if no participant was declared.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Returns true if `participant` is part of the map.
    pub fn contains(&self, participant: &str) -> bool {
        self.participants.contains(participant)
    }

    /// Combined happiness of `a` and `b` when seated next to each other.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::UnknownPair`] if either participant is unknown or
    /// `a == b`.
    pub fn mutual_score(&self, a: &str, b: &str) -> Result<Happiness, PairError> {
        self.participants
            .get_index_of(a)
            .zip(self.participants.get_index_of(b))
            .and_then(|(ia, ib)| self.mutual.get(&PairKey::new(ia, ib)))
            .copied()
            .ok_or_else(|| PairError::UnknownPair {
                a: a.to_string(),
                b: b.to_string(),
            })
    }
}
