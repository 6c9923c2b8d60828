//! TableForge Core - Core types for seating and serving-order puzzles
//!
//! This crate provides the fundamental building blocks for TableForge:
//! - Participant and pair types
//! - Lazy permutation generators (linear and circular)
//! - The pairwise constraint map and its validating builder
//! - Error types shared by every engine

pub mod error;
pub mod pair;
pub mod permutation;


pub use error::{DagError, PairError, Result, TableForgeError};
pub use pair::{Happiness, PairKey, PairMap, PairMapBuilder, Participant};
pub use permutation::{circular_permutations, factorial, permutations, CircularPermutations, Permutations};
