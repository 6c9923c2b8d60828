//! Error types for TableForge

use thiserror::Error;

/// Errors raised while declaring preferences or looking up mutual scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    /// A participant was paired with itself.
    #[error("defining the happiness of {participant} when seated next to itself is invalid")]
    SelfPair { participant: String },

    /// The same directed preference was declared twice.
    #[error("happiness of {from} when seated next to {to} is already defined")]
    DuplicateEntry { from: String, to: String },

    /// The declared preferences do not cover every ordered pair.
    #[error("happiness of {from} when seated next to {to} has not been defined")]
    MissingEntry { from: String, to: String },

    /// Adding scores together left the `i64` range.
    #[error("happiness score involving {a} and {b} overflows")]
    ScoreOverflow { a: String, b: String },

    /// A lookup named a pair that was never built into the map.
    #[error("pair ({a}, {b}) is not part of the constraint map")]
    UnknownPair { a: String, b: String },
}

/// Errors raised while building or leveling a precedence graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DagError {
    /// An edge named a parent that was never introduced.
    #[error("unknown parent node '{parent}' for child '{child}'")]
    UnknownParent { child: String, parent: String },

    /// Leveling pushed a node to a level no acyclic graph can reach.
    #[error("the directed graph is not acyclic: '{key}' reached level {level} with {node_count} nodes")]
    CycleDetected {
        key: String,
        level: usize,
        node_count: usize,
    },
}

/// Main error type for TableForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableForgeError {
    /// Error in the pairwise constraint map
    #[error("Seating error: {0}")]
    Pair(#[from] PairError),

    /// Error in the precedence graph
    #[error("Serving order error: {0}")]
    Dag(#[from] DagError),
}

/// Result type alias for TableForge operations
pub type Result<T> = std::result::Result<T, TableForgeError>;
