//! TableForge Solver Engine
//!
//! This crate provides the engines that do the real work:
//! - Exhaustive circular seating search and arrangement scoring
//! - Weakest-pair analysis, host seating and kids' table selection
//! - Precedence DAG leveling and deterministic serving order
//! - Search statistics
//!
//! Logging levels:
//! - **INFO**: Search start/end, leveling summary
//! - **DEBUG**: New best arrangements, host and kids' table decisions
//! - **TRACE**: Individual DAG edges

pub mod dag;
pub mod seating;
pub mod stats;


pub use dag::{sort_graph, DagNode, DirectedAcyclicGraph};
pub use seating::{
    arrangement_score, best_arrangement, kids_table, seat_host, weakest_pair, HostedTable,
    KidsTableChoice, SearchResult, SeatingArrangement, SeatingOptimizer, WeakestPair,
};
pub use stats::SearchStats;
pub use tableforge_config::SearchMode;
