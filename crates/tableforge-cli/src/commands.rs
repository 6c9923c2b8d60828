//! The three commands: `seating`, `dishes` and `order`.
//!
//! Each takes its input as text and writes its report to `out`, so tests can
//! drive them without a terminal.

use std::io::Write;

use tableforge_config::{ConfigError, TableConfig};
use tableforge_console::report;
use tableforge_core::{permutations, PairMapBuilder};
use tableforge_solver::{kids_table, seat_host, sort_graph, DirectedAcyclicGraph, SeatingOptimizer};
use tracing::debug;

use crate::error::CliError;
use crate::parse::{parse_dish_edges, parse_preferences};

/// Finds the happiest table, seats the host and picks a guest for the kids'
/// table.
pub fn run_seating(input: &str, config: &TableConfig, out: &mut impl Write) -> Result<(), CliError> {
    let preferences = parse_preferences(input)?;
    debug!(preference_count = preferences.len() as u64, "parsed seating input");

    let mut builder = PairMapBuilder::new();
    for p in preferences {
        builder.add_preference(p.person, p.neighbour, p.happiness)?;
    }
    let map = builder.build()?;

    let optimizer = SeatingOptimizer::from_config(&config.seating);
    let best = optimizer.best_arrangement(&map)?;
    out.write_all(report::best_arrangement(&best).as_bytes())?;

    let host = config.seating.host.as_str();
    let hosted = seat_host(&mut builder, &map, &best, host)?;
    out.write_all(report::host_seat(&hosted).as_bytes())?;

    if let Some(choice) = kids_table(&hosted.arrangement, &hosted.map, host)? {
        out.write_all(report::kids_table(&choice).as_bytes())?;
    }
    Ok(())
}

/// Levels the dish constraints and prints the serving order.
///
/// The configured root must not name a dish.
pub fn run_dishes(input: &str, config: &TableConfig, out: &mut impl Write) -> Result<(), CliError> {
    let edges = parse_dish_edges(input)?;
    let root = config.dishes.root.as_str();
    if edges.iter().any(|e| e.dish == root || e.after == root) {
        return Err(ConfigError::Invalid(format!(
            "dishes.root '{}' is also the name of a dish",
            root
        ))
        .into());
    }

    let mut dag = DirectedAcyclicGraph::new(root);
    for edge in edges {
        // Link every prerequisite to the root so the graph stays single-rooted.
        dag.add_edge(edge.after.as_str(), root)?;
        dag.add_edge(edge.dish, &edge.after)?;
    }

    let mut nodes = dag.compute_levels()?;
    sort_graph(&mut nodes);
    out.write_all(report::serving_order(&nodes, root).as_bytes())?;
    Ok(())
}

/// Prints up to `count` orderings of the configured guests, defaulting to the
/// configured display limit.
pub fn run_order(config: &TableConfig, count: Option<usize>, out: &mut impl Write) -> Result<(), CliError> {
    let limit = count.unwrap_or(config.order.display_limit);
    let orderings = permutations(config.order.guests.iter().cloned());
    out.write_all(report::orderings(orderings, limit).as_bytes())?;
    Ok(())
}
