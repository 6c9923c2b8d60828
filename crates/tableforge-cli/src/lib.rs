//! TableForge command-line front end.
//!
//! Parses puzzle input, runs the engines and renders reports. The binary in
//! `main.rs` only wires these to stdin, stdout and the configuration file.

pub mod commands;
pub mod error;
pub mod parse;

pub use commands::{run_dishes, run_order, run_seating};
pub use error::CliError;
pub use parse::{parse_dish_edges, parse_preferences, DishEdge, ParseError, Preference};
