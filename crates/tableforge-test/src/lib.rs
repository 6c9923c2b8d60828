//! Shared test fixtures for TableForge crates.
//!
//! This crate provides plain data for testing.
//! It does NOT depend on `tableforge-core` to avoid circular dependencies;
//! fixtures are exposed as tuples that callers feed into their own builders.
//!
//! - [`guests`] - Directed seating preferences
//! - [`dishes`] - Serving-order edges and input text
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tableforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tableforge_test::guests::FOUR_GUESTS;
//!
//! for &(a, b, happiness) in FOUR_GUESTS {
//!     builder.add_preference(a, b, happiness)?;
//! }
//! ```

pub mod dishes;
pub mod guests;

pub use dishes::{CYCLIC_EDGES, SIMPLE_EDGES};
pub use guests::{FOUR_GUESTS, THREE_GUESTS};
