//! Serving-order fixtures.
//!
//! Each edge is `(child, parent)`: `child` is served after `parent`. The
//! empty key is the root.

/// A `(child, parent)` edge.
pub type Edge = (&'static str, &'static str);

/// Root `""` with `b` under it and both `c` and `a` under `b`.
pub const SIMPLE_EDGES: &[Edge] = &[("b", ""), ("c", "b"), ("a", "b")];

/// `a` and `b` point at each other.
pub const CYCLIC_EDGES: &[Edge] = &[("b", ""), ("a", "b"), ("b", "a")];

/// Dish input text for a four-course meal.
pub const MENU: &str = "\
Dish Soup should only be served after Dish Bread.
Dish Roast should only be served after Dish Soup.
Dish Dessert should only be served after Dish Roast.
Dish Salad should only be served after Dish Bread.
";
