//! Directed seating preference fixtures.
//!
//! Each entry is `(person, neighbour, happiness)`: the happiness of `person`
//! when seated next to `neighbour`.

/// A directed preference triple.
pub type Preference = (&'static str, &'static str, i64);

/// Four guests whose best table is `a, b, c, d` with happiness 20.
///
/// Mutual scores: ab=2, ac=-200, ad=4, bc=6, bd=-200, cd=8.
pub const FOUR_GUESTS: &[Preference] = &[
    ("a", "b", 1),
    ("a", "c", -100),
    ("a", "d", 2),
    ("b", "a", 1),
    ("b", "c", 3),
    ("b", "d", -100),
    ("c", "a", -100),
    ("c", "b", 3),
    ("c", "d", 4),
    ("d", "a", 2),
    ("d", "b", -100),
    ("d", "c", 4),
];

/// Three guests with asymmetric directed scores.
///
/// Mutual scores: ab=4, ac=7, bc=10.
pub const THREE_GUESTS: &[Preference] = &[
    ("a", "b", 1),
    ("a", "c", 2),
    ("b", "a", 3),
    ("b", "c", 4),
    ("c", "a", 5),
    ("c", "b", 6),
];

/// Renders preferences as seating input lines.
pub fn as_lines(preferences: &[Preference]) -> String {
    preferences
        .iter()
        .map(|&(person, neighbour, happiness)| {
            let direction = if happiness < 0 { "less" } else { "more" };
            format!(
                "If {person} would be seated next to {neighbour} she would be {} joy points {direction} happy.\n",
                happiness.unsigned_abs()
            )
        })
        .collect()
}
