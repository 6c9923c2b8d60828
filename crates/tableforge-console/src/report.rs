//! Plain-text reports for seating and serving-order results.
//!
//! Every renderer returns a `String` ending in a newline so callers decide
//! where it goes.

use std::fmt::Write;

use tableforge_core::Participant;
use tableforge_solver::{DagNode, HostedTable, KidsTableChoice, SeatingArrangement};

/// Renders the happiest table.
pub fn best_arrangement(arrangement: &SeatingArrangement) -> String {
    format!(
        "The best seating arrangement for the guests is {}\n\
         This seating arrangement has a happiness score of {}\n",
        arrangement.seating.join(", "),
        arrangement.happiness
    )
}

/// Renders where the host sits and the resulting table.
pub fn host_seat(hosted: &HostedTable) -> String {
    let mut out = String::new();

    if let Some(pair) = &hosted.displaced {
        let direction = if pair.happiness < 0 { "up" } else { "down" };
        let _ = writeln!(
            out,
            "The best place for the host to sit is between {} and {}",
            pair.person_a, pair.person_b
        );
        let _ = writeln!(
            out,
            "When the host sits in this spot the overall happiness score goes {} by {} points",
            direction,
            pair.happiness.unsigned_abs()
        );
    }

    let _ = writeln!(
        out,
        "The seating arrangement with the host is {}",
        hosted.arrangement.seating.join(", ")
    );
    let _ = writeln!(
        out,
        "This seating arrangement has a happiness score of {}",
        hosted.arrangement.happiness
    );
    out
}

/// Renders the kids' table decision.
pub fn kids_table(choice: &KidsTableChoice) -> String {
    let mut out = String::new();

    if choice.change <= 0 {
        let _ = writeln!(
            out,
            "It is best not to send anyone to the kids table, but if you must then send '{}'",
            choice.guest
        );
        let effect = if choice.change == 0 {
            "remain the same".to_string()
        } else {
            format!("go down by {}", choice.change.unsigned_abs())
        };
        let _ = writeln!(out, "If you do the overall happiness in the table will {}", effect);
    } else {
        let _ = writeln!(out, "The best person to send to the kid's table is '{}'", choice.guest);
        let _ = writeln!(out, "This will raise the happiness in the table by {}", choice.change);
    }

    let _ = writeln!(
        out,
        "The seating arrangement with '{}' in the kids table is {}",
        choice.guest,
        choice.arrangement.seating.join(", ")
    );
    let _ = writeln!(
        out,
        "This seating arrangement has a happiness score of {}",
        choice.arrangement.happiness
    );
    out
}

/// Renders sorted nodes as `<level> <dish>` lines, leaving out the root.
pub fn serving_order(nodes: &[DagNode], root: &str) -> String {
    let mut out = String::from("The dishes should be served in the following order:\n");
    for node in nodes.iter().filter(|n| n.key != root) {
        let _ = writeln!(out, "{} {}", node.max_level, node.key);
    }
    out
}

/// Renders up to `limit` orderings, one per line.
pub fn orderings<I>(orderings: I, limit: usize) -> String
where
    I: IntoIterator<Item = Vec<Participant>>,
{
    let mut out = format!("Printing up to {} seating permutations:\n\n", limit);
    for ordering in orderings.into_iter().take(limit) {
        let _ = writeln!(out, "{}", ordering.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableforge_core::PairMapBuilder;
    use tableforge_solver::WeakestPair;

    fn seats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_best_arrangement() {
        let text = best_arrangement(&SeatingArrangement {
            seating: seats(&["a", "b", "c"]),
            happiness: 12,
        });
        assert_eq!(
            text,
            "The best seating arrangement for the guests is a, b, c\n\
             This seating arrangement has a happiness score of 12\n"
        );
    }

    #[test]
    fn test_host_seat_direction() {
        let hosted = HostedTable {
            arrangement: SeatingArrangement {
                seating: seats(&["a", "host", "b"]),
                happiness: 7,
            },
            displaced: Some(WeakestPair {
                person_a: "a".to_string(),
                person_b: "b".to_string(),
                happiness: -3,
                index: 0,
            }),
            map: PairMapBuilder::new().build().unwrap(),
        };

        let text = host_seat(&hosted);
        assert!(text.contains("between a and b"));
        assert!(text.contains("goes up by 3 points"));
        assert!(text.contains("with the host is a, host, b"));
    }

    #[test]
    fn test_kids_table_wording() {
        let mut choice = KidsTableChoice {
            guest: "c".to_string(),
            arrangement: SeatingArrangement {
                seating: seats(&["a", "host", "b"]),
                happiness: 5,
            },
            change: 0,
        };
        assert!(kids_table(&choice).contains("will remain the same"));

        choice.change = -4;
        assert!(kids_table(&choice).contains("will go down by 4"));

        choice.change = 9;
        let text = kids_table(&choice);
        assert!(text.contains("The best person to send to the kid's table is 'c'"));
        assert!(text.contains("raise the happiness in the table by 9"));
    }

    #[test]
    fn test_serving_order_skips_root() {
        let nodes = vec![
            DagNode {
                key: String::new(),
                max_level: 0,
                descendants: vec!["Bread".to_string()],
            },
            DagNode {
                key: "Bread".to_string(),
                max_level: 1,
                descendants: vec![],
            },
        ];
        assert_eq!(
            serving_order(&nodes, ""),
            "The dishes should be served in the following order:\n1 Bread\n"
        );
    }

    #[test]
    fn test_orderings_respects_limit() {
        let all = vec![seats(&["x", "y"]), seats(&["y", "x"])];
        let text = orderings(all, 1);
        assert_eq!(text, "Printing up to 1 seating permutations:\n\nx, y\n");
    }
}
