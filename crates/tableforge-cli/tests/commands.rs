//! End-to-end runs of the three commands against in-memory input.

use tableforge_cli::{run_dishes, run_order, run_seating, CliError};
use tableforge_config::{ConfigError, SearchMode, TableConfig};
use tableforge_core::{DagError, PairError, TableForgeError};
use tableforge_test::dishes::MENU;
use tableforge_test::guests::{as_lines, FOUR_GUESTS};

fn seating_output(input: &str, config: &TableConfig) -> Result<String, CliError> {
    let mut out = Vec::new();
    run_seating(input, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn seating_report_for_four_guests() {
    let text = seating_output(&as_lines(FOUR_GUESTS), &TableConfig::default()).unwrap();

    assert!(text.contains("The best seating arrangement for the guests is a, b, c, d\n"));
    assert!(text.contains("happiness score of 20\n"));
    assert!(text.contains("between a and b"));
    assert!(text.contains("goes down by 2 points"));
    assert!(text.contains("The seating arrangement with the host is a, host, b, c, d\n"));
    assert!(text.contains("happiness score of 18\n"));
    assert!(text.contains("if you must then send 'a'"));
    assert!(text.contains("will go down by 4"));
    assert!(text.contains("in the kids table is host, b, c, d\n"));
}

#[test]
fn seating_parallel_mode_reports_same_score() {
    let config = TableConfig::new().with_search_mode(SearchMode::Parallel);
    let text = seating_output(&as_lines(FOUR_GUESTS), &config).unwrap();
    assert!(text.contains("This seating arrangement has a happiness score of 20\n"));
}

#[test]
fn seating_uses_configured_host_name() {
    let config = TableConfig::new().with_host("Jerry");
    let text = seating_output(&as_lines(FOUR_GUESTS), &config).unwrap();
    assert!(text.contains("a, Jerry, b, c, d"));
}

#[test]
fn seating_rejects_incomplete_preferences() {
    let input = as_lines(&FOUR_GUESTS[..11]);
    let err = seating_output(&input, &TableConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solver(TableForgeError::Pair(PairError::MissingEntry { .. }))
    ));
}

#[test]
fn seating_rejects_duplicate_preference() {
    let mut input = as_lines(FOUR_GUESTS);
    input.push_str(&as_lines(&FOUR_GUESTS[..1]));
    let err = seating_output(&input, &TableConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solver(TableForgeError::Pair(PairError::DuplicateEntry { .. }))
    ));
}

#[test]
fn seating_rejects_garbage() {
    let err = seating_output("hello\n", &TableConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
}

#[test]
fn dishes_serving_order() {
    let mut out = Vec::new();
    run_dishes(MENU, &TableConfig::default(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The dishes should be served in the following order:\n\
         1 Bread\n\
         2 Salad\n\
         2 Soup\n\
         3 Roast\n\
         4 Dessert\n"
    );
}

#[test]
fn dishes_reject_cycle() {
    let input = "Dish A should only be served after Dish B.\n\
                 Dish B should only be served after Dish A.\n";
    let mut out = Vec::new();
    let err = run_dishes(input, &TableConfig::default(), &mut out).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solver(TableForgeError::Dag(DagError::CycleDetected { .. }))
    ));
    assert!(out.is_empty());
}

#[test]
fn order_prints_requested_count() {
    let mut out = Vec::new();
    run_order(&TableConfig::default(), Some(3), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Printing up to 3 seating permutations:");
    assert_eq!(lines.len(), 2 + 3);
    assert_eq!(
        lines[2],
        "Elaine, Kosmo, Estelle, Newman, Jerry, Frank, George, Marisa"
    );
}

#[test]
fn order_defaults_to_display_limit_and_stops_at_end() {
    let config = TableConfig::from_toml_str(
        "[order]\ndisplay_limit = 50\nguests = [\"x\", \"y\", \"z\"]\n",
    )
    .unwrap();
    let mut out = Vec::new();
    run_order(&config, None, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Printing up to 50 seating permutations:"));
    assert_eq!(text.lines().count(), 2 + 6);
}

#[test]
fn dishes_reject_root_named_like_a_dish() {
    let config = TableConfig::new().with_dish_root("Bread");
    let mut out = Vec::new();
    let err = run_dishes(MENU, &config, &mut out).unwrap_err();

    assert!(matches!(err, CliError::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().contains("'Bread'"));
    assert!(out.is_empty());
}

#[test]
fn dishes_accept_custom_root_not_used_by_any_dish() {
    let config = TableConfig::new().with_dish_root("start");
    let mut out = Vec::new();
    run_dishes(MENU, &config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1 Bread\n"));
    assert!(!text.contains("start"));
}

#[test]
fn seating_rejects_overflowing_joy_points() {
    let input = "If a would be seated next to b she would be 9223372036854775807 joy points more happy.\n\
                 If b would be seated next to a he would be 1 joy points more happy.\n";
    let err = seating_output(input, &TableConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solver(TableForgeError::Pair(PairError::ScoreOverflow { .. }))
    ));
}
