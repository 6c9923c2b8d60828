//! Colorful console output for TableForge.
//!
//! Provides a custom `tracing` layer that formats solver events with colors
//! on stderr, and plain-text [`report`] renderers for the results printed on
//! stdout.
//!
//! ## Log Levels
//!
//! - **INFO**: Search and leveling summaries
//! - **DEBUG**: New best arrangements, host and kids' table decisions
//! - **TRACE**: Individual DAG edges

pub mod report;

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "tableforge_solver=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, falling back to INFO for the solver crate.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TableConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct TableConsoleLayer;

impl<S: Subscriber> Layer<S> for TableConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("tableforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    mode: Option<String>,
    guest: Option<String>,
    key: Option<String>,
    participant_count: Option<u64>,
    arrangement_count: Option<u64>,
    arrangements: Option<u64>,
    improvements: Option<u64>,
    arrangement: Option<u64>,
    duration_ms: Option<u64>,
    rate: Option<f64>,
    node_count: Option<u64>,
    relaxations: Option<u64>,
    max_level: Option<u64>,
    level: Option<u64>,
    happiness: Option<i64>,
    change: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "mode" => self.mode = Some(s),
            "guest" => self.guest = Some(s.trim_matches('"').to_string()),
            "key" => self.key = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participant_count" => self.participant_count = Some(value),
            "arrangement_count" => self.arrangement_count = Some(value),
            "arrangements" => self.arrangements = Some(value),
            "improvements" => self.improvements = Some(value),
            "arrangement" => self.arrangement = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "node_count" => self.node_count = Some(value),
            "relaxations" => self.relaxations = Some(value),
            "max_level" => self.max_level = Some(value),
            "level" => self.level = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "happiness" => self.happiness = Some(value),
            "change" => self.change = Some(value),
            _ => {
                if let Ok(v) = u64::try_from(value) {
                    self.record_u64(field, v);
                }
            }
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "rate" {
            self.rate = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "guest" => self.guest = Some(value.to_string()),
            "key" => self.key = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("search_start") => format_search_start(v),
        Some("search_end") => format_search_end(v),
        Some("new_best") => format_new_best(v),
        Some("leveling_end") => format_leveling_end(v),
        Some("cycle_detected") => format_cycle(v),
        Some("kids_table") => format_kids_table(v),
        Some(_) => String::new(),
        None => format_message(v, level),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let participants = v.participant_count.unwrap_or(0);
    let arrangements = v.arrangement_count.unwrap_or(0);

    format!(
        "{} Seating │ {} guests │ {} arrangements │ {}",
        "▶".bright_green().bold(),
        participants.to_formatted_string(&Locale::en).bright_yellow(),
        arrangements.to_formatted_string(&Locale::en).bright_yellow(),
        v.mode.as_deref().unwrap_or("Sequential").bright_magenta()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    format!(
        "{} Seating complete │ happiness {} │ {} arrangements │ {} improvements │ {} │ {}/s",
        "■".bright_cyan().bold(),
        format_happiness(v.happiness.unwrap_or(0)),
        v.arrangements
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.improvements.unwrap_or(0).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        (v.rate.unwrap_or(0.0) as u64)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Arrangement {:>9} │ {}",
        "->".bright_blue(),
        v.arrangement
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_happiness(v.happiness.unwrap_or(0))
    )
}

fn format_leveling_end(v: &EventVisitor) -> String {
    format!(
        "{} Serving order │ {} dishes │ {} levels │ {} relaxations",
        "■".bright_cyan().bold(),
        v.node_count.unwrap_or(0).saturating_sub(1).bright_yellow(),
        v.max_level.unwrap_or(0).bright_yellow(),
        v.relaxations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white()
    )
}

fn format_cycle(v: &EventVisitor) -> String {
    format!(
        "{} Cycle through '{}' at level {}",
        "✗".bright_red().bold(),
        v.key.as_deref().unwrap_or("?"),
        v.level.unwrap_or(0)
    )
}

fn format_kids_table(v: &EventVisitor) -> String {
    format!(
        "    {} Kids' table │ {} │ {}",
        "->".bright_blue(),
        v.guest.as_deref().unwrap_or("?").bright_white(),
        format_happiness(v.change.unwrap_or(0))
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    let tag = if level == Level::ERROR {
        "ERROR".bright_red().bold().to_string()
    } else if level == Level::WARN {
        "WARN".yellow().bold().to_string()
    } else {
        level.to_string().bright_black().to_string()
    };
    match v.participant_count {
        Some(n) => format!("{} {} ({} guests)", tag, message, n),
        None => format!("{} {}", tag, message),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_happiness(happiness: i64) -> String {
    let text = happiness.to_formatted_string(&Locale::en);
    if happiness < 0 {
        text.bright_red().to_string()
    } else if happiness > 0 {
        text.bright_green().to_string()
    } else {
        text.white().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("edge_added".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::TRACE).is_empty());
    }

    #[test]
    fn test_search_end_mentions_happiness() {
        let v = EventVisitor {
            event: Some("search_end".to_string()),
            happiness: Some(-1234),
            arrangements: Some(5040),
            rate: Some(12_500.7),
            ..Default::default()
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("-1,234"));
        assert!(line.contains("5,040"));
        assert!(line.contains("12,500"));
    }

    #[test]
    fn test_plain_message() {
        let v = EventVisitor {
            message: Some("exhaustive seating search over a large table".to_string()),
            participant_count: Some(12),
            ..Default::default()
        };
        let line = format_event(&v, Level::WARN);
        assert!(line.contains("large table"));
        assert!(line.contains("12 guests"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
