// src/services/update_times.rs

//! Update-time table parser.
//!
//! Reads the schedule table on `Template:Did you know/Queue/LocalUpdateTimes`
//! and maps each queue/prep label to the time it goes live.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::{ParserConfig, UpdateTimes};

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table.wikitable > tbody > tr").expect("row selector is valid")
});
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("cell selector is valid"));

static LABEL_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"Queue \d").expect("queue label pattern is valid"),
        Regex::new(r"Prep \d").expect("prep label pattern is valid"),
    ]
});

/// Parser for the update-time table.
#[derive(Debug, Clone)]
pub struct UpdateTimesParser {
    time_column: usize,
}

impl UpdateTimesParser {
    /// Create a parser reading times from the given column.
    pub fn new(time_column: usize) -> Self {
        Self { time_column }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.time_column)
    }

    /// Parse the table out of an HTML page or fragment.
    pub fn parse(&self, html: &str) -> UpdateTimes {
        let document = Html::parse_document(html);
        let mut times = UpdateTimes::new();

        for row in document.select(&ROW_SELECTOR) {
            let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
            if cells.is_empty() {
                // Header row
                continue;
            }
            let Some(time_cell) = cells.get(self.time_column) else {
                log::debug!(
                    "Skipping row with {} cells, no time column {}",
                    cells.len(),
                    self.time_column
                );
                continue;
            };

            let time = time_cell
                .inner_html()
                .replacen("<br>", "&nbsp;", 1)
                .trim()
                .to_string();
            let tags: String = cells[0].text().collect();

            for pattern in LABEL_PATTERNS.iter() {
                if let Some(m) = pattern.find(&tags) {
                    times.insert(m.as_str(), time.clone());
                }
            }
        }

        times
    }
}

impl Default for UpdateTimesParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

/// Parse an update-time table using the default column layout.
pub fn parse_update_times(html: &str) -> UpdateTimes {
    UpdateTimesParser::default().parse(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/local_update_times.html");

    fn table(rows: &str) -> String {
        format!(
            "<div><table class=\"wikitable\"><tbody>\
             <tr><th>Set</th><th>Local</th><th>Hours</th><th>UTC</th></tr>\
             {rows}</tbody></table></div>"
        )
    }

    #[test]
    fn test_finds_the_preps_and_queues() {
        let times = parse_update_times(FIXTURE);

        let expected = [
            ("Queue 1", "17&nbsp;February&nbsp;00:00"),
            ("Queue 2", "14&nbsp;February&nbsp;00:00"),
            ("Queue 3", "14&nbsp;February&nbsp;12:00"),
            ("Queue 4", "15&nbsp;February&nbsp;00:00"),
            ("Queue 5", "15&nbsp;February&nbsp;12:00"),
            ("Queue 6", "16&nbsp;February&nbsp;00:00"),
            ("Queue 7", "16&nbsp;February&nbsp;12:00"),
            ("Prep 1", "17&nbsp;February&nbsp;00:00"),
            ("Prep 2", "17&nbsp;February&nbsp;12:00"),
            ("Prep 3", "18&nbsp;February&nbsp;00:00"),
            ("Prep 4", "18&nbsp;February&nbsp;12:00"),
            ("Prep 5", "19&nbsp;February&nbsp;00:00"),
            ("Prep 6", "16&nbsp;February&nbsp;00:00"),
            ("Prep 7", "16&nbsp;February&nbsp;12:00"),
        ];
        assert_eq!(times.len(), expected.len());
        for (label, time) in expected {
            assert_eq!(times.get(label), Some(time), "{label}");
        }
    }

    #[test]
    fn test_row_tagged_with_both() {
        let html = table("<tr><td>Queue 3 / Prep 5</td><td></td><td></td><td>1 May<br>12:00</td></tr>");
        let times = parse_update_times(&html);
        assert_eq!(times.len(), 2);
        assert_eq!(times.get("Queue 3"), Some("1 May&nbsp;12:00"));
        assert_eq!(times.get("Prep 5"), Some("1 May&nbsp;12:00"));
    }

    #[test]
    fn test_only_first_break_is_replaced() {
        let html = table("<tr><td>Queue 1</td><td></td><td></td><td>a<br>b<br>c</td></tr>");
        let times = parse_update_times(&html);
        assert_eq!(times.get("Queue 1"), Some("a&nbsp;b<br>c"));
    }

    #[test]
    fn test_unmatched_and_short_rows_are_skipped() {
        let html = table(
            "<tr><td>Special occasion</td><td></td><td></td><td>1 May</td></tr>\
             <tr><td>Queue 2</td><td>too short</td></tr>",
        );
        assert!(parse_update_times(&html).is_empty());
    }

    #[test]
    fn test_last_row_wins() {
        let html = table(
            "<tr><td>Queue 1</td><td></td><td></td><td>early</td></tr>\
             <tr><td>Queue 1</td><td></td><td></td><td>late</td></tr>",
        );
        assert_eq!(parse_update_times(&html).get("Queue 1"), Some("late"));
    }

    #[test]
    fn test_configurable_column() {
        let html = table("<tr><td>Prep 4</td><td>local</td><td></td><td>utc</td></tr>");
        let times = UpdateTimesParser::new(1).parse(&html);
        assert_eq!(times.get("Prep 4"), Some("local"));
    }

    #[test]
    fn test_ignores_other_tables() {
        let html = "<table class=\"infobox\"><tbody><tr><td>Queue 1</td><td></td><td></td><td>x</td></tr></tbody></table>";
        assert!(parse_update_times(html).is_empty());
    }

    #[test]
    fn test_parse_is_repeatable() {
        assert_eq!(parse_update_times(FIXTURE), parse_update_times(FIXTURE));
    }
}
