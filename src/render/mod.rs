//! Text rendering of domain records.
//!
//! Renderers are pure: they take already-mapped records and return the text
//! to print. Tables put one record per row; the detailed form prints one
//! block per record.

pub mod table;
pub mod views;


use crate::cli::types::OutputFormat;

pub use views::{render_leaderboard, render_standings, StandingView};

/// Printed instead of an empty table or an empty list of blocks.
pub const NO_RESULTS: &str = "No results found.";

/// Marker shown next to the status of a match in progress.
pub const LIVE_MARKER: &str = "●";

/// A record that renders as one table row.
pub trait Tabular {
    fn headers(&self) -> Vec<String>;
    fn cells(&self) -> Vec<String>;
}

/// A record that renders as a multi-line block.
pub trait Detailed {
    fn detail(&self) -> String;
}

pub fn render_table<T: Tabular>(records: &[T]) -> String {
    let Some(first) = records.first() else {
        return NO_RESULTS.to_string();
    };
    let rows: Vec<Vec<String>> = records.iter().map(Tabular::cells).collect();
    table::layout(&first.headers(), &rows)
}

pub fn render_detailed<T: Detailed>(records: &[T]) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }
    records
        .iter()
        .map(Detailed::detail)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render with whichever form the user selected.
pub fn render<T: Tabular + Detailed>(records: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(records),
        OutputFormat::Detailed => render_detailed(records),
    }
}
