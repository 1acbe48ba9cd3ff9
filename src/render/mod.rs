pub mod clock;
#[cfg(test)]
pub(crate) mod memory_target;
pub mod page_file;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::html::{HtmlBuilder, TableBuilder, Text};
use crate::leaderboard::Leaderboard;
use crate::util::dates;
use crate::Error;

const TIMESTAMP_STYLE: &str = "font-size: 0.9em; color: #888;";
const ERROR_STYLE: &str = "color: red; margin-top: 10px;";
const NO_DATA_MESSAGE: &str = "No medal data available yet. Refreshing soon...";
const FETCH_FAILED_LINES: [&str; 2] = ["Couldn't load medal data right now.", "Please try again later."];

/// The one region of the page this client owns.
pub trait RenderTarget {
    /// Drops every child of the region and inserts `html` in their place.
    fn replace_children(&mut self, html: String) -> Result<(), Error>;
    fn append_child(&mut self, html: String) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    Loaded(&'a Leaderboard),
    Failed,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    heading: String,
}

impl Renderer {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }

    /// A loaded leaderboard replaces the region. A failure only appends a notice, keeping what was shown before.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn render<T: RenderTarget + ?Sized>(
        &self,
        target: &mut T,
        outcome: Outcome<'_>,
        now: DateTime<Local>,
    ) -> Result<(), Error> {
        match outcome {
            Outcome::Loaded(leaderboard) => {
                debug!(rows = leaderboard.len(), "Rendering leaderboard");
                target.replace_children(self.leaderboard_html(leaderboard, now))
            }
            Outcome::Failed => {
                debug!("Rendering fetch failure notice");
                target.append_child(error_html())
            }
        }
    }

    fn leaderboard_html(&self, leaderboard: &Leaderboard, now: DateTime<Local>) -> String {
        let updated = format!("Last updated: {}", dates::local_time_of_day(now));

        HtmlBuilder::new()
            .paragraph(&updated, TIMESTAMP_STYLE)
            .heading2(&self.heading)
            .raw(&medal_table(leaderboard))
            .build()
    }
}

fn medal_table(leaderboard: &Leaderboard) -> String {
    let entries = leaderboard.entries();

    let ranks = (1..=entries.len()).map(|rank| rank.to_string()).collect();
    let countries = entries.iter().map(|e| e.country.clone()).collect();
    let golds = entries.iter().map(|e| e.gold.to_string()).collect();
    let silvers = entries.iter().map(|e| e.silver.to_string()).collect();
    let bronzes = entries.iter().map(|e| e.bronze.to_string()).collect();
    let totals = entries.iter().map(|e| e.total.to_string()).collect();

    TableBuilder::new()
        .add_column(Text::new("Rank", ranks).centered())
        .add_column(Text::new("Country", countries))
        .add_column(Text::new("Gold", golds).centered())
        .add_column(Text::new("Silver", silvers).centered())
        .add_column(Text::new("Bronze", bronzes).centered())
        .add_column(Text::new("Total", totals).centered().bold())
        .empty_message(NO_DATA_MESSAGE)
        .build()
}

fn error_html() -> String {
    HtmlBuilder::new()
        .paragraph_lines(&FETCH_FAILED_LINES, ERROR_STYLE)
        .build()
}
