pub mod ranking;

use crate::api::medals_api::MedalEntry;

/// Medal table in display order. Only constructible from ranked entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<MedalEntry>,
}

impl Leaderboard {
    pub fn ranked(entries: Vec<MedalEntry>) -> Self {
        Self {
            entries: ranking::rank(entries),
        }
    }

    pub fn entries(&self) -> &[MedalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
