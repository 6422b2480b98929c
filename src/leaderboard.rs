//! Bounded high-score list.
//!
//! Entries are ranked by score (word length) descending, and by submission
//! timestamp ascending on equal scores. Only the best
//! [`LEADERBOARD_CAPACITY`] entries are retained; anything ranked below that
//! is dropped for good.

use crate::debug_log;
use std::cmp::Ordering;

pub const LEADERBOARD_CAPACITY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub word: String,
    pub score: usize,
    pub timestamp: i64,
}

impl ScoreEntry {
    fn new(word: &str, timestamp: i64) -> Self {
        Self {
            word: word.to_string(),
            score: word.len(),
            timestamp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The word was added. `rank` is `None` when it did not make the cut.
    Inserted { rank: Option<usize> },
    RejectedDuplicate,
}

fn rank_order(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
}

#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, word: &str, timestamp: i64) -> Placement {
        if self.contains(word) {
            debug_log!("Leaderboard already holds '{}'", word);
            return Placement::RejectedDuplicate;
        }

        self.entries.push(ScoreEntry::new(word, timestamp));
        // Stable: equal timestamps keep submission order
        self.entries.sort_by(rank_order);

        if let Some(dropped) = self.entries.get(LEADERBOARD_CAPACITY) {
            debug_log!("Dropping '{}' (score {}) from leaderboard", dropped.word, dropped.score);
        }
        self.entries.truncate(LEADERBOARD_CAPACITY);

        let rank = self.entries.iter().position(|entry| entry.word == word);
        Placement::Inserted { rank }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Word at `position` (0 is best), if any.
    pub fn entry_at(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|entry| entry.word.as_str())
    }

    /// Score at `position`, or 0 when the position is empty.
    pub fn score_at(&self, position: usize) -> usize {
        self.entries.get(position).map_or(0, |entry| entry.score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
