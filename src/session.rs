//! A single game: base letters, dictionary and leaderboard.
//!
//! A session is ready to play as soon as it is constructed, since it only
//! accepts a dictionary that is already loaded. `submit` is the one way
//! words reach the leaderboard; `reset` draws new letters and leaves the
//! leaderboard alone.

use crate::dictionary::Dictionary;
use crate::generator::{BaseString, RandomStringGenerator};
use crate::leaderboard::{LEADERBOARD_CAPACITY, Leaderboard, Placement};
use crate::validator::{Verdict, validate};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;

/// Source of submission timestamps in milliseconds.
pub trait Clock {
    /// Never returns less than the previous call.
    fn now(&mut self) -> i64;
}

/// Wall clock, clamped so a backwards system-time jump cannot reorder ties.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: i64,
}

impl Clock for SystemClock {
    fn now(&mut self) -> i64 {
        self.last = chrono::Utc::now().timestamp_millis().max(self.last);
        self.last
    }
}

/// Clock driven by hand, for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: i64,
}

impl ManualClock {
    pub fn starting_at(now: i64) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: i64) {
        self.now = now.max(self.now);
    }

    pub fn advance(&mut self, millis: i64) {
        self.now = self.now.saturating_add(millis.max(0));
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> i64 {
        self.now
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted and recorded. `rank` is `None` if the word scored too low to
    /// stay on the leaderboard.
    Inserted { score: usize, rank: Option<usize> },
    RejectedDuplicate,
    RejectedNotInDictionary,
    RejectedInvalidCharacters,
}

impl SubmitOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted { score, rank: Some(rank) } => {
                write!(f, "Accepted for {score} points, rank {}.", rank + 1)
            }
            Self::Inserted { score, rank: None } => {
                write!(
                    f,
                    "Accepted for {score} points, but not enough for the top {LEADERBOARD_CAPACITY}."
                )
            }
            Self::RejectedDuplicate => f.write_str("Sorry, that word is already on the leaderboard."),
            Self::RejectedNotInDictionary => f.write_str("Sorry, this is not an english word."),
            Self::RejectedInvalidCharacters => f.write_str("Sorry, you used invalid characters."),
        }
    }
}

pub struct GameSession<'d, R = StdRng, C = SystemClock> {
    dictionary: &'d Dictionary,
    generator: RandomStringGenerator<R>,
    clock: C,
    base: BaseString,
    leaderboard: Leaderboard,
}

impl<'d> GameSession<'d> {
    /// Session with OS-seeded letters and wall-clock timestamps.
    pub fn new(dictionary: &'d Dictionary, base_length: usize) -> Self {
        Self::with_parts(
            dictionary,
            RandomStringGenerator::new(base_length),
            SystemClock::default(),
        )
    }
}

impl<'d, R: Rng, C: Clock> GameSession<'d, R, C> {
    pub fn with_parts(
        dictionary: &'d Dictionary,
        mut generator: RandomStringGenerator<R>,
        clock: C,
    ) -> Self {
        let base = generator.generate();
        info_log!("New game with base '{}'", base);
        Self {
            dictionary,
            generator,
            clock,
            base,
            leaderboard: Leaderboard::new(),
        }
    }

    /// Replaces the random base string, for scripted games and tests.
    pub fn with_base(mut self, base: BaseString) -> Self {
        self.base = base;
        self
    }

    /// Submits a pre-sanitized lowercase word.
    pub fn submit(&mut self, word: &str) -> SubmitOutcome {
        let timestamp = self.clock.now();

        let outcome = match validate(word, &self.base, self.dictionary) {
            Verdict::RejectedNotInDictionary => SubmitOutcome::RejectedNotInDictionary,
            Verdict::RejectedInvalidCharacters => SubmitOutcome::RejectedInvalidCharacters,
            Verdict::Accepted => match self.leaderboard.submit(word, timestamp) {
                Placement::Inserted { rank } => SubmitOutcome::Inserted {
                    score: word.len(),
                    rank,
                },
                Placement::RejectedDuplicate => SubmitOutcome::RejectedDuplicate,
            },
        };

        debug_log!("submit('{}') at {} -> {:?}", word, timestamp, outcome);
        outcome
    }

    /// Draws a new base string. The leaderboard is kept.
    pub fn reset(&mut self) {
        self.base = self.generator.generate();
        info_log!("Reset base to '{}'", self.base);
    }

    pub fn base(&self) -> &BaseString {
        &self.base
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn entry_at(&self, position: usize) -> Option<&str> {
        self.leaderboard.entry_at(position)
    }

    pub fn score_at(&self, position: usize) -> usize {
        self.leaderboard.score_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        ["cat", "dog", "bird", "fish"].into_iter().collect()
    }

    fn scripted<'d>(
        dictionary: &'d Dictionary,
        letters: &str,
    ) -> GameSession<'d, StdRng, ManualClock> {
        GameSession::with_parts(
            dictionary,
            RandomStringGenerator::seeded(11, 15),
            ManualClock::starting_at(1_000),
        )
        .with_base(BaseString::new(letters).unwrap())
    }

    #[test]
    fn test_submit_scenario() {
        let dictionary = dictionary();
        let mut session = scripted(&dictionary, "catdogbirdxyz");

        assert_eq!(
            session.submit("cat"),
            SubmitOutcome::Inserted { score: 3, rank: Some(0) }
        );
        assert_eq!(session.submit("fish"), SubmitOutcome::RejectedInvalidCharacters);
        assert_eq!(session.submit("cat"), SubmitOutcome::RejectedDuplicate);
        assert_eq!(session.leaderboard().len(), 1);
    }

    #[test]
    fn test_submit_unknown_word() {
        let dictionary = dictionary();
        let mut session = scripted(&dictionary, "zzzzzzzz");
        assert_eq!(session.submit("zzz"), SubmitOutcome::RejectedNotInDictionary);
        assert!(session.leaderboard().is_empty());
    }

    #[test]
    fn test_rejection_does_not_touch_leaderboard() {
        let dictionary = dictionary();
        let mut session = scripted(&dictionary, "catdogbirdxyz");
        session.submit("fish");
        session.submit("zzz");
        assert!(session.leaderboard().is_empty());
        assert_eq!(session.entry_at(0), None);
        assert_eq!(session.score_at(0), 0);
    }

    #[test]
    fn test_reset_keeps_leaderboard() {
        let dictionary = dictionary();
        let mut session = scripted(&dictionary, "catdogbirdxyz");
        session.submit("bird");

        let before = session.base().clone();
        session.reset();

        assert_ne!(session.base(), &before);
        assert_eq!(session.base().len(), 15);
        assert_eq!(session.entry_at(0), Some("bird"));
        assert_eq!(session.score_at(0), 4);
    }

    #[test]
    fn test_equal_scores_rank_by_submission_time() {
        let dictionary = dictionary();
        let mut session = scripted(&dictionary, "catdogbirdxyz");
        session.submit("dog");
        session.clock.advance(5);
        session.submit("cat");

        assert_eq!(session.entry_at(0), Some("dog"));
        assert_eq!(session.entry_at(1), Some("cat"));
    }

    #[test]
    fn test_system_clock_never_goes_backwards() {
        let mut clock = SystemClock { last: i64::MAX - 1 };
        assert_eq!(clock.now(), i64::MAX - 1);
        assert!(clock.now() >= i64::MAX - 1);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let mut clock = ManualClock::starting_at(10);
        clock.set(5);
        assert_eq!(clock.now(), 10);
        clock.advance(-3);
        assert_eq!(clock.now(), 10);
        clock.advance(4);
        assert_eq!(clock.now(), 14);
    }

    #[test]
    fn test_manual_clock_saturates_at_max() {
        let mut clock = ManualClock::starting_at(i64::MAX);
        clock.advance(1);
        assert_eq!(clock.now(), i64::MAX);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            SubmitOutcome::RejectedNotInDictionary.to_string(),
            "Sorry, this is not an english word."
        );
        assert_eq!(
            SubmitOutcome::RejectedInvalidCharacters.to_string(),
            "Sorry, you used invalid characters."
        );
        assert_eq!(
            SubmitOutcome::Inserted { score: 4, rank: Some(0) }.to_string(),
            "Accepted for 4 points, rank 1."
        );
        assert_eq!(
            SubmitOutcome::Inserted { score: 2, rank: None }.to_string(),
            format!("Accepted for 2 points, but not enough for the top {LEADERBOARD_CAPACITY}.")
        );
        assert!(SubmitOutcome::Inserted { score: 2, rank: None }.is_inserted());
        assert!(!SubmitOutcome::RejectedDuplicate.is_inserted());
    }
}
