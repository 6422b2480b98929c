//! Property-based tests for the game engine.
//!
//! These tests use proptest to check the leaderboard and validation
//! invariants across randomly generated submissions.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use word_hunt::{
    BaseString, Dictionary, LEADERBOARD_CAPACITY, Leaderboard, Placement, Verdict,
    generate_base_string, validate,
};

/// Strategy for short lowercase words.
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Strategy for (word, timestamp) submissions with frequent timestamp ties.
fn submissions() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec((word(), 0i64..20), 0..40)
}

fn base() -> impl Strategy<Value = BaseString> {
    "[a-z]{1,20}".prop_map(|letters| BaseString::new(&letters).unwrap())
}

proptest! {
    /// Ranked entries are ordered by score, then by timestamp.
    #[test]
    fn leaderboard_is_always_sorted(subs in submissions()) {
        let mut board = Leaderboard::new();
        for (word, timestamp) in &subs {
            board.submit(word, *timestamp);
            for pair in board.entries().windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].timestamp <= pair[1].timestamp);
                }
            }
        }
    }

    /// The leaderboard never exceeds its capacity and never holds a word twice.
    #[test]
    fn leaderboard_bounded_and_unique(subs in submissions()) {
        let mut board = Leaderboard::new();
        for (word, timestamp) in &subs {
            board.submit(word, *timestamp);
            prop_assert!(board.len() <= LEADERBOARD_CAPACITY);
        }
        let mut words: Vec<&str> = board.entries().iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        prop_assert_eq!(words.len(), board.len());
    }

    /// Score is always the word length.
    #[test]
    fn score_is_word_length(subs in submissions()) {
        let mut board = Leaderboard::new();
        for (word, timestamp) in &subs {
            board.submit(word, *timestamp);
        }
        for entry in board.entries() {
            prop_assert_eq!(entry.score, entry.word.len());
        }
    }

    /// Resubmitting a retained word is rejected and leaves the board untouched.
    #[test]
    fn duplicate_submission_rejected(subs in submissions(), again in 0i64..20) {
        let mut board = Leaderboard::new();
        for (word, timestamp) in &subs {
            board.submit(word, *timestamp);
        }
        if let Some(word) = board.entry_at(0).map(str::to_string) {
            let before = board.entries().to_vec();
            prop_assert_eq!(board.submit(&word, again), Placement::RejectedDuplicate);
            prop_assert_eq!(board.entries(), &before[..]);
        }
    }

    /// Positional queries agree with the entry list and report absence past the end.
    #[test]
    fn positional_queries_match_entries(subs in submissions()) {
        let mut board = Leaderboard::new();
        for (word, timestamp) in &subs {
            board.submit(word, *timestamp);
        }
        for position in 0..LEADERBOARD_CAPACITY {
            match board.entries().get(position) {
                Some(entry) => {
                    prop_assert_eq!(board.entry_at(position), Some(entry.word.as_str()));
                    prop_assert_eq!(board.score_at(position), entry.score);
                }
                None => {
                    prop_assert_eq!(board.entry_at(position), None);
                    prop_assert_eq!(board.score_at(position), 0);
                }
            }
        }
    }

    /// Validation depends only on its inputs.
    #[test]
    fn validate_is_pure(candidate in word(), base in base(), dict_words in prop::collection::vec(word(), 0..20)) {
        let dictionary: Dictionary = dict_words.iter().cloned().collect();
        let first = validate(&candidate, &base, &dictionary);
        for other in &dict_words {
            let _ = validate(other, &base, &dictionary);
        }
        prop_assert_eq!(validate(&candidate, &base, &dictionary), first);
    }

    /// Accepted exactly when the word is known and each letter occurs in the base.
    #[test]
    fn validate_matches_letter_rule(candidate in word(), base in base(), known in any::<bool>()) {
        let dictionary: Dictionary = if known {
            [candidate.clone()].into_iter().collect()
        } else {
            Dictionary::default()
        };
        let expected = if !known {
            Verdict::RejectedNotInDictionary
        } else if candidate.chars().all(|c| base.as_str().contains(c)) {
            Verdict::Accepted
        } else {
            Verdict::RejectedInvalidCharacters
        };
        prop_assert_eq!(validate(&candidate, &base, &dictionary), expected);
    }

    /// Generated base strings always satisfy the base string invariant.
    #[test]
    fn generated_base_well_formed(seed in any::<u64>(), length in 0usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = generate_base_string(&mut rng, length);
        prop_assert!(BaseString::new(base.as_str()).is_some());
        if length > 0 {
            prop_assert_eq!(base.len(), length);
        }
    }
}
