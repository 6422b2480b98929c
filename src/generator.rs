//! Base string generation.
//!
//! The base string is the pool of letters a player's words must be drawn
//! from. Every character is picked uniformly and independently from `a..=z`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub const DEFAULT_BASE_LENGTH: usize = 15;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A non-empty string of lowercase ASCII letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseString(String);

impl BaseString {
    /// Wraps `letters` if it is non-empty and made of `a..=z` only.
    pub fn new(letters: &str) -> Option<Self> {
        if !letters.is_empty() && letters.bytes().all(|b| b.is_ascii_lowercase()) {
            Some(Self(letters.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for BaseString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draws `length` random letters from `rng`. A length of zero means
/// [`DEFAULT_BASE_LENGTH`].
pub fn generate_base_string<R: Rng>(rng: &mut R, length: usize) -> BaseString {
    let length = if length == 0 { DEFAULT_BASE_LENGTH } else { length };
    let letters: String = (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect();
    BaseString(letters)
}

/// Produces base strings of a fixed length from an owned random source.
pub struct RandomStringGenerator<R = StdRng> {
    rng: R,
    length: usize,
}

impl RandomStringGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn new(length: usize) -> Self {
        Self::with_rng(StdRng::from_os_rng(), length)
    }

    /// Deterministic generator, for tests and reproducible games.
    pub fn seeded(seed: u64, length: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), length)
    }
}

impl<R: Rng> RandomStringGenerator<R> {
    pub fn with_rng(rng: R, length: usize) -> Self {
        let length = if length == 0 { DEFAULT_BASE_LENGTH } else { length };
        Self { rng, length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn generate(&mut self) -> BaseString {
        generate_base_string(&mut self.rng, self.length)
    }
}
