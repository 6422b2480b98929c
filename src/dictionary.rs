use crate::debug_log;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/wordlist.txt");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary '{}' contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Immutable set of playable words, loaded once per game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Normalizes one word-list line. Blank lines and entries with anything
/// other than `a..=z` yield `None`.
fn parse_line(line: &str) -> Option<&str> {
    let word = line.trim();
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

/// Builds a dictionary from word-list lines, counting the ones that were
/// neither blank nor a usable word.
fn collect_words<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> (Dictionary, usize) {
    let mut skipped = 0usize;
    let dictionary: Dictionary = lines
        .into_iter()
        .filter_map(|line| {
            let word = parse_line(line);
            if word.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            word
        })
        .collect();
    (dictionary, skipped)
}

pub fn load_dictionary_from_str(data: &str) -> Dictionary {
    let (dictionary, skipped) = collect_words(data.lines());
    debug_log!(
        "Loaded {} dictionary words ({} lines skipped)",
        dictionary.len(),
        skipped
    );
    dictionary
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (dictionary, skipped) = collect_words(data.lines());
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }
    debug_log!(
        "Loaded {} dictionary words from {} ({} lines skipped)",
        dictionary.len(),
        path.display(),
        skipped
    );
    Ok(dictionary)
}

pub fn embedded_dictionary() -> Dictionary {
    load_dictionary_from_str(EMBEDDED_DICTIONARY)
}
