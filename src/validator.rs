use crate::dictionary::Dictionary;
use crate::generator::BaseString;

/// Result of checking a candidate word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    RejectedNotInDictionary,
    RejectedInvalidCharacters,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Checks `word` against the dictionary first, then against the letters of
/// `base`.
///
/// Letters are not consumed: each letter of `word` only has to occur somewhere
/// in `base`, so a base with one `a` accepts `banana` as far as letters go.
pub fn validate(word: &str, base: &BaseString, dictionary: &Dictionary) -> Verdict {
    if !dictionary.contains(word) {
        return Verdict::RejectedNotInDictionary;
    }
    if word.chars().all(|c| base.contains_letter(c)) {
        Verdict::Accepted
    } else {
        Verdict::RejectedInvalidCharacters
    }
}
