//! A scored guess: the word that was played and the feedback it received

use super::hint::Hints;
use super::word::{WORD_LEN, Word, WordError};
use std::fmt;

/// An immutable pairing of a guessed word with its per-letter feedback
///
/// `hints.at(i)` describes `word.char_at(i)`. Both fields are read-only after
/// construction; the fixed-length `Word` and `Hints` types make a mismatched
/// record unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    hints: Hints,
}

/// Error type for rejected guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The guessed word failed validation (wrong length, bad characters)
    MalformedWord(WordError),
    /// The hint row was not five valid hint characters
    BadHintPattern(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedWord(e) => write!(f, "Malformed guess: {e}"),
            Self::BadHintPattern(s) => {
                write!(f, "Hint pattern must be {WORD_LEN} of G/Y/-, got '{s}'")
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedWord(e) => Some(e),
            Self::BadHintPattern(_) => None,
        }
    }
}

impl GuessRecord {
    /// Pair a validated word with its feedback row
    #[inline]
    #[must_use]
    pub const fn new(word: Word, hints: Hints) -> Self {
        Self { word, hints }
    }

    /// Build a record from raw user input
    ///
    /// # Errors
    /// Returns `GuessError::MalformedWord` if the word is not five ASCII
    /// letters, or `GuessError::BadHintPattern` if the hint string is not
    /// five of `G`/`Y`/`-` (or their emoji equivalents).
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::GuessRecord;
    ///
    /// let record = GuessRecord::from_parts("crane", "-GG-G").unwrap();
    /// assert_eq!(record.word().text(), "crane");
    ///
    /// assert!(GuessRecord::from_parts("cranes", "-GG-G").is_err());
    /// assert!(GuessRecord::from_parts("crane", "-GG-").is_err());
    /// ```
    pub fn from_parts(word: &str, hints: &str) -> Result<Self, GuessError> {
        let word = Word::new(word).map_err(GuessError::MalformedWord)?;
        let hints =
            Hints::parse(hints).ok_or_else(|| GuessError::BadHintPattern(hints.to_string()))?;
        Ok(Self { word, hints })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The feedback the guess received
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    /// Whether this guess solved the puzzle (all greens)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hints.is_solved()
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hint;

    #[test]
    fn from_parts_valid() {
        let record = GuessRecord::from_parts("crane", "-GGYG").unwrap();
        assert_eq!(record.word().text(), "crane");
        assert_eq!(record.hints().at(0), Hint::Absent);
        assert_eq!(record.hints().at(1), Hint::Correct);
        assert_eq!(record.hints().at(3), Hint::Present);
    }

    #[test]
    fn from_parts_rejects_bad_word() {
        assert!(matches!(
            GuessRecord::from_parts("cranes", "GGGGG"),
            Err(GuessError::MalformedWord(WordError::InvalidLength(6)))
        ));
        assert!(matches!(
            GuessRecord::from_parts("cr4ne", "GGGGG"),
            Err(GuessError::MalformedWord(_))
        ));
    }

    #[test]
    fn from_parts_rejects_bad_hints() {
        assert!(matches!(
            GuessRecord::from_parts("crane", "GG"),
            Err(GuessError::BadHintPattern(_))
        ));
        assert!(matches!(
            GuessRecord::from_parts("crane", "GGGGX"),
            Err(GuessError::BadHintPattern(_))
        ));
    }

    #[test]
    fn solved_record() {
        let record = GuessRecord::from_parts("crane", "GGGGG").unwrap();
        assert!(record.is_solved());

        let record = GuessRecord::from_parts("crane", "GGGG-").unwrap();
        assert!(!record.is_solved());
    }

    #[test]
    fn display_joins_word_and_hints() {
        let record = GuessRecord::from_parts("crane", "-GGYG").unwrap();
        assert_eq!(format!("{record}"), "crane -GGYG");
    }
}
