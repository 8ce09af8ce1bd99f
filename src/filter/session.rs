//! A puzzle session: the ordered history of scored guesses

use crate::core::GuessRecord;

/// The guesses made so far in one puzzle
///
/// Starts empty, grows as the user reports feedback, and is reset for a new
/// puzzle. Insertion order matters only for display; the filter result is the
/// same under any permutation of the records. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    records: Vec<GuessRecord>,
}

impl Session {
    /// Start a fresh session with no guesses
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a scored guess
    pub fn push(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recent guess
    pub fn undo(&mut self) -> Option<GuessRecord> {
        self.records.pop()
    }

    /// Discard all guesses (new puzzle)
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no guesses have been made yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the latest guess solved the puzzle
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.records.last().is_some_and(GuessRecord::is_solved)
    }
}

impl FromIterator<GuessRecord> for Session {
    fn from_iter<T: IntoIterator<Item = GuessRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, hints: &str) -> GuessRecord {
        GuessRecord::from_parts(word, hints).unwrap()
    }

    #[test]
    fn session_starts_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert!(!session.is_solved());
    }

    #[test]
    fn push_and_undo() {
        let mut session = Session::new();
        session.push(record("crane", "-----"));
        session.push(record("slate", "GY---"));
        assert_eq!(session.len(), 2);

        let undone = session.undo().unwrap();
        assert_eq!(undone.word().text(), "slate");
        assert_eq!(session.len(), 1);

        session.undo();
        assert!(session.undo().is_none());
    }

    #[test]
    fn clear_resets() {
        let mut session = Session::new();
        session.push(record("crane", "-----"));
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn solved_follows_latest_guess() {
        let mut session = Session::new();
        session.push(record("crane", "GY---"));
        assert!(!session.is_solved());
        session.push(record("crumb", "GGGGG"));
        assert!(session.is_solved());
    }
}
