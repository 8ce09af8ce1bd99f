//! Per-letter guess feedback
//!
//! Each letter of a guess carries one of three hints:
//! - `Correct` (green): letter is in the solution at this position
//! - `Present` (yellow): letter is in the solution, but not here
//! - `Absent` (gray): letter is not in the solution, up to duplicate-letter
//!   surplus accounting (see the filter module)
//!
//! A full row of feedback is a fixed `[Hint; 5]`, wrapped in `Hints`. The
//! three states are an explicit enum rather than an `Option<bool>` so an
//! unset hint cannot be confused with "letter absent".

use super::word::WORD_LEN;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Green: right letter, right position
    Correct,
    /// Yellow: right letter, wrong position
    Present,
    /// Gray: letter not in the solution (surplus copies excepted)
    Absent,
}

/// A full row of feedback, one hint per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hints([Hint; WORD_LEN]);

impl Hints {
    /// All greens (the solved row)
    pub const ALL_CORRECT: Self = Self([Hint::Correct; WORD_LEN]);

    /// Create a hint row from a fixed array
    #[inline]
    #[must_use]
    pub const fn new(hints: [Hint; WORD_LEN]) -> Self {
        Self(hints)
    }

    /// Get the hint for a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Hint {
        self.0[position]
    }

    /// Get the hints as a fixed array
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Hint; WORD_LEN] {
        &self.0
    }

    /// Check if every position is green (puzzle solved)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&h| h == Hint::Correct)
    }

    /// Parse a hint row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green (correct)
    /// - 'Y'/'y'/🟨 for yellow (present)
    /// - '-'/'_'/⬜ for gray (absent)
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Hints;
    ///
    /// let h1 = Hints::parse("GY-GY").unwrap();
    /// let h2 = Hints::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(h1, h2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut hints = [Hint::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            hints[i] = match ch {
                'G' | 'g' | '🟩' => Hint::Correct,
                'Y' | 'y' | '🟨' => Hint::Present,
                '-' | '_' | '⬜' => Hint::Absent,
                _ => return None,
            };
        }

        Some(Self(hints))
    }

    /// Convert the hint row to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|h| match h {
                Hint::Correct => '🟩',
                Hint::Present => '🟨',
                Hint::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Hints {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid hint string: {s}"))
    }
}

impl fmt::Display for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for h in &self.0 {
            f.write_str(match h {
                Hint::Correct => "G",
                Hint::Present => "Y",
                Hint::Absent => "-",
            })?;
        }
        Ok(())
    }
}
