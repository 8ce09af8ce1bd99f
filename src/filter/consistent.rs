//! Consistency checking between candidate words and scored guesses
//!
//! The rules mirror how Wordle actually scores a guess, including the
//! duplicate-letter subtlety: a guess like SPEED against a single-E solution
//! gets one E marked present and the surplus E marked absent. The absent mark
//! on the surplus copy must not be read as "E never appears" - it caps the
//! candidate's count of that letter at the number of confirmed copies.

use crate::core::{GuessRecord, Hint, WORD_LEN, Word};
use crate::filter::Session;

const ALPHABET: usize = 26;

#[inline]
const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Check whether a candidate word is consistent with one scored guess
///
/// Two passes over the guess's positions:
/// 1. Enforce green positions and tally, per letter, how many copies the
///    guess confirmed (green or yellow) and how many of those are greens.
/// 2. Enforce the yellow and gray rules against the candidate's letter counts:
///    - Yellow at `i` for letter `L`: the candidate must not have `L` at `i`,
///      and must contain `L` somewhere not already claimed by a green for `L`
///      in this guess, i.e. `count(candidate, L) > greens(L)`.
///    - Gray at `i` for letter `L`: the candidate's count of `L` must not
///      exceed the confirmed tally. With nothing confirmed, any occurrence of
///      `L` disqualifies the candidate; with confirmed copies, the gray is the
///      over-guess of a repeated letter and only forbids surplus occurrences.
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &GuessRecord) -> bool {
    let guessed = guess.word().chars();
    let hints = guess.hints();

    // Pass 1: greens are positional; tally confirmed copies per letter
    let mut confirmed = [0u8; ALPHABET];
    let mut greens = [0u8; ALPHABET];
    for i in 0..WORD_LEN {
        let letter = guessed[i];
        match hints.at(i) {
            Hint::Correct => {
                if candidate.char_at(i) != letter {
                    return false;
                }
                confirmed[index(letter)] += 1;
                greens[index(letter)] += 1;
            }
            Hint::Present => confirmed[index(letter)] += 1,
            Hint::Absent => {}
        }
    }

    // Pass 2: presence and surplus-absence checks against letter counts
    for i in 0..WORD_LEN {
        let letter = guessed[i];
        match hints.at(i) {
            Hint::Correct => {}
            Hint::Present => {
                if candidate.char_at(i) == letter {
                    return false;
                }
                if candidate.count_of(letter) <= usize::from(greens[index(letter)]) {
                    return false;
                }
            }
            Hint::Absent => {
                if candidate.count_of(letter) > usize::from(confirmed[index(letter)]) {
                    return false;
                }
            }
        }
    }

    true
}

/// Filter a word list down to the words consistent with every guess
///
/// Pure function of its inputs: no side effects, deterministic, and safe to
/// call concurrently against the same session and word list. The result is a
/// subsequence of `words` in its original order. An empty session returns the
/// full list; an empty word list returns an empty result.
///
/// Runs in O(|words| x |session| x 5); at dictionary scale no indexing is
/// needed.
///
/// # Examples
/// ```
/// use wordle_helper::core::GuessRecord;
/// use wordle_helper::filter::{Session, filter_consistent};
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "crumb", "slate"]);
/// let session: Session = [GuessRecord::from_parts("crane", "GG---").unwrap()]
///     .into_iter()
///     .collect();
///
/// let remaining = filter_consistent(&session, &words);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "crumb");
/// ```
#[must_use]
pub fn filter_consistent<'a>(session: &Session, words: &'a [Word]) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|candidate| {
            session
                .records()
                .iter()
                .all(|guess| is_consistent(candidate, guess))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hints;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn record(word: &str, hints: &str) -> GuessRecord {
        GuessRecord::from_parts(word, hints).unwrap()
    }

    fn session(records: &[(&str, &str)]) -> Session {
        records.iter().map(|(w, h)| record(w, h)).collect()
    }

    fn texts<'a>(filtered: &[&'a Word]) -> Vec<&'a str> {
        filtered.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_session_keeps_everything_in_order() {
        let list = words(&["crane", "slate", "trace", "grape"]);
        let remaining = filter_consistent(&Session::new(), &list);

        assert_eq!(texts(&remaining), vec!["crane", "slate", "trace", "grape"]);
    }

    #[test]
    fn empty_word_list_yields_empty_result() {
        let session = session(&[("crane", "GG---")]);
        assert!(filter_consistent(&session, &[]).is_empty());
    }

    #[test]
    fn all_greens_pins_the_exact_word() {
        let list = words(&["crane", "slate", "trace", "grape"]);

        for target in &list {
            let session: Session =
                [GuessRecord::new(target.clone(), Hints::ALL_CORRECT)].into_iter().collect();
            let remaining = filter_consistent(&session, &list);

            assert_eq!(texts(&remaining), vec![target.text()]);
        }
    }

    #[test]
    fn green_hint_requires_exact_position() {
        // C and R green, A/N/E out
        let list = words(&["crumb", "crisp", "brine"]);
        let session = session(&[("crane", "GG---")]);

        // crumb and crisp start with "cr" and avoid A/N/E; brine does not
        assert_eq!(
            texts(&filter_consistent(&session, &list)),
            vec!["crumb", "crisp"]
        );
    }

    #[test]
    fn yellow_hint_excludes_same_position() {
        // A is present but not at position 0; U/D/I/O are out
        let list = words(&["alarm", "nasty", "salad", "bench"]);
        let session = session(&[("audio", "Y----")]);
        let remaining = filter_consistent(&session, &list);

        // alarm has A exactly at position 0, salad contains the absent D,
        // bench has no A at all
        assert_eq!(texts(&remaining), vec!["nasty"]);
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        // B is present but not at position 1; A/O/U/T are out
        let list = words(&["bench", "vexed", "abbey"]);
        let session = session(&[("about", "-Y---")]);
        let remaining = filter_consistent(&session, &list);

        // bench has B at position 0; vexed has no B; abbey contains the absent A
        assert_eq!(texts(&remaining), vec!["bench"]);
    }

    #[test]
    fn monotonic_narrowing() {
        let list = words(&["crane", "slate", "trace", "grape", "crumb", "brine"]);

        let one = session(&[("crane", "YGG-G")]);
        let two = session(&[("crane", "YGG-G"), ("slate", "--GYG")]);

        let first: Vec<&str> = texts(&filter_consistent(&one, &list));
        let second: Vec<&str> = texts(&filter_consistent(&two, &list));

        for word in &second {
            assert!(first.contains(word), "narrowing grew the result: {word}");
        }
        assert!(second.len() <= first.len());
    }

    #[test]
    fn order_independence_of_records() {
        let list = words(&["crane", "slate", "trace", "grape", "crumb", "brine"]);

        let forward = session(&[("crane", "YGG-G"), ("slate", "--GYG")]);
        let backward = session(&[("slate", "--GYG"), ("crane", "YGG-G")]);

        let result = texts(&filter_consistent(&forward, &list));
        assert_eq!(result, texts(&filter_consistent(&backward, &list)));
        assert_eq!(result, vec!["trace"]);
    }

    #[test]
    fn result_preserves_word_list_order() {
        let list = words(&["trace", "crane", "brine", "crumb"]);
        // E in last position
        let session = session(&[("vexed", "-Y---")]);
        let remaining = filter_consistent(&session, &list);

        // Words containing E but not at position 1, without V/X/D
        assert_eq!(texts(&remaining), vec!["trace", "crane", "brine"]);
    }

    #[test]
    fn surplus_absent_letter_is_not_letter_nowhere() {
        // SPEED against a single-E solution: one E comes back yellow, the
        // surplus E gray. A naive "gray means the letter never appears" filter
        // wrongly rejects every word containing E.
        let list = words(&["lemon", "crane", "erase", "blunt"]);
        let session = session(&[("speed", "--Y--")]);
        let remaining = filter_consistent(&session, &list);

        // lemon and crane: exactly one E, not at position 2, no S/P/D
        // erase: two Es exceed the single confirmed copy
        // blunt: no E at all
        assert_eq!(texts(&remaining), vec!["lemon", "crane"]);
    }

    #[test]
    fn speed_versus_erase_feedback_keeps_erase() {
        // The actual feedback SPEED receives against ERASE: S yellow, P gray,
        // both Es yellow, D gray
        let list = words(&["erase", "lemon", "crane"]);
        let session = session(&[("speed", "Y-YY-")]);
        let remaining = filter_consistent(&session, &list);

        assert_eq!(texts(&remaining), vec!["erase"]);
    }

    #[test]
    fn gray_alongside_green_caps_the_count() {
        // GEESE against THEME: greens at positions 2 and 4 consume both Es of
        // the solution, so the E at position 1 comes back gray. Candidates
        // must have Es on the two greens and nowhere else.
        let list = words(&["theme", "creme", "melee"]);
        let session = session(&[("geese", "--G-G")]);
        let remaining = filter_consistent(&session, &list);

        // theme and creme carry exactly the two confirmed Es;
        // melee misses the green at position 2
        assert_eq!(texts(&remaining), vec!["theme", "creme"]);
    }

    #[test]
    fn end_to_end_crane_against_trace() {
        // The feedback CRANE receives when the solution is TRACE:
        // C present (appears at position 3), R/A/E green, N gray
        let list = words(&["crane", "slate", "trace", "grape"]);
        let session = session(&[("crane", "YGG-G")]);
        let remaining = filter_consistent(&session, &list);

        assert_eq!(texts(&remaining), vec!["trace"]);
    }

    #[test]
    fn repeated_filtering_is_deterministic() {
        let list = words(&["crane", "slate", "trace", "grape"]);
        let session = session(&[("crane", "YGG-G")]);

        let first = texts(&filter_consistent(&session, &list));
        let second = texts(&filter_consistent(&session, &list));
        assert_eq!(first, second);
    }

    #[test]
    fn contradictory_session_yields_empty() {
        let list = words(&["crane", "slate", "trace", "grape"]);
        // Two different words cannot both be all-green
        let session = session(&[("crane", "GGGGG"), ("slate", "GGGGG")]);

        assert!(filter_consistent(&session, &list).is_empty());
    }
}
