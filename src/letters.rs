use crate::FrequencyTable;
use rayon::current_num_threads;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Below this many words, splitting the tally across threads costs more than it saves.
const PAR_MIN_WORDS: usize = 4096;

/// Which end of a word to tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The word's beginning.
    First,
    /// The word's ending.
    Last,
}

impl Position {
    fn letter(self, word: &str) -> Option<char> {
        let c = match self {
            Position::First => word.chars().next(),
            Position::Last => word.chars().next_back(),
        }?;
        fold(c)
    }
}

/// Lowercases `c` and returns it only if the result is a single `a..=z`.
fn fold(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.is_ascii_lowercase() => Some(l),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical.
    #[default]
    Letter,
    /// Highest count first. Ties stay alphabetical.
    Count,
}

/// Summed word counts keyed by a word's first or last letter.
///
/// Each word count fits in a `u64`; their sums are kept as `u128` so they cannot overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTotals(BTreeMap<char, u128>);

fn add(mut totals: BTreeMap<char, u128>, (letter, count): (char, u64)) -> BTreeMap<char, u128> {
    *totals.entry(letter).or_insert(0) += u128::from(count);
    totals
}

impl LetterTotals {
    pub fn tally(table: &FrequencyTable, position: Position) -> Self {
        let words = table.words();
        let pick = |(word, &count): (&String, &u64)| Some((position.letter(word)?, count));

        let totals = if current_num_threads() > 1 && words.len() >= PAR_MIN_WORDS {
            words
                .par_iter()
                .filter_map(pick)
                .fold(BTreeMap::new, add)
                .reduce(BTreeMap::new, |mut a, b| {
                    for (letter, count) in b {
                        *a.entry(letter).or_insert(0) += count;
                    }
                    a
                })
        } else {
            words.iter().filter_map(pick).fold(BTreeMap::new(), add)
        };
        Self(totals)
    }

    pub fn get(&self, letter: char) -> Option<u128> {
        self.0.get(&letter).copied()
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u128)> + '_ {
        self.0.iter().map(|(&letter, &count)| (letter, count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over every letter.
    pub fn total(&self) -> u128 {
        self.0.values().sum()
    }

    pub fn sorted(&self, order: SortOrder) -> Vec<(char, u128)> {
        let mut letters: Vec<_> = self.iter().collect();
        if order == SortOrder::Count {
            letters.sort_by_key(|&(_, count)| Reverse(count));
        }
        letters
    }
}

/// Folds each character the same way [`LetterTotals::tally`] does, dropping anything that is not
/// a letter.
impl FromIterator<(char, u64)> for LetterTotals {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|(c, count)| Some((fold(c)?, count)))
                .fold(BTreeMap::new(), add),
        )
    }
}

#[cfg(test)]
macro_rules! table {
    () => {
        $crate::FrequencyTable::default()
    };
    ($($word:literal => $count:expr),* $(,)?) => {
        $crate::FrequencyTable::from_counts([$(($word, $count)),*], 0)
    };
}
