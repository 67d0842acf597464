//! Letter frequency analysis.

use super::shift::ALPHABET_SIZE;
use serde::Serialize;
use std::collections::BTreeMap;

/// Relative frequency of each lowercase Latin letter in a text.
///
/// The table always holds all 26 letters. When the text contains no letters
/// every entry is `0.0`; otherwise the percentages sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    frequencies: BTreeMap<char, f64>,
    total_letters: usize,
}

impl FrequencyTable {
    /// Percentage for `letter`, case-insensitive. Non-letters yield `None`.
    pub fn get(&self, letter: char) -> Option<f64> {
        self.frequencies
            .get(&letter.to_ascii_lowercase())
            .copied()
    }

    /// Number of letters that were counted.
    pub fn total_letters(&self) -> usize {
        self.total_letters
    }

    /// `true` if the analyzed text contained no letters at all.
    pub fn has_no_letters(&self) -> bool {
        self.total_letters == 0
    }

    /// Letters and percentages in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.frequencies.iter().map(|(letter, pct)| (*letter, *pct))
    }

    /// Letters that occur at least once, most frequent first.
    ///
    /// Ties keep alphabetical order.
    pub fn ranked(&self) -> Vec<(char, f64)> {
        let mut present: Vec<(char, f64)> = self.iter().filter(|(_, pct)| *pct > 0.0).collect();
        present.sort_by(|a, b| b.1.total_cmp(&a.1));
        present
    }

    /// Sum of all percentages.
    pub fn sum(&self) -> f64 {
        self.frequencies.values().sum()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Count Latin letters in `text`, case-insensitively, as percentages.
///
/// Non-letters are ignored and do not count toward the denominator.
///
/// ```
/// use caesar::analyze_frequency;
///
/// let table = analyze_frequency("a1b2");
/// assert_eq!(table.get('a'), Some(50.0));
/// assert_eq!(table.get('z'), Some(0.0));
/// ```
#[must_use]
pub fn analyze_frequency(text: &str) -> FrequencyTable {
    let mut counts = [0usize; ALPHABET_SIZE as usize];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[usize::from(c.to_ascii_lowercase() as u8 - b'a')] += 1;
    }

    let total_letters: usize = counts.iter().sum();
    let frequencies = (b'a'..=b'z')
        .zip(counts)
        .map(|(letter, count)| (char::from(letter), percentage(count, total_letters)))
        .collect();

    FrequencyTable {
        frequencies,
        total_letters,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
