//! Exhaustive key search.

use super::shift::ALPHABET_SIZE;
use super::transform::decrypt;
use serde::Serialize;

/// One decryption attempt from a brute-force search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub shift: u8,
    pub text: String,
}

impl From<Candidate> for (u8, String) {
    fn from(candidate: Candidate) -> Self {
        (candidate.shift, candidate.text)
    }
}

/// All 26 candidates for a ciphertext, ordered by ascending shift.
pub type BruteForceResult = Vec<Candidate>;

/// Decrypt `ciphertext` with every shift from 0 to 25.
///
/// Candidates are not scored or ranked; picking the readable one is left to
/// the caller.
///
/// ```
/// use caesar::brute_force;
///
/// let candidates = brute_force("Khoor");
/// assert_eq!(candidates.len(), 26);
/// assert_eq!(candidates[3].text, "Hello");
/// ```
#[must_use]
pub fn brute_force(ciphertext: &str) -> BruteForceResult {
    (0..ALPHABET_SIZE)
        .map(|shift| Candidate {
            shift,
            text: decrypt(ciphertext, i64::from(shift)),
        })
        .collect()
}
