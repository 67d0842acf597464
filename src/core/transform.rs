//! Letter rotation: encryption and decryption.

use super::shift::{normalize_shift, ALPHABET_SIZE};

/// Rotate a single character by an already-normalized shift.
///
/// Only ASCII Latin letters move; everything else is returned unchanged.
fn rotate_char(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let index = c as u8 - base;
    char::from(base + (index + shift) % ALPHABET_SIZE)
}

/// Encrypt `text` by rotating every Latin letter `shift` places forward.
///
/// Case is preserved and non-letters (digits, punctuation, whitespace,
/// non-Latin characters) pass through unchanged.
///
/// ```
/// use caesar::encrypt;
///
/// assert_eq!(encrypt("Hello World", 3), "Khoor Zruog");
/// ```
#[must_use]
pub fn encrypt(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);
    text.chars().map(|c| rotate_char(c, shift)).collect()
}

/// Decrypt `ciphertext` produced by [`encrypt`] with the same `shift`.
///
/// ```
/// use caesar::decrypt;
///
/// assert_eq!(decrypt("Khoor Zruog", 3), "Hello World");
/// ```
#[must_use]
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    // Negate after normalizing so i64::MIN cannot overflow.
    encrypt(ciphertext, -i64::from(normalize_shift(shift)))
}
