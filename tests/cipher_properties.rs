//! Property-based tests for the cipher engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Decryption inverts encryption for every shift
//! - Shifts are periodic modulo 26
//! - Case and non-letters are preserved position by position
//! - Brute force always contains the true plaintext
//! - Frequencies sum to 100 whenever letters are present

use caesar::{analyze_frequency, brute_force, decrypt, encrypt, is_valid_shift, normalize_shift};
use proptest::prelude::*;

/// Mostly ASCII text with some punctuation and non-Latin characters mixed in
fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.!?0-9]{0,64}",
        "[a-zA-Zéßж🦀 ]{0,32}",
        any::<String>(),
    ]
}

proptest! {
    /// Property: decrypt(encrypt(t, s), s) == t
    #[test]
    fn prop_round_trip(t in text(), s in any::<i64>()) {
        prop_assert_eq!(decrypt(&encrypt(&t, s), s), t);
    }

    /// Property: shifting by 26 more is the same key
    #[test]
    fn prop_shift_periodicity(t in text(), s in -1_000_000i64..1_000_000) {
        let expected = encrypt(&t, s);
        prop_assert_eq!(&encrypt(&t, s + 26), &expected);
        prop_assert_eq!(&encrypt(&t, i64::from(normalize_shift(s))), &expected);
    }

    /// Property: normalize_shift is invariant under adding multiples of 26
    #[test]
    fn prop_normalize_shift_periodic(s in -1_000_000_000i64..1_000_000_000, k in -1000i64..1000) {
        let n = normalize_shift(s);
        prop_assert!(n < 26);
        prop_assert_eq!(n, normalize_shift(s + 26 * k));
    }

    /// Property: per-position case and letter-ness are preserved
    #[test]
    fn prop_case_and_non_alpha_preserved(t in text(), s in any::<i64>()) {
        let encrypted = encrypt(&t, s);
        prop_assert_eq!(encrypted.chars().count(), t.chars().count());
        for (before, after) in t.chars().zip(encrypted.chars()) {
            prop_assert_eq!(before.is_ascii_alphabetic(), after.is_ascii_alphabetic());
            prop_assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            }
        }
    }

    /// Property: brute force has one entry per shift and finds the plaintext
    #[test]
    fn prop_brute_force_complete(t in text(), s in 0u8..26) {
        let candidates = brute_force(&encrypt(&t, i64::from(s)));
        prop_assert_eq!(candidates.len(), 26);
        for (expected, candidate) in (0u8..26).zip(&candidates) {
            prop_assert_eq!(candidate.shift, expected);
        }
        prop_assert_eq!(&candidates[usize::from(s)].text, &t);
    }

    /// Property: percentages sum to 100 when at least one letter is present
    #[test]
    fn prop_frequency_sums_to_hundred(t in "[a-zA-Z0-9 ]{0,80}") {
        let table = analyze_frequency(&t);
        prop_assert_eq!(table.len(), 26);
        if t.chars().any(|c| c.is_ascii_alphabetic()) {
            prop_assert!((table.sum() - 100.0).abs() < 1e-6);
        } else {
            prop_assert_eq!(table.sum(), 0.0);
        }
    }

    /// Property: frequency is invariant under encryption, up to relabeling
    #[test]
    fn prop_frequency_total_survives_encryption(t in text(), s in any::<i64>()) {
        let before = analyze_frequency(&t);
        let after = analyze_frequency(&encrypt(&t, s));
        prop_assert_eq!(before.total_letters(), after.total_letters());
    }

    /// Property: textual integers are always valid shifts
    #[test]
    fn prop_integer_text_is_valid(n in any::<i64>()) {
        prop_assert!(is_valid_shift(n.to_string()));
    }

    /// Property: the validator never panics on arbitrary text
    #[test]
    fn prop_validator_total(s in any::<String>()) {
        let _ = is_valid_shift(s);
    }
}
