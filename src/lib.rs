//! Caesar cipher toolkit.
//!
//! The [`core`] module holds the cipher engine: pure functions for
//! encryption, decryption, brute-force key search and letter frequency
//! analysis. The remaining modules make up the `caesar` command-line tool.
//!
//! ```
//! use caesar::{brute_force, decrypt, encrypt};
//!
//! let ciphertext = encrypt("Hello World", 3);
//! assert_eq!(ciphertext, "Khoor Zruog");
//! assert_eq!(decrypt(&ciphertext, 3), "Hello World");
//! assert_eq!(brute_force(&ciphertext)[3].text, "Hello World");
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    analyze_frequency, brute_force, decrypt, encrypt, is_valid_shift, normalize_shift,
    parse_shift, BruteForceResult, Candidate, Error, FrequencyTable, Result, ShiftInput,
    ALPHABET_SIZE,
};

pub use crate::config::CaesarConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
