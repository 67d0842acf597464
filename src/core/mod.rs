//! The cipher engine: stateless, pure functions over text and shifts.
//!
//! Nothing in this module performs I/O or holds state; the CLI and the
//! interactive prompt are thin layers on top of it.

pub mod attack;
pub mod errors;
pub mod frequency;
pub mod shift;
pub mod transform;

pub use attack::{brute_force, BruteForceResult, Candidate};
pub use errors::{Error, Result};
pub use frequency::{analyze_frequency, FrequencyTable};
pub use shift::{is_valid_shift, normalize_shift, parse_shift, ShiftInput, ALPHABET_SIZE};
pub use transform::{decrypt, encrypt};
