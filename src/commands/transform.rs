use super::RunContext;
use crate::core::{decrypt, encrypt, parse_shift, Error};
use crate::io::Report;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Name of the operation as used in messages
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Encrypt => "encryption",
            Self::Decrypt => "decryption",
        }
    }

    pub fn apply(&self, text: &str, shift: i64) -> String {
        match self {
            Self::Encrypt => encrypt(text, shift),
            Self::Decrypt => decrypt(text, shift),
        }
    }

    pub fn report(&self, text: &str, shift: i64) -> Report {
        let output = self.apply(text, shift);
        match self {
            Self::Encrypt => Report::encrypt(text, shift, output),
            Self::Decrypt => Report::decrypt(text, shift, output),
        }
    }
}

/// Pick the shift from the command line, falling back to the configured default
pub fn resolve_shift(
    raw: Option<&str>,
    default_shift: Option<i64>,
    direction: Direction,
) -> crate::core::Result<i64> {
    match raw {
        Some(raw) => parse_shift(raw),
        None => default_shift.ok_or_else(|| Error::missing_shift(direction.operation())),
    }
}

pub fn handle_transform(
    ctx: &RunContext,
    direction: Direction,
    text: &str,
    shift: Option<&str>,
) -> Result<()> {
    let shift = resolve_shift(shift, ctx.config.default_shift(), direction)?;
    log::debug!("Running {} with shift {}", direction.operation(), shift);
    ctx.emit(&direction.report(text, shift))
}
