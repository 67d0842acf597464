//! CLI command implementations for caesar operations.
//!
//! Available commands:
//! - **encrypt** / **decrypt**: Rotate text by a shift
//! - **brute-force**: Decrypt with every possible shift
//! - **frequency**: Letter frequency analysis
//! - **interactive**: Menu-driven prompt loop
//! - **demo**: Built-in demonstration
//! - **init**: Initialize a new `.caesar.toml` configuration file
//!
//! Each command builds a [`Report`] and hands it to [`RunContext::emit`], so
//! the choice of output format and destination lives in one place.

pub mod attack;
pub mod demo;
pub mod frequency;
pub mod init;
pub mod interactive;
pub mod transform;

pub use attack::handle_brute_force;
pub use demo::run_demo;
pub use frequency::handle_frequency;
pub use init::{init_config, init_config_at};
pub use interactive::{interactive_mode, InteractiveSession};
pub use transform::{handle_transform, resolve_shift, Direction};

use crate::config::CaesarConfig;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat, Report};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub config: CaesarConfig,
}

impl RunContext {
    /// Format from the command line, falling back to the config file
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| self.config.default_format())
    }

    /// Render `report` to the configured destination
    pub fn emit(&self, report: &Report) -> Result<()> {
        let destination = io::open_destination(self.output.as_deref())?;
        self.emit_to(report, destination)
    }

    /// Render `report` to an explicit writer
    pub fn emit_to<'a>(&self, report: &Report, destination: Box<dyn Write + 'a>) -> Result<()> {
        let mut writer = create_writer(self.format(), destination, self.formatting.formatter());
        writer.write_report(report)
    }
}
