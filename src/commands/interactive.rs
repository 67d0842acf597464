//! Menu-driven prompt loop.
//!
//! The session is generic over its input and output so it can be driven
//! from stdin/stdout or from in-memory buffers in tests. End of input is
//! treated like choosing "Exit".

use super::transform::Direction;
use crate::core::{analyze_frequency, brute_force, parse_shift};
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::io::output::{OutputWriter, Report, TerminalWriter, RULE_WIDTH};
use anyhow::Result;
use std::io::{BufRead, Write};

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Encrypt,
    Decrypt,
    BruteForce,
    Frequency,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Encrypt),
            "2" => Some(Self::Decrypt),
            "3" => Some(Self::BruteForce),
            "4" => Some(Self::Frequency),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct InteractiveSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    formatting: FormattingConfig,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W, formatting: FormattingConfig) -> Self {
        Self {
            input,
            output,
            formatting,
        }
    }

    /// Consume the session, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        self.write_banner()?;

        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("\nEnter your choice (1-5): ")? else {
                log::debug!("Input closed, leaving interactive mode");
                break;
            };

            let finished = match MenuChoice::parse(&line) {
                Some(MenuChoice::Encrypt) => self.transform(Direction::Encrypt)?,
                Some(MenuChoice::Decrypt) => self.transform(Direction::Decrypt)?,
                Some(MenuChoice::BruteForce) => self.brute_force()?,
                Some(MenuChoice::Frequency) => self.frequency()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using Caesar Cipher Tool!")?;
                    true
                }
                None => {
                    let message = self.formatter().error("Invalid choice. Please enter 1-5.");
                    writeln!(self.output, "{}", message)?;
                    false
                }
            };

            if finished {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn formatter(&self) -> Box<dyn OutputFormatter> {
        self.formatting.formatter()
    }

    fn write_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "{}", rule)?;
        let title = self.formatter().header("    Caesar Cipher Tool");
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "1. Encrypt text")?;
        writeln!(self.output, "2. Decrypt text")?;
        writeln!(self.output, "3. Brute force attack")?;
        writeln!(self.output, "4. Frequency analysis")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for a shift until a valid one is given; `None` at end of input
    fn prompt_shift(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(raw) = self.prompt("Enter shift value (0-25): ")? else {
                return Ok(None);
            };
            match parse_shift(raw.as_str()) {
                Ok(shift) => return Ok(Some(shift)),
                Err(e) => {
                    log::debug!("{}", e);
                    let message = self
                        .formatter()
                        .warning("Invalid shift value. Please enter a number.");
                    writeln!(self.output, "{}", message)?;
                }
            }
        }
    }

    fn write_report(&mut self, report: &Report) -> Result<()> {
        let formatter = self.formatter();
        TerminalWriter::new(&mut self.output, formatter).write_report(report)
    }

    /// Returns `true` when input ran out
    fn transform(&mut self, direction: Direction) -> Result<bool> {
        let label = match direction {
            Direction::Encrypt => "Enter text to encrypt: ",
            Direction::Decrypt => "Enter text to decrypt: ",
        };
        let Some(text) = self.prompt(label)? else {
            return Ok(true);
        };
        let Some(shift) = self.prompt_shift()? else {
            return Ok(true);
        };

        writeln!(self.output)?;
        self.write_report(&direction.report(&text, shift))?;
        Ok(false)
    }

    fn brute_force(&mut self) -> Result<bool> {
        let Some(text) = self.prompt("Enter ciphertext to attack: ")? else {
            return Ok(true);
        };

        let formatter = self.formatter();
        let rule = formatter.dim(&"-".repeat(RULE_WIDTH));
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} {}",
            formatter.header("Brute force results for:"),
            text
        )?;
        writeln!(self.output, "{}", rule)?;
        for candidate in brute_force(&text) {
            writeln!(self.output, "Shift {:2}: {}", candidate.shift, candidate.text)?;
        }
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Look for meaningful English text above!")?;
        Ok(false)
    }

    fn frequency(&mut self) -> Result<bool> {
        let Some(text) = self.prompt("Enter text for frequency analysis: ")? else {
            return Ok(true);
        };

        writeln!(self.output)?;
        self.write_report(&Report::frequency(&text, analyze_frequency(&text)))?;
        Ok(false)
    }
}

/// Run the interactive session on stdin/stdout
pub fn interactive_mode(formatting: FormattingConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    InteractiveSession::new(stdin.lock(), stdout.lock(), formatting).run()
}
