use crate::core::{normalize_shift, BruteForceResult, FrequencyTable};
use crate::formatting::OutputFormatter;
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Width of the horizontal rules in terminal output
pub(crate) const RULE_WIDTH: usize = 40;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Result of a single cipher operation, ready to be rendered
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Report {
    Encrypt {
        input: String,
        shift: i64,
        normalized_shift: u8,
        output: String,
    },
    Decrypt {
        input: String,
        shift: i64,
        normalized_shift: u8,
        output: String,
    },
    BruteForce {
        input: String,
        candidates: BruteForceResult,
    },
    Frequency {
        input: String,
        #[serde(flatten)]
        table: FrequencyTable,
    },
}

impl Report {
    pub fn encrypt(input: &str, shift: i64, output: String) -> Self {
        Self::Encrypt {
            input: input.to_string(),
            shift,
            normalized_shift: normalize_shift(shift),
            output,
        }
    }

    pub fn decrypt(input: &str, shift: i64, output: String) -> Self {
        Self::Decrypt {
            input: input.to_string(),
            shift,
            normalized_shift: normalize_shift(shift),
            output,
        }
    }

    pub fn brute_force(input: &str, candidates: BruteForceResult) -> Self {
        Self::BruteForce {
            input: input.to_string(),
            candidates,
        }
    }

    pub fn frequency(input: &str, table: FrequencyTable) -> Self {
        Self::Frequency {
            input: input.to_string(),
            table,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_transform(
        &mut self,
        title: &str,
        labels: (&str, &str),
        input: &str,
        shift: i64,
        output: &str,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Shift:** {}", shift)?;
        writeln!(self.writer, "- **{}:** {}", labels.0, inline_code(input))?;
        writeln!(self.writer, "- **{}:** {}", labels.1, inline_code(output))?;
        Ok(())
    }

    fn write_brute_force(&mut self, input: &str, candidates: &BruteForceResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Brute Force Attack")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Ciphertext: {}", inline_code(input))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Shift | Candidate |")?;
        writeln!(self.writer, "|------:|-----------|")?;
        for candidate in candidates {
            writeln!(
                self.writer,
                "| {} | {} |",
                candidate.shift,
                escape_table_cell(&candidate.text)
            )?;
        }
        Ok(())
    }

    fn write_frequency(&mut self, input: &str, table: &FrequencyTable) -> anyhow::Result<()> {
        writeln!(self.writer, "# Frequency Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Text: {}", inline_code(input))?;
        writeln!(self.writer)?;
        if table.has_no_letters() {
            writeln!(self.writer, "No alphabetic characters found in the text.")?;
            return Ok(());
        }
        writeln!(self.writer, "| Letter | Frequency |")?;
        writeln!(self.writer, "|--------|----------:|")?;
        for (letter, pct) in table.ranked() {
            writeln!(
                self.writer,
                "| {} | {:.1}% |",
                letter.to_ascii_uppercase(),
                pct
            )?;
        }
        Ok(())
    }
}

fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}

/// Wrap `text` in a code span whose fence is longer than any backtick run
/// inside it. Line breaks become spaces, as they would inside a span.
fn inline_code(text: &str) -> String {
    let flat = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
    let longest_run = flat
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if flat.starts_with('`') || flat.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{flat}{pad}{fence}")
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Encrypt {
                input,
                shift,
                output,
                ..
            } => self.write_transform("Encryption", ("Original", "Encrypted"), input, *shift, output),
            Report::Decrypt {
                input,
                shift,
                output,
                ..
            } => self.write_transform("Decryption", ("Ciphertext", "Decrypted"), input, *shift, output),
            Report::BruteForce { input, candidates } => self.write_brute_force(input, candidates),
            Report::Frequency { input, table } => self.write_frequency(input, table),
        }
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    fn rule(&mut self) -> anyhow::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.writer, "{}", self.formatter.dim(&rule))?;
        Ok(())
    }

    fn write_brute_force(&mut self, input: &str, candidates: &BruteForceResult) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.header("Brute force attack on:"),
            input
        )?;
        self.rule()?;
        for candidate in candidates {
            writeln!(self.writer, "Shift {:2}: {}", candidate.shift, candidate.text)?;
        }
        self.rule()?;
        Ok(())
    }

    fn write_frequency(&mut self, input: &str, table: &FrequencyTable) -> anyhow::Result<()> {
        if table.has_no_letters() {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .warning("No alphabetic characters found in the text.")
            )?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "{} {}",
            self.formatter.header("Frequency analysis for:"),
            input
        )?;
        writeln!(self.writer, "{}", frequency_table(table))?;
        Ok(())
    }
}

fn frequency_table(table: &FrequencyTable) -> Table {
    let mut rendered = Table::new();
    rendered
        .load_preset(ASCII_FULL)
        .set_header(vec!["Letter", "Frequency"]);
    for (letter, pct) in table.ranked() {
        rendered.add_row(vec![
            Cell::new(letter.to_ascii_uppercase()),
            Cell::new(format!("{:5.1}%", pct)).set_alignment(CellAlignment::Right),
        ]);
    }
    rendered
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Encrypt { input, output, .. } => {
                writeln!(self.writer, "{}  {}", self.formatter.bold("Original:"), input)?;
                writeln!(
                    self.writer,
                    "{} {}",
                    self.formatter.bold("Encrypted:"),
                    self.formatter.success(output)
                )?;
            }
            Report::Decrypt { input, output, .. } => {
                writeln!(self.writer, "{} {}", self.formatter.bold("Ciphertext:"), input)?;
                writeln!(
                    self.writer,
                    "{}  {}",
                    self.formatter.bold("Decrypted:"),
                    self.formatter.success(output)
                )?;
            }
            Report::BruteForce { input, candidates } => self.write_brute_force(input, candidates)?,
            Report::Frequency { input, table } => self.write_frequency(input, table)?,
        }
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatter: Box<dyn OutputFormatter>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatter)),
    }
}
