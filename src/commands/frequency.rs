use super::RunContext;
use crate::core::analyze_frequency;
use crate::io::Report;
use anyhow::Result;

pub fn frequency_report(text: &str) -> Report {
    Report::frequency(text, analyze_frequency(text))
}

pub fn handle_frequency(ctx: &RunContext, text: &str) -> Result<()> {
    let report = frequency_report(text);
    if let Report::Frequency { table, .. } = &report {
        log::debug!("Counted {} letters", table.total_letters());
    }
    ctx.emit(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, render};
    use crate::io::OutputFormat;

    #[test]
    fn test_frequency_markdown_without_letters() {
        let output = render(&context(OutputFormat::Markdown), &frequency_report("42!"));
        assert!(output.contains("No alphabetic characters found in the text."));
    }

    #[test]
    fn test_frequency_markdown_ranks_letters() {
        let output = render(&context(OutputFormat::Markdown), &frequency_report("eeet"));
        assert!(output.contains("| E | 75.0% |"));
        assert!(output.contains("| T | 25.0% |"));
    }
}
