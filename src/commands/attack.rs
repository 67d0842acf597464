use super::RunContext;
use crate::core::brute_force;
use crate::io::Report;
use anyhow::Result;

pub fn brute_force_report(text: &str) -> Report {
    Report::brute_force(text, brute_force(text))
}

pub fn handle_brute_force(ctx: &RunContext, text: &str) -> Result<()> {
    log::debug!("Trying all shifts against {} characters", text.chars().count());
    ctx.emit(&brute_force_report(text))
}
