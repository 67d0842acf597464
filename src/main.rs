use anyhow::Result;
use caesar::cli::{Cli, Commands};
use caesar::commands::{self, Direction, RunContext};
use caesar::config::{self, CaesarConfig};
use caesar::formatting::FormattingConfig;
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    caesar::observability::init_logging(cli.verbosity);

    let config = config::resolve_config(cli.config.as_deref())?;
    let ctx = build_run_context(&cli, config);

    match cli.command {
        None | Some(Commands::Interactive) => commands::interactive_mode(ctx.formatting),
        Some(Commands::Encrypt { text, shift }) => {
            commands::handle_transform(&ctx, Direction::Encrypt, &text, shift.as_deref())
        }
        Some(Commands::Decrypt { text, shift }) => {
            commands::handle_transform(&ctx, Direction::Decrypt, &text, shift.as_deref())
        }
        Some(Commands::BruteForce { text }) => commands::handle_brute_force(&ctx, &text),
        Some(Commands::Frequency { text }) => commands::handle_frequency(&ctx, &text),
        Some(Commands::Demo) => handle_demo(&ctx),
        Some(Commands::Init { force }) => commands::init_config(force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, config: &CaesarConfig) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env_with(config.output.color)
    }
}

fn build_run_context(cli: &Cli, config: CaesarConfig) -> RunContext {
    RunContext {
        format: cli.format,
        output: cli.output.clone(),
        formatting: create_formatting_config(cli.plain, &config),
        config,
    }
}

// Side effect handler for the demo
fn handle_demo(ctx: &RunContext) -> Result<()> {
    let mut destination = caesar::io::open_destination(ctx.output.as_deref())?;
    commands::run_demo(&mut destination, ctx.formatting.formatter().as_ref())
}
